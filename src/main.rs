// SPDX-License-Identifier: MIT
//
// chromo: colors, gradients and colormaps from the command line.
//
// The binary is a thin shell over the library crates:
//
//   chromo-color → parsing, conversions, terminal output
//   chromo-theme → WCAG contrast searches, harmony palettes
//   chromo-map   → gradients, swatches, the colormap catalog, HTML/SVG/PNG
//
// Flow: parse args → install logging → load config (file, env, flags)
// → run one subcommand against stdout.

mod commands;
mod config;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chromo_color::{Color, Level};
use chromo_map::{Source, Space};
use chromo_theme::{Adjustment, Scheme};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{Fix, GradientRequest, Session, SwatchRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "chromo")]
#[command(
    version,
    about = "Colors, gradients and colormaps with WCAG contrast tooling",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/chromo/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Terminal color mode: auto, truecolor, ansi256 or plain
    #[arg(long, global = true, value_name = "MODE")]
    color: Option<String>,

    /// Print analysis as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show colors with their RGBA, HSV and luminance
    Show {
        /// Color names, hex codes or rgb()/rgba() strings
        #[arg(value_name = "COLOR", required = true)]
        colors: Vec<Color>,
    },

    /// Contrast ratio between a foreground and a background
    Contrast {
        foreground: Color,
        background: Color,

        /// WCAG level to check fixes against (AA or AAA)
        #[arg(long, value_name = "LEVEL")]
        level: Option<Level>,

        /// Repair the foreground with this method
        #[arg(long, value_enum)]
        fix: Option<Fix>,

        /// What the fix scales: lightness or brightness
        #[arg(long, default_value = "lightness")]
        adjust: Adjustment,
    },

    /// Generate a harmony palette from a base color
    Palette {
        base: Color,

        /// complementary, triadic, analogous, monochromatic or split_complementary
        #[arg(long, default_value = "complementary")]
        scheme: Scheme,

        /// Number of colors
        #[arg(long, default_value = "5")]
        count: usize,
    },

    /// Contrast and HSV spread of a set of colors
    Harmony {
        #[arg(value_name = "COLOR", required = true)]
        colors: Vec<Color>,
    },

    /// Look up a colormap by name or regex
    Gradient {
        pattern: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Resample to N colors
        #[arg(long, value_name = "N")]
        resize: Option<usize>,

        /// Space to resample in: rgb, oklab or oklch
        #[arg(long, default_value = "rgb")]
        space: Space,

        /// Reverse the colors
        #[arg(long)]
        reverse: bool,

        /// Analyze contrast against this background
        #[arg(long, value_name = "COLOR")]
        contrast: Option<Color>,

        /// WCAG level for the readable share (AA or AAA)
        #[arg(long, value_name = "LEVEL")]
        level: Option<Level>,

        /// Write an HTML page
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Write an SVG strip
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,

        /// Write a PNG strip
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// List catalog colormaps
    List {
        /// matplotlib, plotly or palettable
        #[arg(long)]
        source: Option<String>,

        /// Colormap type, e.g. sequential or qualitative
        #[arg(long)]
        category: Option<String>,
    },

    /// Several colormaps side by side
    Swatch {
        #[arg(value_name = "PATTERN", required = true)]
        patterns: Vec<String>,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Analyze contrast against this background
        #[arg(long, value_name = "COLOR")]
        contrast: Option<Color>,

        /// Write an HTML page
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Embed PNG strips instead of color tiles in the HTML
        #[arg(long)]
        png_images: bool,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CHROMO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(mode) = &cli.color {
        config.display.color_mode.clone_from(mode);
    }
    let session = Session { mode: config.color_mode()?, json: cli.json, config };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&session, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(session: &Session, command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Show { colors } => commands::show(session, &colors, out),
        Commands::Contrast { foreground, background, level, fix, adjust } => {
            let level = match level {
                Some(level) => level,
                None => session.config.level()?,
            };
            commands::contrast(session, foreground, background, level, adjust, fix, out)
        }
        Commands::Palette { base, scheme, count } => {
            commands::palette(session, base, scheme, count, out)
        }
        Commands::Harmony { colors } => commands::harmony(session, &colors, out),
        Commands::Gradient {
            pattern,
            case_sensitive,
            resize,
            space,
            reverse,
            contrast,
            level,
            html,
            svg,
            png,
        } => {
            let req = GradientRequest {
                pattern,
                case_sensitive,
                resize,
                space,
                reverse,
                contrast,
                level,
                html,
                svg,
                png,
            };
            commands::gradient(session, &req, out)
        }
        Commands::List { source, category } => {
            let source = source
                .map(|s| Source::from_name(&s).ok_or_else(|| anyhow!("unknown source '{s}'")))
                .transpose()?;
            commands::list(session, source, category.as_deref(), out)
        }
        Commands::Swatch { patterns, case_sensitive, contrast, html, png_images } => {
            let req = SwatchRequest { patterns, case_sensitive, contrast, html, png_images };
            commands::swatch(session, &req, out)
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chromo_color::ColorMode;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chromo").chain(args.iter().copied())).unwrap()
    }

    fn session() -> Session {
        Session { mode: ColorMode::Plain, json: false, config: Config::default() }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn colors_parse_as_arguments() {
        let cli = parse(&["show", "red", "#00ff0080"]);
        let Commands::Show { colors } = cli.command else { panic!("expected show") };
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].hexa(), "#00ff0080");
    }

    #[test]
    fn bad_color_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["chromo", "show", "not-a-color"]).is_err());
    }

    #[test]
    fn contrast_flags() {
        let cli =
            parse(&["contrast", "#777", "white", "--level", "aaa", "--fix", "binary", "--json"]);
        assert!(cli.json);
        let Commands::Contrast { level, fix, adjust, .. } = cli.command else {
            panic!("expected contrast")
        };
        assert_eq!(level, Some(Level::Aaa));
        assert_eq!(fix, Some(Fix::Binary));
        assert_eq!(adjust, Adjustment::Lightness);
    }

    #[test]
    fn palette_defaults() {
        let Commands::Palette { scheme, count, .. } = parse(&["palette", "teal"]).command else {
            panic!("expected palette")
        };
        assert_eq!(scheme, Scheme::Complementary);
        assert_eq!(count, 5);
    }

    #[test]
    fn gradient_space_flag() {
        let Commands::Gradient { space, level, .. } = parse(&["gradient", "viridis"]).command else {
            panic!("expected gradient")
        };
        assert_eq!(space, Space::Rgb);
        assert_eq!(level, None);

        let cli = parse(&["gradient", "viridis", "--space", "oklch", "--level", "AAA"]);
        let Commands::Gradient { space, level, .. } = cli.command else {
            panic!("expected gradient")
        };
        assert_eq!(space, Space::Oklch);
        assert_eq!(level, Some(Level::Aaa));
        assert!(Cli::try_parse_from(["chromo", "gradient", "viridis", "--space", "hsv"]).is_err());
    }

    #[test]
    fn unknown_source_is_an_error() {
        let cli = parse(&["list", "--source", "seaborn"]);
        let err = run(&session(), cli.command, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("seaborn"));
    }

    #[test]
    fn run_dispatches_to_command() {
        let cli = parse(&["contrast", "black", "white"]);
        let mut buf = Vec::new();
        run(&session(), cli.command, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("#000000 on #ffffff"));
    }
}
