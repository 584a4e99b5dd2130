// SPDX-License-Identifier: MIT
//
// Embedded Palettable palettes, keyed by module path as Palettable lays them
// out: `palette module / type / Name_N`, or `module / Name_N` for modules
// without types. Several `_N` sizes of one palette may appear; the catalog
// keeps the longest.

use super::matplotlib::{BLUES, PAIRED, RDBU, REDS, SET1, TAB10, TAB20};

/// Type given to palettes whose module has no type level.
pub const SPECIAL: &str = "special";

/// Catalog key `(type, palette module, lowercase name)` for a module path.
/// The trailing `_N` size suffix is dropped.
pub fn catalog_key(path: &[&str]) -> Option<(String, String, String)> {
    let (module, kind, full) = match path {
        [module, full] => (*module, SPECIAL, *full),
        [module, kind, full, ..] => (*module, *kind, *full),
        _ => return None,
    };
    let base = full.rsplit_once('_').map_or(full, |(base, _)| base);
    Some((kind.to_string(), module.to_string(), base.to_lowercase()))
}

pub const PALETTES: &[(&[&str], &[&str])] = &[
    // ── colorbrewer ─────────────────────────────────────────────────
    (&["colorbrewer", "sequential", "Blues_3"], &["#deebf7", "#9ecae1", "#3182bd"]),
    (
        &["colorbrewer", "sequential", "Blues_5"],
        &["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"],
    ),
    (&["colorbrewer", "sequential", "Blues_9"], BLUES),
    (&["colorbrewer", "sequential", "Reds_3"], &["#fee0d2", "#fc9272", "#de2d26"]),
    (&["colorbrewer", "sequential", "Reds_9"], REDS),
    (
        &["colorbrewer", "sequential", "Greens_9"],
        &[
            "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
            "#00441b",
        ],
    ),
    (
        &["colorbrewer", "sequential", "Greys_9"],
        &[
            "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525",
            "#000000",
        ],
    ),
    (
        &["colorbrewer", "sequential", "YlGnBu_9"],
        &[
            "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8", "#253494",
            "#081d58",
        ],
    ),
    (&["colorbrewer", "diverging", "RdBu_3"], &["#ef8a62", "#f7f7f7", "#67a9cf"]),
    (&["colorbrewer", "diverging", "RdBu_11"], RDBU),
    (
        &["colorbrewer", "diverging", "Spectral_11"],
        &[
            "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
            "#66c2a5", "#3288bd", "#5e4fa2",
        ],
    ),
    (
        &["colorbrewer", "diverging", "PuOr_11"],
        &[
            "#7f3b08", "#b35806", "#e08214", "#fdb863", "#fee0b6", "#f7f7f7", "#d8daeb", "#b2abd2",
            "#8073ac", "#542788", "#2d004b",
        ],
    ),
    (&["colorbrewer", "qualitative", "Set1_3"], &["#e41a1c", "#377eb8", "#4daf4a"]),
    (&["colorbrewer", "qualitative", "Set1_9"], SET1),
    (
        &["colorbrewer", "qualitative", "Set2_8"],
        &["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3"],
    ),
    (&["colorbrewer", "qualitative", "Paired_12"], PAIRED),
    (
        &["colorbrewer", "qualitative", "Dark2_8"],
        &["#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666"],
    ),
    // ── cartocolors ─────────────────────────────────────────────────
    (
        &["cartocolors", "qualitative", "Bold_10"],
        &[
            "#7f3c8d", "#11a579", "#3969ac", "#f2b701", "#e73f74", "#80ba5a", "#e68310", "#008695",
            "#cf1c90", "#f97b72",
        ],
    ),
    (
        &["cartocolors", "qualitative", "Safe_10"],
        &[
            "#88ccee", "#cc6677", "#ddcc77", "#117733", "#332288", "#aa4499", "#44aa99", "#999933",
            "#882255", "#661100",
        ],
    ),
    (
        &["cartocolors", "qualitative", "Vivid_10"],
        &[
            "#e58606", "#5d69b1", "#52bca3", "#99c945", "#cc61b0", "#24796c", "#daa51b", "#2f8ac4",
            "#764e9f", "#ed645a",
        ],
    ),
    (
        &["cartocolors", "sequential", "Sunset_7"],
        &["#f3e79b", "#fac484", "#f8a07e", "#eb7f86", "#ce6693", "#a059a0", "#5c53a5"],
    ),
    (
        &["cartocolors", "sequential", "agSunset_7"],
        &["#4b2991", "#872ca2", "#c0369d", "#ea4f88", "#fa7876", "#f6a97a", "#edd9a3"],
    ),
    (
        &["cartocolors", "diverging", "TealRose_7"],
        &["#009392", "#72aaa1", "#b1c7b3", "#f1eac8", "#e5b9ad", "#d98994", "#d0587e"],
    ),
    // ── tableau (no type level) ─────────────────────────────────────
    (&["tableau", "Tableau_10"], TAB10),
    (&["tableau", "Tableau_20"], TAB20),
    (
        &["tableau", "TableauLight_10"],
        &[
            "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5", "#c49c94", "#f7b6d2", "#c7c7c7",
            "#dbdb8d", "#9edae5",
        ],
    ),
    (
        &["tableau", "TableauMedium_10"],
        &[
            "#729ece", "#ff9e4a", "#67bf5c", "#ed665d", "#ad8bc9", "#a8786e", "#ed97ca", "#a2a2a2",
            "#cdcc5d", "#6dccda",
        ],
    ),
    (
        &["tableau", "ColorBlind_10"],
        &[
            "#006ba4", "#ff800e", "#ababab", "#595959", "#5f9ed1", "#c85200", "#898989", "#a2c8ec",
            "#ffbc79", "#cfcfcf",
        ],
    ),
    // ── matplotlib (no type level) ──────────────────────────────────
    (&["matplotlib", "Viridis_10"], VIRIDIS_10),
    (&["matplotlib", "Plasma_10"], PLASMA_10),
    (&["matplotlib", "Inferno_10"], INFERNO_10),
    (&["matplotlib", "Magma_10"], MAGMA_10),
];

const VIRIDIS_10: &[&str] = &[
    "#440154", "#482878", "#3e4a89", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];
const PLASMA_10: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];
const INFERNO_10: &[&str] = &[
    "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925", "#fb9b06",
    "#f7d13d", "#fcffa4",
];
const MAGMA_10: &[&str] = &[
    "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d", "#fd9668",
    "#feca8d", "#fcfdbf",
];

/// Width of one Palettable `mpl_colors` entry, an `(r, g, b)` float tuple.
pub const SPEC_LEN: usize = 3;
