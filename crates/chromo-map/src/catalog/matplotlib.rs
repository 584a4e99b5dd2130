// SPDX-License-Identifier: MIT
//
// Embedded matplotlib colormaps, grouped under matplotlib's own category
// titles. Continuous maps expand to a 256-entry table; listed maps keep
// their colors as given.

use chromo_color::Color;

use super::tables;
use crate::error::Result;
use crate::gradient::Gradient;
use crate::segment::{Anchor, SegmentData};

/// Table size of continuous colormaps (matplotlib's `rcParams['image.lut']`).
pub const LUT_SIZE: usize = 256;

/// How a colormap is defined.
pub enum Data {
    /// A `ListedColormap`: exactly these colors.
    Listed(&'static [&'static str]),
    /// A `ListedColormap` of float sRGB rows.
    Table(&'static [[f64; 3]]),
    /// Evenly spaced hex stops, interpolated.
    Stops(&'static [&'static str]),
    /// `(x, [r, g, b])` stops at explicit positions.
    Positioned(&'static [(f64, [f64; 3])]),
    /// Per-channel segment anchors.
    Segments { red: &'static [Anchor], green: &'static [Anchor], blue: &'static [Anchor] },
}

impl Data {
    /// Build the colormap as a gradient called `name`.
    pub fn build(&self, name: &str) -> Result<Gradient> {
        match self {
            Self::Listed(hexes) => Gradient::from_strs(name, hexes),
            Self::Table(rows) => {
                let colors = rows.iter().map(|&[r, g, b]| Color::clamped(r, g, b, 1.0)).collect();
                Gradient::new(name, colors)
            }
            Self::Stops(hexes) => Gradient::from_strs(name, hexes)?.resize(LUT_SIZE),
            Self::Positioned(stops) => {
                let channel =
                    |c: usize| stops.iter().map(|&(x, rgb)| (x, rgb[c], rgb[c])).collect();
                let data = SegmentData::new(channel(0), channel(1), channel(2));
                Gradient::from_segments(name, &data, LUT_SIZE)
            }
            Self::Segments { red, green, blue } => {
                let data = SegmentData::new(red.to_vec(), green.to_vec(), blue.to_vec());
                Gradient::from_segments(name, &data, LUT_SIZE)
            }
        }
    }

    /// Width of one color entry as matplotlib stores it: the hex string
    /// for listed colors, an RGB row for listed tables, RGBA rows for the
    /// lookup tables of continuous maps.
    pub fn spec_len(&self) -> usize {
        match self {
            Self::Listed(hexes) => hexes.first().map_or(0, |h| h.len()),
            Self::Table(_) => 3,
            _ => 4,
        }
    }
}

/// Catalog type for one of matplotlib's category titles.
pub fn category_type(title: &str) -> &'static str {
    match title {
        "Perceptually Uniform Sequential" | "Sequential" | "Sequential (2)" => "sequential",
        "Diverging" => "diverging",
        "Cyclic" => "cyclic",
        "Qualitative" => "qualitative",
        _ => "miscellaneous",
    }
}

// ─── Category table ──────────────────────────────────────────────────────────

pub const CATEGORIES: &[(&str, &[(&str, Data)])] = &[
    (
        "Perceptually Uniform Sequential",
        &[
            ("viridis", Data::Table(tables::VIRIDIS)),
            ("plasma", Data::Table(tables::PLASMA)),
            ("inferno", Data::Table(tables::INFERNO)),
            ("magma", Data::Table(tables::MAGMA)),
            ("cividis", Data::Table(tables::CIVIDIS)),
        ],
    ),
    (
        "Sequential",
        &[
            ("Greys", Data::Stops(GREYS)),
            ("Purples", Data::Stops(PURPLES)),
            ("Blues", Data::Stops(BLUES)),
            ("Greens", Data::Stops(GREENS)),
            ("Oranges", Data::Stops(ORANGES)),
            ("Reds", Data::Stops(REDS)),
            ("YlOrBr", Data::Stops(YLORBR)),
            ("YlOrRd", Data::Stops(YLORRD)),
            ("OrRd", Data::Stops(ORRD)),
            ("PuRd", Data::Stops(PURD)),
            ("RdPu", Data::Stops(RDPU)),
            ("BuPu", Data::Stops(BUPU)),
            ("GnBu", Data::Stops(GNBU)),
            ("PuBu", Data::Stops(PUBU)),
            ("YlGnBu", Data::Stops(YLGNBU)),
            ("PuBuGn", Data::Stops(PUBUGN)),
            ("BuGn", Data::Stops(BUGN)),
            ("YlGn", Data::Stops(YLGN)),
        ],
    ),
    (
        "Sequential (2)",
        &[
            ("binary", Data::Segments { red: FALLING, green: FALLING, blue: FALLING }),
            ("gist_yarg", Data::Segments { red: FALLING, green: FALLING, blue: FALLING }),
            ("gist_gray", Data::Segments { red: RISING, green: RISING, blue: RISING }),
            ("gray", Data::Segments { red: RISING, green: RISING, blue: RISING }),
            (
                "bone",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (0.746_032, 0.652_778, 0.652_778), (1.0, 1.0, 1.0)],
                    green: &[
                        (0.0, 0.0, 0.0),
                        (0.365_079, 0.319_444, 0.319_444),
                        (0.746_032, 0.777_778, 0.777_778),
                        (1.0, 1.0, 1.0),
                    ],
                    blue: &[(0.0, 0.0, 0.0), (0.365_079, 0.444_444, 0.444_444), (1.0, 1.0, 1.0)],
                },
            ),
            ("spring", Data::Segments { red: ONE, green: RISING, blue: FALLING }),
            (
                "summer",
                Data::Segments {
                    red: RISING,
                    green: &[(0.0, 0.5, 0.5), (1.0, 1.0, 1.0)],
                    blue: &[(0.0, 0.4, 0.4), (1.0, 0.4, 0.4)],
                },
            ),
            ("autumn", Data::Segments { red: ONE, green: RISING, blue: ZERO }),
            (
                "winter",
                Data::Segments {
                    red: ZERO,
                    green: RISING,
                    blue: &[(0.0, 1.0, 1.0), (1.0, 0.5, 0.5)],
                },
            ),
            ("cool", Data::Segments { red: RISING, green: FALLING, blue: ONE }),
            ("Wistia", Data::Stops(WISTIA)),
            (
                "hot",
                Data::Segments {
                    red: &[(0.0, 0.0416, 0.0416), (0.365_079, 1.0, 1.0), (1.0, 1.0, 1.0)],
                    green: &[
                        (0.0, 0.0, 0.0),
                        (0.365_079, 0.0, 0.0),
                        (0.746_032, 1.0, 1.0),
                        (1.0, 1.0, 1.0),
                    ],
                    blue: &[(0.0, 0.0, 0.0), (0.746_032, 0.0, 0.0), (1.0, 1.0, 1.0)],
                },
            ),
            (
                "afmhot",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (0.5, 1.0, 1.0), (1.0, 1.0, 1.0)],
                    green: &[(0.0, 0.0, 0.0), (0.25, 0.0, 0.0), (0.75, 1.0, 1.0), (1.0, 1.0, 1.0)],
                    blue: &[(0.0, 0.0, 0.0), (0.5, 0.0, 0.0), (1.0, 1.0, 1.0)],
                },
            ),
            (
                "gist_heat",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (2.0 / 3.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
                    green: &[(0.0, 0.0, 0.0), (0.5, 0.0, 0.0), (1.0, 1.0, 1.0)],
                    blue: &[(0.0, 0.0, 0.0), (0.75, 0.0, 0.0), (1.0, 1.0, 1.0)],
                },
            ),
            (
                "copper",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (0.809_524, 1.0, 1.0), (1.0, 1.0, 1.0)],
                    green: &[(0.0, 0.0, 0.0), (1.0, 0.7812, 0.7812)],
                    blue: &[(0.0, 0.0, 0.0), (1.0, 0.4975, 0.4975)],
                },
            ),
        ],
    ),
    (
        "Diverging",
        &[
            ("PiYG", Data::Stops(PIYG)),
            ("PRGn", Data::Stops(PRGN)),
            ("BrBG", Data::Stops(BRBG)),
            ("PuOr", Data::Stops(PUOR)),
            ("RdGy", Data::Stops(RDGY)),
            ("RdBu", Data::Stops(RDBU)),
            ("RdYlBu", Data::Stops(RDYLBU)),
            ("RdYlGn", Data::Stops(RDYLGN)),
            ("Spectral", Data::Stops(SPECTRAL)),
            ("coolwarm", Data::Positioned(COOLWARM)),
            (
                "bwr",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (0.5, 1.0, 1.0), (1.0, 1.0, 1.0)],
                    green: &[(0.0, 0.0, 0.0), (0.5, 1.0, 1.0), (1.0, 0.0, 0.0)],
                    blue: &[(0.0, 1.0, 1.0), (0.5, 1.0, 1.0), (1.0, 0.0, 0.0)],
                },
            ),
            (
                "seismic",
                Data::Segments {
                    red: &[
                        (0.0, 0.0, 0.0),
                        (0.25, 0.0, 0.0),
                        (0.5, 1.0, 1.0),
                        (0.75, 1.0, 1.0),
                        (1.0, 0.5, 0.5),
                    ],
                    green: &[
                        (0.0, 0.0, 0.0),
                        (0.25, 0.0, 0.0),
                        (0.5, 1.0, 1.0),
                        (0.75, 0.0, 0.0),
                        (1.0, 0.0, 0.0),
                    ],
                    blue: &[
                        (0.0, 0.3, 0.3),
                        (0.25, 1.0, 1.0),
                        (0.5, 1.0, 1.0),
                        (0.75, 0.0, 0.0),
                        (1.0, 0.0, 0.0),
                    ],
                },
            ),
        ],
    ),
    (
        "Cyclic",
        &[(
            "hsv",
            Data::Segments {
                red: &[
                    (0.0, 1.0, 1.0),
                    (0.158_730, 1.0, 1.0),
                    (0.174_603, 0.968_750, 0.968_750),
                    (0.333_333, 0.031_250, 0.031_250),
                    (0.349_206, 0.0, 0.0),
                    (0.666_667, 0.0, 0.0),
                    (0.682_540, 0.031_250, 0.031_250),
                    (0.841_270, 0.968_750, 0.968_750),
                    (0.857_143, 1.0, 1.0),
                    (1.0, 1.0, 1.0),
                ],
                green: &[
                    (0.0, 0.0, 0.0),
                    (0.158_730, 0.937_500, 0.937_500),
                    (0.174_603, 1.0, 1.0),
                    (0.507_937, 1.0, 1.0),
                    (0.666_667, 0.062_500, 0.062_500),
                    (0.682_540, 0.0, 0.0),
                    (1.0, 0.0, 0.0),
                ],
                blue: &[
                    (0.0, 0.0, 0.0),
                    (0.333_333, 0.0, 0.0),
                    (0.349_206, 0.062_500, 0.062_500),
                    (0.507_937, 1.0, 1.0),
                    (0.841_270, 1.0, 1.0),
                    (0.857_143, 0.937_500, 0.937_500),
                    (1.0, 0.093_750, 0.093_750),
                ],
            },
        )],
    ),
    (
        "Qualitative",
        &[
            ("Pastel1", Data::Listed(PASTEL1)),
            ("Pastel2", Data::Listed(PASTEL2)),
            ("Paired", Data::Listed(PAIRED)),
            ("Accent", Data::Listed(ACCENT)),
            ("Dark2", Data::Listed(DARK2)),
            ("Set1", Data::Listed(SET1)),
            ("Set2", Data::Listed(SET2)),
            ("Set3", Data::Listed(SET3)),
            ("tab10", Data::Listed(TAB10)),
            ("tab20", Data::Listed(TAB20)),
            ("tab20b", Data::Listed(TAB20B)),
            ("tab20c", Data::Listed(TAB20C)),
        ],
    ),
    (
        "Miscellaneous",
        &[
            (
                "ocean",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (2.0 / 3.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
                    green: &[(0.0, 0.5, 0.5), (1.0 / 3.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
                    blue: RISING,
                },
            ),
            (
                "terrain",
                Data::Positioned(&[
                    (0.00, [0.2, 0.2, 0.6]),
                    (0.15, [0.0, 0.6, 1.0]),
                    (0.25, [0.0, 0.8, 0.4]),
                    (0.50, [1.0, 1.0, 0.6]),
                    (0.75, [0.5, 0.36, 0.33]),
                    (1.00, [1.0, 1.0, 1.0]),
                ]),
            ),
            (
                "CMRmap",
                Data::Positioned(&[
                    (0.000, [0.00, 0.00, 0.00]),
                    (0.125, [0.15, 0.15, 0.50]),
                    (0.250, [0.30, 0.15, 0.75]),
                    (0.375, [0.60, 0.20, 0.50]),
                    (0.500, [1.00, 0.25, 0.15]),
                    (0.625, [0.90, 0.50, 0.00]),
                    (0.750, [0.90, 0.75, 0.10]),
                    (0.875, [0.90, 0.90, 0.50]),
                    (1.000, [1.00, 1.00, 1.00]),
                ]),
            ),
            (
                "brg",
                Data::Segments {
                    red: &[(0.0, 0.0, 0.0), (0.5, 1.0, 1.0), (1.0, 0.0, 0.0)],
                    green: &[(0.0, 0.0, 0.0), (0.5, 0.0, 0.0), (1.0, 1.0, 1.0)],
                    blue: &[(0.0, 1.0, 1.0), (0.5, 0.0, 0.0), (1.0, 0.0, 0.0)],
                },
            ),
            (
                "gist_rainbow",
                Data::Positioned(&[
                    (0.000, [1.00, 0.00, 0.16]),
                    (0.030, [1.00, 0.00, 0.00]),
                    (0.215, [1.00, 1.00, 0.00]),
                    (0.400, [0.00, 1.00, 0.00]),
                    (0.586, [0.00, 1.00, 1.00]),
                    (0.770, [0.00, 0.00, 1.00]),
                    (0.954, [1.00, 0.00, 1.00]),
                    (1.000, [1.00, 0.00, 0.75]),
                ]),
            ),
            (
                "jet",
                Data::Segments {
                    red: &[
                        (0.0, 0.0, 0.0),
                        (0.35, 0.0, 0.0),
                        (0.66, 1.0, 1.0),
                        (0.89, 1.0, 1.0),
                        (1.0, 0.5, 0.5),
                    ],
                    green: &[
                        (0.0, 0.0, 0.0),
                        (0.125, 0.0, 0.0),
                        (0.375, 1.0, 1.0),
                        (0.64, 1.0, 1.0),
                        (0.91, 0.0, 0.0),
                        (1.0, 0.0, 0.0),
                    ],
                    blue: &[
                        (0.0, 0.5, 0.5),
                        (0.11, 1.0, 1.0),
                        (0.34, 1.0, 1.0),
                        (0.65, 0.0, 0.0),
                        (1.0, 0.0, 0.0),
                    ],
                },
            ),
            ("turbo", Data::Table(tables::TURBO)),
        ],
    ),
];

// ─── Shared channels and tables ──────────────────────────────────────────────

const RISING: &[Anchor] = &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];
const FALLING: &[Anchor] = &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)];
const ONE: &[Anchor] = &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)];
const ZERO: &[Anchor] = &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)];

/// Moreland's smooth cool-warm diverging map at 33 evenly spaced anchors.
const COOLWARM: &[(f64, [f64; 3])] = &[
    (0.0, [0.229_805_7, 0.298_717_966, 0.753_683_153]),
    (0.031_25, [0.266_233_88, 0.353_094_838, 0.801_466_763]),
    (0.062_5, [0.303_868_91, 0.406_535_296, 0.844_958_67]),
    (0.093_75, [0.342_804_478, 0.458_757_618, 0.883_725_899]),
    (0.125, [0.383_013_34, 0.509_419_04, 0.917_387_822]),
    (0.156_25, [0.424_369_608, 0.558_148_092, 0.945_619_588]),
    (0.187_5, [0.466_667_08, 0.604_562_568, 0.968_154_911]),
    (0.218_75, [0.509_635_204, 0.648_280_772, 0.984_788_14]),
    (0.25, [0.552_953_156, 0.688_929_332, 0.995_375_608]),
    (0.281_25, [0.596_262_162, 0.726_149_107, 0.999_836_203]),
    (0.312_5, [0.639_176_211, 0.759_599_947, 0.998_151_185]),
    (0.343_75, [0.681_291_281, 0.788_964_712, 0.990_363_227]),
    (0.375, [0.722_193_294, 0.813_952_739, 0.976_574_709]),
    (0.406_25, [0.761_464_949, 0.834_302_879, 0.956_945_269]),
    (0.437_5, [0.798_691_636, 0.849_786_142, 0.931_688_648]),
    (0.468_75, [0.833_466_556, 0.860_207_984, 0.901_068_838]),
    (0.5, [0.865_395_197, 0.865_410_21, 0.865_395_561]),
    (0.531_25, [0.897_787_179, 0.848_937_047, 0.820_880_546]),
    (0.562_5, [0.924_127_593, 0.827_384_882, 0.774_508_472]),
    (0.593_75, [0.944_468_518, 0.800_927_443, 0.726_736_146]),
    (0.625, [0.958_852_946, 0.769_767_752, 0.678_007_945]),
    (0.656_25, [0.967_328_03, 0.734_132_809, 0.628_751_763]),
    (0.687_5, [0.969_954_137, 0.694_266_682, 0.579_375_448]),
    (0.718_75, [0.966_811_177, 0.650_421_156, 0.530_263_762]),
    (0.75, [0.958_003_065, 0.602_842_431, 0.481_775_914]),
    (0.781_25, [0.943_660_866, 0.551_750_968, 0.434_243_684]),
    (0.812_5, [0.923_944_917, 0.497_308_56, 0.387_970_225]),
    (0.843_75, [0.899_046_17, 0.439_559_467, 0.343_229_596]),
    (0.875, [0.869_186_849, 0.378_313_092, 0.300_267_182]),
    (0.906_25, [0.834_620_542, 0.312_874_446, 0.259_301_199]),
    (0.937_5, [0.795_631_745, 0.241_283_79, 0.220_525_627]),
    (0.968_75, [0.752_534_934, 0.157_246_067, 0.184_115_123]),
    (1.0, [0.705_673_158, 0.015_556_16, 0.150_232_812]),
];

pub const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];
pub const REDS: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];
pub const RDBU: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de",
    "#4393c3", "#2166ac", "#053061",
];
pub const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];
pub const PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];
pub const TAB10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];
pub const TAB20: &[&str] = &[
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];
const GREYS: &[&str] = &[
    "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525",
    "#000000",
];
const PURPLES: &[&str] = &[
    "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#54278f",
    "#3f007d",
];
const GREENS: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];
const ORANGES: &[&str] = &[
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603",
    "#7f2704",
];
const YLORBR: &[&str] = &[
    "#ffffe5", "#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02", "#993404",
    "#662506",
];
const YLORRD: &[&str] = &[
    "#ffffcc", "#ffeda0", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c", "#bd0026",
    "#800026",
];
const ORRD: &[&str] = &[
    "#fff7ec", "#fee8c8", "#fdd49e", "#fdbb84", "#fc8d59", "#ef6548", "#d7301f", "#b30000",
    "#7f0000",
];
const PURD: &[&str] = &[
    "#f7f4f9", "#e7e1ef", "#d4b9da", "#c994c7", "#df65b0", "#e7298a", "#ce1256", "#980043",
    "#67001f",
];
const RDPU: &[&str] = &[
    "#fff7f3", "#fde0dd", "#fcc5c0", "#fa9fb5", "#f768a1", "#dd3497", "#ae017e", "#7a0177",
    "#49006a",
];
const BUPU: &[&str] = &[
    "#f7fcfd", "#e0ecf4", "#bfd3e6", "#9ebcda", "#8c96c6", "#8c6bb1", "#88419d", "#810f7c",
    "#4d004b",
];
const GNBU: &[&str] = &[
    "#f7fcf0", "#e0f3db", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe", "#0868ac",
    "#084081",
];
const PUBU: &[&str] = &[
    "#fff7fb", "#ece7f2", "#d0d1e6", "#a6bddb", "#74a9cf", "#3690c0", "#0570b0", "#045a8d",
    "#023858",
];
const YLGNBU: &[&str] = &[
    "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8", "#253494",
    "#081d58",
];
const PUBUGN: &[&str] = &[
    "#fff7fb", "#ece2f0", "#d0d1e6", "#a6bddb", "#67a9cf", "#3690c0", "#02818a", "#016c59",
    "#014636",
];
const BUGN: &[&str] = &[
    "#f7fcfd", "#e5f5f9", "#ccece6", "#99d8c9", "#66c2a4", "#41ae76", "#238b45", "#006d2c",
    "#00441b",
];
const YLGN: &[&str] = &[
    "#ffffe5", "#f7fcb9", "#d9f0a3", "#addd8e", "#78c679", "#41ab5d", "#238443", "#006837",
    "#004529",
];
const WISTIA: &[&str] = &[
    "#e4ff7a", "#ffe81a", "#ffbd00", "#ffa000", "#fc7f00",
];
const PIYG: &[&str] = &[
    "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef", "#f7f7f7", "#e6f5d0", "#b8e186",
    "#7fbc41", "#4d9221", "#276419",
];
const PRGN: &[&str] = &[
    "#40004b", "#762a83", "#9970ab", "#c2a5cf", "#e7d4e8", "#f7f7f7", "#d9f0d3", "#a6dba0",
    "#5aae61", "#1b7837", "#00441b",
];
const BRBG: &[&str] = &[
    "#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5", "#c7eae5", "#80cdc1",
    "#35978f", "#01665e", "#003c30",
];
const PUOR: &[&str] = &[
    "#7f3b08", "#b35806", "#e08214", "#fdb863", "#fee0b6", "#f7f7f7", "#d8daeb", "#b2abd2",
    "#8073ac", "#542788", "#2d004b",
];
const RDGY: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#ffffff", "#e0e0e0", "#bababa",
    "#878787", "#4d4d4d", "#1a1a1a",
];
const RDYLBU: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9",
    "#74add1", "#4575b4", "#313695",
];
const RDYLGN: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a",
    "#66bd63", "#1a9850", "#006837",
];
const SPECTRAL: &[&str] = &[
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
    "#66c2a5", "#3288bd", "#5e4fa2",
];
const PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2",
];
const PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc", "#cccccc",
];
const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
];
const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];
const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];
const SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];
const TAB20B: &[&str] = &[
    "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252", "#b5cf6b", "#cedb9c",
    "#8c6d31", "#bd9e39", "#e7ba52", "#e7cb94", "#843c39", "#ad494a", "#d6616b", "#e7969c",
    "#7b4173", "#a55194", "#ce6dbd", "#de9ed6",
];
const TAB20C: &[&str] = &[
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
    "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    /// matplotlib's `to_hex`, which rounds instead of truncating.
    fn rounded_hex(c: Color) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |v: f64| (v * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(c.r()), byte(c.g()), byte(c.b()))
    }

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn find(name: &str) -> &'static Data {
        CATEGORIES
            .iter()
            .flat_map(|(_, maps)| maps.iter())
            .find(|(n, _)| *n == name)
            .map(|(_, d)| d)
            .unwrap()
    }

    #[test]
    fn every_entry_builds() {
        for (title, maps) in CATEGORIES {
            for (name, data) in *maps {
                let g = data.build(name).unwrap_or_else(|e| panic!("{title}/{name}: {e}"));
                let expected = match data {
                    Data::Listed(hexes) => hexes.len(),
                    Data::Table(rows) => rows.len(),
                    _ => LUT_SIZE,
                };
                assert_eq!(g.len(), expected, "{name}");
                assert_eq!(g.name(), *name);
            }
        }
    }

    #[test]
    fn category_titles_map_to_types() {
        assert_eq!(category_type("Perceptually Uniform Sequential"), "sequential");
        assert_eq!(category_type("Sequential (2)"), "sequential");
        assert_eq!(category_type("Cyclic"), "cyclic");
        assert_eq!(category_type("Something else"), "miscellaneous");
    }

    #[test]
    fn uniform_maps_match_matplotlib_midpoints() {
        for (name, first, middle, last) in [
            ("viridis", "#440154", "#21918c", "#fde725"),
            ("plasma", "#0d0887", "#cc4778", "#f0f921"),
            ("inferno", "#000004", "#bc3754", "#fcffa4"),
            ("magma", "#000004", "#b73779", "#fcfdbf"),
            ("cividis", "#00224e", "#7d7c78", "#fee838"),
            ("turbo", "#30123b", "#a4fc3c", "#7a0403"),
        ] {
            let g = find(name).build(name).unwrap();
            assert_eq!(g.len(), LUT_SIZE, "{name}");
            assert_eq!(rounded_hex(g.first()), first, "{name}");
            assert_eq!(rounded_hex(g[128]), middle, "{name}");
            assert_eq!(rounded_hex(g.last()), last, "{name}");
        }
    }

    #[test]
    fn viridis_interior_is_tabulated_not_interpolated() {
        let g = find("viridis").build("viridis").unwrap();
        assert!(approx_eq(g[64].r(), 0.229_739, 1e-9));
        assert!(approx_eq(g[64].g(), 0.322_361, 1e-9));
        assert!(approx_eq(g[64].b(), 0.545_706, 1e-9));
        assert_eq!(rounded_hex(g.lookup(0.5)), "#21918c");
    }

    #[test]
    fn coolwarm_is_white_in_the_middle() {
        let g = find("coolwarm").build("coolwarm").unwrap();
        assert_eq!(rounded_hex(g.first()), "#3b4cc0");
        assert_eq!(rounded_hex(g.last()), "#b40426");
        let middle = g.at(0.5).unwrap();
        assert!(approx_eq(middle.r(), 0.865_395, 2e-3), "{middle:?}");
        assert!(approx_eq(middle.g(), 0.865_410, 2e-3), "{middle:?}");
    }

    #[test]
    fn diverging_and_misc_hold_new_tables() {
        let in_category = |title: &str, name: &str| {
            CATEGORIES.iter().any(|(t, maps)| *t == title && maps.iter().any(|(n, _)| *n == name))
        };
        assert!(in_category("Diverging", "coolwarm"));
        assert!(in_category("Miscellaneous", "turbo"));
        assert!(in_category("Perceptually Uniform Sequential", "cividis"));
    }

    #[test]
    fn jet_passes_through_green_and_ends_dark_red() {
        let g = find("jet").build("jet").unwrap();
        assert_eq!(g.first(), hex("#000080"));
        assert!(approx_eq(g.last().r(), 0.5, 1e-9));
        let middle = g.at(0.5).unwrap();
        assert!(middle.g() > 0.9, "{middle:?}");
    }

    #[test]
    fn gray_is_linear() {
        let g = find("gray").build("gray").unwrap();
        assert!(approx_eq(g[128].r(), 128.0 / 255.0, 1e-9));
    }

    #[test]
    fn listed_keep_length() {
        assert_eq!(find("tab20").build("tab20").unwrap().len(), 20);
        assert_eq!(find("tab10").spec_len(), 7);
        assert_eq!(find("viridis").spec_len(), 3);
        assert_eq!(find("jet").spec_len(), 4);
    }
}
