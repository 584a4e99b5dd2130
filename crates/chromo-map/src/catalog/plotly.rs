// SPDX-License-Identifier: MIT
//
// Embedded Plotly color scales, keyed by their module path in
// `plotly.colors` (`["sequential", "Viridis"]`, `["carto", "Vivid"]`,
// `["DEFAULT_PLOTLY_COLORS"]`). Entries are kept as Plotly writes them, hex
// or `rgb(...)` strings.

/// Top-level Plotly modules that name a colormap type.
pub const TYPES: &[&str] = &["sequential", "diverging", "qualitative", "cyclical"];

/// Catalog key `(type, palette, name)` for a module path, or `None` when
/// the path is empty.
pub fn catalog_key<'a>(path: &[&'a str]) -> Option<(&'a str, &'a str, &'a str)> {
    match path {
        [] => None,
        [name] => Some(("miscellaneous", "plotly", *name)),
        [module, name, ..] if TYPES.contains(module) => Some((*module, "plotly", *name)),
        [module, name, ..] => Some(("miscellaneous", *module, *name)),
    }
}

pub const SCALES: &[(&[&str], &[&str])] = &[
    // ── qualitative ─────────────────────────────────────────────────
    (
        &["qualitative", "Plotly"],
        &[
            "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
            "#FF97FF", "#FECB52",
        ],
    ),
    (
        &["qualitative", "D3"],
        &[
            "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
            "#BCBD22", "#17BECF",
        ],
    ),
    (
        &["qualitative", "G10"],
        &[
            "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#0099C6", "#DD4477", "#66AA00",
            "#B82E2E", "#316395",
        ],
    ),
    (
        &["qualitative", "T10"],
        &[
            "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2", "#FF9DA6",
            "#9D755D", "#BAB0AC",
        ],
    ),
    (
        &["qualitative", "Alphabet"],
        &[
            "#AA0DFE", "#3283FE", "#85660D", "#782AB6", "#565656", "#1C8356", "#16FF32", "#F7E1A0",
            "#E2E2E2", "#1CBE4F", "#C4451C", "#DEA0FD", "#FE00FA", "#325A9B", "#FEAF16", "#F8A19F",
            "#90AD1C", "#F6222E", "#1CFFCE", "#2ED9FF", "#B10DA1", "#C075A6", "#FC1CBF", "#B00068",
            "#FBE426", "#FA0087",
        ],
    ),
    (
        &["qualitative", "Set1"],
        &[
            "rgb(228,26,28)", "rgb(55,126,184)", "rgb(77,175,74)", "rgb(152,78,163)",
            "rgb(255,127,0)", "rgb(255,255,51)", "rgb(166,86,40)", "rgb(247,129,191)",
            "rgb(153,153,153)",
        ],
    ),
    (
        &["qualitative", "Bold"],
        &[
            "rgb(127, 60, 141)", "rgb(17, 165, 121)", "rgb(57, 105, 172)", "rgb(242, 183, 1)",
            "rgb(231, 63, 116)", "rgb(128, 186, 90)", "rgb(230, 131, 16)", "rgb(0, 134, 149)",
            "rgb(207, 28, 144)", "rgb(249, 123, 114)", "rgb(165, 170, 153)",
        ],
    ),
    (
        &["qualitative", "Safe"],
        &[
            "rgb(136, 204, 238)", "rgb(204, 102, 119)", "rgb(221, 204, 119)", "rgb(17, 119, 51)",
            "rgb(51, 34, 136)", "rgb(170, 68, 153)", "rgb(68, 170, 153)", "rgb(153, 153, 51)",
            "rgb(136, 34, 85)", "rgb(102, 17, 0)", "rgb(136, 136, 136)",
        ],
    ),
// ── sequential ──────────────────────────────────────────────────
    (
        &["sequential", "Viridis"],
        &[
            "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
            "#b5de2b", "#fde725",
        ],
    ),
    (
        &["sequential", "Plasma"],
        &[
            "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
            "#fdca26", "#f0f921",
        ],
    ),
    (
        &["sequential", "Inferno"],
        &[
            "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925", "#fb9b06",
            "#f7d13d", "#fcffa4",
        ],
    ),
    (
        &["sequential", "Magma"],
        &[
            "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d", "#fd9668",
            "#feca8d", "#fcfdbf",
        ],
    ),
    (
        &["sequential", "Plotly3"],
        &[
            "#0508b8", "#1910d8", "#3c19f0", "#6b1cfb", "#981cfd", "#bf1cfd", "#dd2bfd", "#f246fe",
            "#fc67fd", "#fea5fd", "#febefe", "#fec3fe",
        ],
    ),
    (
        &["sequential", "Blues"],
        &[
            "rgb(247,251,255)", "rgb(222,235,247)", "rgb(198,219,239)", "rgb(158,202,225)",
            "rgb(107,174,214)", "rgb(66,146,198)", "rgb(33,113,181)", "rgb(8,81,156)",
            "rgb(8,48,107)",
        ],
    ),
    (
        &["sequential", "Reds"],
        &[
            "rgb(255,245,240)", "rgb(254,224,210)", "rgb(252,187,161)", "rgb(252,146,114)",
            "rgb(251,106,74)", "rgb(239,59,44)", "rgb(203,24,29)", "rgb(165,15,21)",
            "rgb(103,0,13)",
        ],
    ),
    (
        &["sequential", "Sunset"],
        &[
            "rgb(243, 231, 155)", "rgb(250, 196, 132)", "rgb(248, 160, 126)", "rgb(235, 127, 134)",
            "rgb(206, 102, 147)", "rgb(160, 89, 160)", "rgb(92, 83, 165)",
        ],
    ),
    (
        &["sequential", "Agsunset"],
        &[
            "rgb(75, 41, 145)", "rgb(135, 44, 162)", "rgb(192, 54, 157)", "rgb(234, 79, 136)",
            "rgb(250, 120, 118)", "rgb(246, 169, 122)", "rgb(237, 217, 163)",
        ],
    ),
// ── diverging ───────────────────────────────────────────────────
    (
        &["diverging", "RdBu"],
        &[
            "rgb(103,0,31)", "rgb(178,24,43)", "rgb(214,96,77)", "rgb(244,165,130)",
            "rgb(253,219,199)", "rgb(247,247,247)", "rgb(209,229,240)", "rgb(146,197,222)",
            "rgb(67,147,195)", "rgb(33,102,172)", "rgb(5,48,97)",
        ],
    ),
    (
        &["diverging", "Picnic"],
        &[
            "rgb(0,0,255)", "rgb(51,153,255)", "rgb(102,204,255)", "rgb(153,204,255)",
            "rgb(204,204,255)", "rgb(255,255,255)", "rgb(255,204,255)", "rgb(255,153,255)",
            "rgb(255,102,204)", "rgb(255,102,102)", "rgb(255,0,0)",
        ],
    ),
    (
        &["diverging", "Portland"],
        &[
            "rgb(12,51,131)", "rgb(10,136,186)", "rgb(242,211,56)", "rgb(242,143,56)",
            "rgb(217,30,30)",
        ],
    ),
    (
        &["diverging", "Tealrose"],
        &[
            "rgb(0, 147, 146)", "rgb(114, 170, 161)", "rgb(177, 199, 179)", "rgb(241, 234, 200)",
            "rgb(229, 185, 173)", "rgb(217, 137, 148)", "rgb(208, 88, 126)",
        ],
    ),
// ── cyclical ────────────────────────────────────────────────────
    (
        &["cyclical", "Twilight"],
        &[
            "#e2d9e2", "#9ebbc9", "#6785be", "#5e43a5", "#421257", "#471340", "#8e2c50", "#ba6657",
            "#ceac94", "#e2d9e2",
        ],
    ),
    (
        &["cyclical", "IceFire"],
        &[
            "#000000", "#001f4d", "#003786", "#0e58a8", "#217eb8", "#30a4ca", "#54c8df", "#9be4ef",
            "#e1e9d1", "#f3d573", "#e7b000", "#da8200", "#c65400", "#ac2301", "#820000", "#4c0000",
            "#000000",
        ],
    ),
    (
        &["cyclical", "HSV"],
        &[
            "#ff0000", "#ffa700", "#afff00", "#08ff00", "#00ff9f", "#00b7ff", "#0010ff", "#9700ff",
            "#ff00bf", "#ff0000",
        ],
    ),
// ── module-level lists and non-type modules ─────────────────────
    (
        &["DEFAULT_PLOTLY_COLORS"],
        &[
            "rgb(31, 119, 180)", "rgb(255, 127, 14)", "rgb(44, 160, 44)", "rgb(214, 39, 40)",
            "rgb(148, 103, 189)", "rgb(140, 86, 75)", "rgb(227, 119, 194)", "rgb(127, 127, 127)",
            "rgb(188, 189, 34)", "rgb(23, 190, 207)",
        ],
    ),
    (
        &["carto", "Vivid"],
        &[
            "rgb(229, 134, 6)", "rgb(93, 105, 177)", "rgb(82, 188, 163)", "rgb(153, 201, 69)",
            "rgb(204, 97, 176)", "rgb(36, 121, 108)", "rgb(218, 165, 27)", "rgb(47, 138, 196)",
            "rgb(118, 78, 159)", "rgb(237, 100, 90)", "rgb(165, 170, 153)",
        ],
    ),
    (
        &["colorbrewer", "Greens"],
        &[
            "rgb(247,252,245)", "rgb(229,245,224)", "rgb(199,233,192)", "rgb(161,217,155)",
            "rgb(116,196,118)", "rgb(65,171,93)", "rgb(35,139,69)", "rgb(0,109,44)", "rgb(0,68,27)",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use chromo_color::Color;

    #[test]
    fn keys_follow_module_layout() {
        assert_eq!(
            catalog_key(&["sequential", "Viridis"]),
            Some(("sequential", "plotly", "Viridis"))
        );
        assert_eq!(
            catalog_key(&["DEFAULT_PLOTLY_COLORS"]),
            Some(("miscellaneous", "plotly", "DEFAULT_PLOTLY_COLORS"))
        );
        assert_eq!(catalog_key(&["carto", "Vivid"]), Some(("miscellaneous", "carto", "Vivid")));
        assert_eq!(catalog_key(&[]), None);
    }

    #[test]
    fn every_scale_parses() {
        for (path, colors) in SCALES {
            for spec in *colors {
                assert!(Color::parse(spec).is_ok(), "{path:?}: {spec}");
            }
        }
    }
}
