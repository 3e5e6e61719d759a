#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Viridis,
    Plotly,
    Blues,
    Reds,
    Greens,
    Set1,
    Pastel,
}

const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];
const PLOTLY: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];
const BLUES: &[&str] = &[
    "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c", "#08306b",
];
const REDS: &[&str] = &[
    "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15", "#67000d",
];
const GREENS: &[&str] = &[
    "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c", "#00441b",
];
const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];
const PASTEL: &[&str] = &[
    "#66c5cc", "#f6cf71", "#f89c74", "#dcb0f2", "#87c55f", "#9eb9f3", "#fe88b1", "#c9db74",
    "#8be0a4", "#b497e7",
];

impl ColorScheme {
    #[doc = "Resolve a scheme name from a response body; unknown names fall back to the plotly palette."]
    pub fn parse_or_default(value: &str) -> ColorScheme {
        match value.trim().to_lowercase().as_str() {
            "viridis" => ColorScheme::Viridis,
            "plotly" => ColorScheme::Plotly,
            "blues" => ColorScheme::Blues,
            "reds" => ColorScheme::Reds,
            "greens" => ColorScheme::Greens,
            "set1" => ColorScheme::Set1,
            "pastel" => ColorScheme::Pastel,
            _ => ColorScheme::Plotly,
        }
    }

    pub fn palette(&self) -> &'static [&'static str] {
        match self {
            ColorScheme::Viridis => VIRIDIS,
            ColorScheme::Plotly => PLOTLY,
            ColorScheme::Blues => BLUES,
            ColorScheme::Reds => REDS,
            ColorScheme::Greens => GREENS,
            ColorScheme::Set1 => SET1,
            ColorScheme::Pastel => PASTEL,
        }
    }

    #[doc = "Cycle the palette so each of `count` series gets a color."]
    pub fn color_cycle(&self, count: usize) -> Vec<String> {
        let palette: &[&str] = self.palette();
        (0..count)
            .map(|i| palette[i % palette.len()].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scheme_falls_back_to_plotly() {
        assert_eq!(ColorScheme::parse_or_default("magma"), ColorScheme::Plotly);
        assert_eq!(ColorScheme::parse_or_default("Viridis"), ColorScheme::Viridis);
    }

    #[test]
    fn color_cycle_wraps_around_the_palette() {
        let colors: Vec<String> = ColorScheme::Set1.color_cycle(12);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], colors[9]);
    }
}
