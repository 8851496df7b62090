//! Colour themes.
//!
//! The registry is built once per session from the configured [`Colour`] and
//! passed by reference to drawing code.

use ratatui::style::{Color, Modifier, Style};

use committed_types::Colour;

/// Resolved palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub key: Color,
    pub label: Color,
}

impl Palette {
    const fn rgb(colours: [[u8; 3]; 6]) -> Self {
        const fn c(v: [u8; 3]) -> Color {
            Color::Rgb(v[0], v[1], v[2])
        }
        Self {
            bg: c(colours[0]),
            text: c(colours[1]),
            muted: c(colours[2]),
            accent: c(colours[3]),
            key: c(colours[4]),
            label: c(colours[5]),
        }
    }
}

struct Theme {
    id: &'static str,
    palette: Palette,
}

// bg, text, muted, accent, key, label
const DARK: &[Theme] = &[
    Theme {
        id: "builtin_dark",
        palette: Palette::rgb([
            [0, 0, 0],
            [187, 187, 187],
            [85, 85, 85],
            [85, 85, 255],
            [255, 255, 85],
            [187, 187, 187],
        ]),
    },
    Theme {
        id: "dracula",
        palette: Palette::rgb([
            [40, 42, 54],
            [248, 248, 242],
            [98, 114, 164],
            [189, 147, 249],
            [255, 121, 198],
            [139, 233, 253],
        ]),
    },
    Theme {
        id: "gruvbox_dark",
        palette: Palette::rgb([
            [40, 40, 40],
            [235, 219, 178],
            [146, 131, 116],
            [254, 128, 25],
            [250, 189, 47],
            [131, 165, 152],
        ]),
    },
    Theme {
        id: "nord",
        palette: Palette::rgb([
            [46, 52, 64],
            [216, 222, 233],
            [76, 86, 106],
            [136, 192, 208],
            [235, 203, 139],
            [129, 161, 193],
        ]),
    },
    Theme {
        id: "retrowave",
        palette: Palette::rgb([
            [30, 14, 46],
            [255, 255, 255],
            [125, 101, 153],
            [255, 47, 146],
            [252, 238, 12],
            [0, 255, 234],
        ]),
    },
    Theme {
        id: "solarized_dark_higher_contrast",
        palette: Palette::rgb([
            [0, 30, 39],
            [156, 194, 195],
            [0, 99, 136],
            [38, 139, 210],
            [181, 137, 0],
            [42, 161, 152],
        ]),
    },
    Theme {
        id: "tokyo_night",
        palette: Palette::rgb([
            [26, 27, 38],
            [192, 202, 245],
            [86, 95, 137],
            [122, 162, 247],
            [224, 175, 104],
            [125, 207, 255],
        ]),
    },
];

const LIGHT: &[Theme] = &[
    Theme {
        id: "builtin_light",
        palette: Palette::rgb([
            [255, 255, 255],
            [0, 0, 0],
            [128, 128, 128],
            [0, 0, 187],
            [187, 0, 0],
            [0, 0, 0],
        ]),
    },
    Theme {
        id: "builtin_solarized_light",
        palette: Palette::rgb([
            [253, 246, 227],
            [101, 123, 131],
            [147, 161, 161],
            [38, 139, 210],
            [203, 75, 22],
            [42, 161, 152],
        ]),
    },
    Theme {
        id: "builtin_tango_light",
        palette: Palette::rgb([
            [255, 255, 255],
            [46, 52, 54],
            [85, 87, 83],
            [52, 101, 164],
            [204, 0, 0],
            [78, 154, 6],
        ]),
    },
    Theme {
        id: "gruvbox_light",
        palette: Palette::rgb([
            [251, 241, 199],
            [60, 56, 54],
            [146, 131, 116],
            [175, 58, 3],
            [181, 118, 20],
            [7, 102, 120],
        ]),
    },
    Theme {
        id: "tokyo_night_light",
        palette: Palette::rgb([
            [213, 214, 219],
            [52, 59, 88],
            [150, 153, 163],
            [52, 84, 138],
            [143, 94, 21],
            [15, 75, 110],
        ]),
    },
];

/// Ordered theme set with one active entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRegistry {
    set: ThemeSet,
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeSet {
    Dark,
    Light,
}

impl ThemeSet {
    fn themes(self) -> &'static [Theme] {
        match self {
            ThemeSet::Dark => DARK,
            ThemeSet::Light => LIGHT,
        }
    }
}

impl ThemeRegistry {
    /// Light colour selects the light set; everything else the dark set.
    #[must_use]
    pub fn new(colour: Colour) -> Self {
        let set = match colour {
            Colour::Light => ThemeSet::Light,
            Colour::Dark | Colour::Adaptive | Colour::Unset => ThemeSet::Dark,
        };
        Self { set, index: 0 }
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.set.themes().iter().map(|t| t.id).collect()
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.set.themes()[self.index].id
    }

    /// Switch to `id`. Unknown ids leave the current theme and return false.
    pub fn set_id(&mut self, id: &str) -> bool {
        match self.set.themes().iter().position(|t| t.id == id) {
            Some(index) => {
                self.index = index;
                true
            }
            None => {
                tracing::debug!(id, "Unknown theme id");
                false
            }
        }
    }

    /// Advance to the next theme, wrapping from the last to the first.
    pub fn next(&mut self) -> &'static str {
        self.index = (self.index + 1) % self.set.themes().len();
        self.id()
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.set.themes()[self.index].palette
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn base(palette: &Palette) -> Style {
        Style::default().fg(palette.text).bg(palette.bg)
    }

    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default().fg(palette.text)
    }

    #[must_use]
    pub fn blurred(palette: &Palette) -> Style {
        Style::default().fg(palette.muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.label)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.key)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn trailer(palette: &Palette) -> Style {
        Style::default().fg(palette.accent)
    }
}
