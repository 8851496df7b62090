//! Enumerated configuration options.
//!
//! Each option is written as a single lowercase token. Parsing is lossy:
//! anything unrecognized (including an empty or missing value) becomes the
//! `Unset` variant, and `Unset` serializes back to the empty string so a
//! round trip through a config file never invents a value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! option_token {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            Unset,
            $($variant),+
        }

        impl $name {
            /// Every token accepted by [`Self::from_token`].
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// Parse a config token. Unknown or empty input yields `Unset`.
            #[must_use]
            pub fn from_token(raw: &str) -> Self {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($token => Self::$variant,)+
                    _ => Self::Unset,
                }
            }

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::Unset => "",
                    $(Self::$variant => $token,)+
                }
            }

            #[must_use]
            pub const fn is_unset(self) -> bool {
                matches!(self, Self::Unset)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.map_or(Self::Unset, |raw| Self::from_token(&raw)))
            }
        }
    };
}

option_token! {
    /// Which panel receives focus when the composer starts.
    pub enum Focus {
        Author => "author",
        Emoji => "emoji",
        Summary => "summary",
    }
}

option_token! {
    /// Terminal quirks that change how emoji widths are drawn.
    pub enum Compatibility {
        Default => "default",
        Ttyd => "ttyd",
        Kitty => "kitty",
    }
}

option_token! {
    /// Background colour family used to pick the available themes.
    pub enum Colour {
        Adaptive => "adaptive",
        Dark => "dark",
        Light => "light",
    }
}

impl Compatibility {
    /// Terminals that draw variation-selector emoji as two cells.
    #[must_use]
    pub const fn wide_variation_emoji(self) -> bool {
        matches!(self, Self::Ttyd | Self::Kitty)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::{Colour, Compatibility, Focus};

    #[test]
    fn focus_tokens_parse() {
        assert_eq!(Focus::from_token(""), Focus::Unset);
        assert_eq!(Focus::from_token("author"), Focus::Author);
        assert_eq!(Focus::from_token("emoji"), Focus::Emoji);
        assert_eq!(Focus::from_token("summary"), Focus::Summary);
        assert_eq!(Focus::from_token("invalid"), Focus::Unset);
        assert_eq!(Focus::from_token("body"), Focus::Unset);
    }

    #[test]
    fn compatibility_tokens_parse() {
        assert_eq!(Compatibility::from_token(""), Compatibility::Unset);
        assert_eq!(Compatibility::from_token("default"), Compatibility::Default);
        assert_eq!(Compatibility::from_token("ttyd"), Compatibility::Ttyd);
        assert_eq!(Compatibility::from_token("kitty"), Compatibility::Kitty);
        assert_eq!(Compatibility::from_token("invalid"), Compatibility::Unset);
    }

    #[test]
    fn colour_tokens_parse() {
        assert_eq!(Colour::from_token(""), Colour::Unset);
        assert_eq!(Colour::from_token("adaptive"), Colour::Adaptive);
        assert_eq!(Colour::from_token("dark"), Colour::Dark);
        assert_eq!(Colour::from_token("light"), Colour::Light);
        assert_eq!(Colour::from_token("invalid"), Colour::Unset);
    }

    #[test]
    fn every_token_round_trips_through_json() {
        fn check<T>(tokens: &[&str])
        where
            T: Serialize + for<'de> Deserialize<'de>,
        {
            for token in tokens {
                let quoted = format!("\"{token}\"");
                let value: T = serde_json::from_str(&quoted).expect("token parses");
                assert_eq!(serde_json::to_string(&value).unwrap(), quoted);
            }
        }

        check::<Focus>(Focus::TOKENS);
        check::<Compatibility>(Compatibility::TOKENS);
        check::<Colour>(Colour::TOKENS);
    }

    #[test]
    fn unset_marshals_to_empty_quoted_token() {
        assert_eq!(serde_json::to_string(&Focus::Unset).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Compatibility::Unset).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Colour::Unset).unwrap(), "\"\"");
    }

    #[test]
    fn unrecognized_and_missing_values_unmarshal_to_unset() {
        let focus: Focus = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(focus, Focus::Unset);
        let colour: Colour = serde_json::from_str("null").unwrap();
        assert_eq!(colour, Colour::Unset);
        let compat: Compatibility = serde_json::from_str("\"\"").unwrap();
        assert_eq!(compat, Compatibility::Unset);
    }

    #[test]
    fn toml_fields_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct View {
            focus: Focus,
            colour: Colour,
        }

        let view: View = toml::from_str("focus = \"summary\"\ncolour = \"neon\"\n").unwrap();
        assert_eq!(
            view,
            View {
                focus: Focus::Summary,
                colour: Colour::Unset
            }
        );

        let written = toml::to_string(&view).unwrap();
        assert_eq!(written, "focus = \"summary\"\ncolour = \"\"\n");
    }

    #[test]
    fn ttyd_and_kitty_use_wide_variation_emoji() {
        assert!(Compatibility::Ttyd.wide_variation_emoji());
        assert!(Compatibility::Kitty.wide_variation_emoji());
        assert!(!Compatibility::Default.wide_variation_emoji());
        assert!(!Compatibility::Unset.wide_variation_emoji());
    }
}
