//! Fixed option sets for icons and colors

use crate::error::NewsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value picked from a closed, named set of options
pub trait Choice: Copy + Eq + fmt::Display + FromStr + 'static {
    /// Every option, in the order they are offered to the user
    const ALL: &'static [Self];

    /// The option's on-disk and on-screen name
    fn as_str(self) -> &'static str;

    /// Names of all options, in offer order
    #[must_use]
    #[inline]
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.as_str()).collect()
    }

    /// Look an option up by its exact name
    #[must_use]
    #[inline]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.as_str() == name)
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = NewsError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| {
                    NewsError::validation(format!(
                        "Unknown {} '{s}'. Expected one of: {}",
                        $kind,
                        Self::names().join(", ")
                    ))
                })
            }
        }
    };
}

choice_enum! {
    /// Icon shown next to an article or a tag
    pub enum Icon: "icon" {
        BookOpen => "book-open",
        GraduationCap => "graduation-cap",
        Handshake => "handshake",
        FlaskConical => "flask-conical",
        Code2 => "code-2",
        Award => "award",
        Presentation => "presentation",
        Rocket => "rocket",
        Beaker => "beaker",
        GitBranch => "git-branch",
        Newspaper => "newspaper",
        Users => "users",
        Calendar => "calendar",
        Trophy => "trophy",
        Star => "star",
        Zap => "zap",
        Lightbulb => "lightbulb",
        Wifi => "wifi",
    }
}

choice_enum! {
    /// Palette used to render an article card
    pub enum ColorScheme: "color scheme" {
        Blue => "blue",
        Green => "green",
        Purple => "purple",
        Orange => "orange",
        Teal => "teal",
    }
}

choice_enum! {
    /// Color of a single tag badge
    pub enum TagColor: "tag color" {
        Green => "green",
        Purple => "purple",
        Blue => "blue",
        Teal => "teal",
        Slate => "slate",
    }
}

impl Default for Icon {
    #[inline]
    fn default() -> Self {
        Self::BookOpen
    }
}

impl Default for ColorScheme {
    #[inline]
    fn default() -> Self {
        Self::Blue
    }
}
