//! The separator placed between slug tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SlugError;

/// One of the three characters allowed between slug tokens.
///
/// # Examples
///
/// ```
/// use slugline::domain::Separator;
///
/// let sep: Separator = "_".parse().unwrap();
/// assert_eq!(sep.as_char(), '_');
/// assert!("/".parse::<Separator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    #[default]
    Hyphen,
    Underscore,
    Dot,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Self::Hyphen => '-',
            Self::Underscore => '_',
            Self::Dot => '.',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hyphen => "-",
            Self::Underscore => "_",
            Self::Dot => ".",
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = SlugError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '-' => Ok(Self::Hyphen),
            '_' => Ok(Self::Underscore),
            '.' => Ok(Self::Dot),
            other => Err(SlugError::InvalidSeparator(other.to_string())),
        }
    }
}

impl FromStr for Separator {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(SlugError::InvalidSeparator(s.to_string())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Separator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Separator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
