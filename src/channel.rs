use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four byte lanes of an RGBA8 pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    R,
    G,
    B,
    #[default]
    A,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Byte offset of this channel inside an RGBA8 pixel
    pub fn offset(self) -> usize {
        match self {
            Self::R => 0,
            Self::G => 1,
            Self::B => 2,
            Self::A => 3,
        }
    }

    /// Name shown in the HUD
    pub fn name(self) -> &'static str {
        match self {
            Self::R => "RED",
            Self::G => "GREEN",
            Self::B => "BLUE",
            Self::A => "ALPHA",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
            Self::A => "A",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown channel '{0}', expected one of r, g, b, a")]
pub struct ParseChannelError(String);

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Self::R),
            "g" | "green" => Ok(Self::G),
            "b" | "blue" => Ok(Self::B),
            "a" | "alpha" => Ok(Self::A),
            _ => Err(ParseChannelError(s.to_owned())),
        }
    }
}
