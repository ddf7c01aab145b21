use std::fmt;

use serde::{Deserialize, Serialize};

/// A platform a game can be played on, identified by its host code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Windows / Steam.
    #[serde(rename = "PC")]
    Pc,
    /// PlayStation 4.
    #[serde(rename = "PS4")]
    Ps4,
    /// PlayStation 5.
    #[serde(rename = "PS5")]
    Ps5,
    /// Xbox One.
    #[serde(rename = "XONE")]
    XOne,
    /// Xbox Series X|S.
    #[serde(rename = "XSX")]
    Xsx,
}

impl Platform {
    /// The short code the host uses for this platform.
    pub fn code(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Ps4 => "PS4",
            Platform::Ps5 => "PS5",
            Platform::XOne => "XONE",
            Platform::Xsx => "XSX",
        }
    }

    /// Human-readable platform name.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Ps4 => "PlayStation 4",
            Platform::Ps5 => "PlayStation 5",
            Platform::XOne => "Xbox One",
            Platform::Xsx => "Xbox Series X|S",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
