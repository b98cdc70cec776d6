//! Narrative genres a quest can be played in.

mod profile;

pub use profile::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::RulesError;

/// The narrative genre chosen at the start of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Fantasy,
    Scifi,
    Mystery,
    Apocalyptic,
}

impl Genre {
    /// Every genre, in menu order.
    pub const ALL: [Genre; 4] = [
        Genre::Fantasy,
        Genre::Scifi,
        Genre::Mystery,
        Genre::Apocalyptic,
    ];

    /// Stable lowercase identifier used in configs and share text.
    pub fn id(&self) -> &'static str {
        match self {
            Genre::Fantasy => "fantasy",
            Genre::Scifi => "scifi",
            Genre::Mystery => "mystery",
            Genre::Apocalyptic => "apocalyptic",
        }
    }

    /// Menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::Scifi => "Sci-Fi",
            Genre::Mystery => "Mystery",
            Genre::Apocalyptic => "Post-Apoc",
        }
    }

    /// Static content attached to this genre.
    pub fn profile(&self) -> &'static GenreProfile {
        match self {
            Genre::Fantasy => &FANTASY,
            Genre::Scifi => &SCIFI,
            Genre::Mystery => &MYSTERY,
            Genre::Apocalyptic => &APOCALYPTIC,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Genre {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fantasy" => Ok(Genre::Fantasy),
            "scifi" | "sci-fi" => Ok(Genre::Scifi),
            "mystery" => Ok(Genre::Mystery),
            "apocalyptic" | "post-apoc" => Ok(Genre::Apocalyptic),
            _ => Err(RulesError::UnknownGenre(s.to_string())),
        }
    }
}
