//! The three visual themes and what each one binds to.

use rand::rngs::SmallRng;

use crate::pool::{OrbField, Pool, RisingField, Starfield};
use crate::render::{Rgba, Wash};
use crate::viewport::Surface;

/// One of the site's visual styles. Each theme binds exactly one pool model
/// and one background wash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Retro,
    Futuristic,
    Anime,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Retro, Theme::Futuristic, Theme::Anime];

    /// Parse a theme tag from the page. Unknown tags yield `None` so callers
    /// can drop them silently.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "retro" => Some(Theme::Retro),
            "futuristic" => Some(Theme::Futuristic),
            "anime" => Some(Theme::Anime),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Retro => "retro",
            Theme::Futuristic => "futuristic",
            Theme::Anime => "anime",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Theme::Retro => 0,
            Theme::Futuristic => 1,
            Theme::Anime => 2,
        }
    }

    /// Background treatment painted before the active pool draws.
    pub fn wash(self) -> Wash {
        match self {
            // Translucent overlays leave motion trails on purpose.
            Theme::Retro => Wash::Overlay(Rgba::new(0, 0, 0, 0.2)),
            Theme::Futuristic => Wash::Radial {
                cx_frac: 0.5,
                cy_frac: 0.4,
                radius_frac: 0.8,
                inner: Rgba::new(8, 12, 40, 1.0),
                outer: Rgba::new(1, 2, 8, 1.0),
            },
            Theme::Anime => Wash::Overlay(Rgba::new(26, 8, 34, 0.25)),
        }
    }

    /// Construct the pool model this theme renders.
    pub(crate) fn build_pool(self, surface: Surface, rng: &mut SmallRng) -> Box<dyn Pool> {
        match self {
            Theme::Retro => Box::new(Starfield::new(surface, rng)),
            Theme::Futuristic => Box::new(OrbField::new(surface, rng)),
            Theme::Anime => Box::new(RisingField::new(surface, rng)),
        }
    }
}
