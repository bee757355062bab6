//! Futuristic backdrop: slow-drifting orbs joined by proximity lines.

use rand::{rngs::SmallRng, Rng};

use crate::config::{
    CONNECT_ALPHA, CONNECT_DIST, ORB_COUNT, ORB_RADIUS_MAX, ORB_RADIUS_MIN, ORB_SPEED,
    WRAP_MARGIN,
};
use crate::pool::Pool;
use crate::render::{RenderTarget, Rgba};
use crate::viewport::Surface;

/// Hue class for an orb; the futuristic palette has exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbHue {
    Cyan,
    Violet,
}

impl OrbHue {
    fn pick(rng: &mut SmallRng) -> Self {
        if rng.gen::<bool>() {
            OrbHue::Cyan
        } else {
            OrbHue::Violet
        }
    }

    fn color(self) -> Rgba {
        match self {
            OrbHue::Cyan => Rgba::new(0, 229, 255, 0.9),
            OrbHue::Violet => Rgba::new(170, 90, 255, 0.9),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub hue: OrbHue,
}

impl Orb {
    fn spawn(surface: Surface, rng: &mut SmallRng) -> Self {
        Self {
            x: rng.gen::<f64>() * surface.w,
            y: rng.gen::<f64>() * surface.h,
            vx: (rng.gen::<f64>() - 0.5) * ORB_SPEED,
            vy: (rng.gen::<f64>() - 0.5) * ORB_SPEED,
            radius: rng.gen_range(ORB_RADIUS_MIN..ORB_RADIUS_MAX),
            hue: OrbHue::pick(rng),
        }
    }
}

/// Opacity of the connection between two orbs `dist` apart. Zero at or past
/// the threshold, rising linearly to [`CONNECT_ALPHA`] at zero distance.
pub fn connection_alpha(dist: f64) -> f64 {
    if dist >= CONNECT_DIST {
        0.0
    } else {
        (1.0 - dist / CONNECT_DIST) * CONNECT_ALPHA
    }
}

pub struct OrbField {
    orbs: Vec<Orb>,
}

impl OrbField {
    pub fn new(surface: Surface, rng: &mut SmallRng) -> Self {
        let mut field = Self { orbs: Vec::new() };
        field.rebuild(surface, rng);
        field
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }
}

impl Pool for OrbField {
    fn rebuild(&mut self, surface: Surface, rng: &mut SmallRng) {
        self.orbs = (0..ORB_COUNT).map(|_| Orb::spawn(surface, rng)).collect();
    }

    fn update(&mut self, _now_ms: f64, surface: Surface, _rng: &mut SmallRng) {
        for orb in &mut self.orbs {
            orb.x += orb.vx;
            orb.y += orb.vy;

            // Toroidal wrap with a margin outside each edge.
            if orb.x < -WRAP_MARGIN {
                orb.x = surface.w + WRAP_MARGIN;
            } else if orb.x > surface.w + WRAP_MARGIN {
                orb.x = -WRAP_MARGIN;
            }
            if orb.y < -WRAP_MARGIN {
                orb.y = surface.h + WRAP_MARGIN;
            } else if orb.y > surface.h + WRAP_MARGIN {
                orb.y = -WRAP_MARGIN;
            }
        }
    }

    fn draw(&self, out: &mut dyn RenderTarget) {
        // Connections first so they sit beneath the orbs. O(N^2) pair scan is
        // fine at this population.
        for i in 0..self.orbs.len() {
            for j in (i + 1)..self.orbs.len() {
                let a = &self.orbs[i];
                let b = &self.orbs[j];
                let alpha = connection_alpha((a.x - b.x).hypot(a.y - b.y));
                if alpha > 0.0 {
                    out.line(a.x, a.y, b.x, b.y, 1.0, Rgba::new(0, 229, 255, alpha));
                }
            }
        }
        for orb in &self.orbs {
            out.glow_circle(orb.x, orb.y, orb.radius, orb.hue.color());
        }
    }
}
