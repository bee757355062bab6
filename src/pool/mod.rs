//! Particle pools, one per theme.

mod orbs;
mod rising;
mod starfield;

pub use orbs::{connection_alpha, Orb, OrbField, OrbHue};
pub use rising::{Mote, RisingField};
pub use starfield::{ShootingStar, Star, Starfield};

use rand::rngs::SmallRng;

use crate::render::RenderTarget;
use crate::viewport::Surface;

/// One simulated particle field.
///
/// `rebuild` discards every entity and regenerates against the surface;
/// `update` advances one tick; `draw` paints the current state. The engine
/// owns the RNG and threads it through, so pools stay reproducible under a
/// seeded engine.
pub trait Pool {
    fn rebuild(&mut self, surface: Surface, rng: &mut SmallRng);
    fn update(&mut self, now_ms: f64, surface: Surface, rng: &mut SmallRng);
    fn draw(&self, out: &mut dyn RenderTarget);
}
