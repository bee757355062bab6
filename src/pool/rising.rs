//! Anime backdrop: glowing motes rising from below with a lateral wobble.

use std::f64::consts::TAU;

use rand::{rngs::SmallRng, Rng};

use crate::config::{
    MOTE_COUNT, MOTE_DRIFT, MOTE_RADIUS_MAX, MOTE_RADIUS_MIN, MOTE_SPAWN_DEPTH, MOTE_TOP_EXIT,
    RISE_SPEED, WOBBLE_AMPLITUDE, WOBBLE_SPEED_MAX, WOBBLE_SPEED_MIN,
};
use crate::pool::Pool;
use crate::render::{RenderTarget, Rgba};
use crate::viewport::Surface;

const PALETTE: [Rgba; 5] = [
    Rgba::new(255, 110, 199, 1.0), // pink
    Rgba::new(177, 102, 255, 1.0), // violet
    Rgba::new(255, 215, 128, 1.0), // gold
    Rgba::new(120, 200, 255, 1.0), // sky
    Rgba::new(245, 245, 255, 1.0), // near-white
];

#[derive(Debug, Clone, Copy)]
pub struct Mote {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: Rgba,
    pub opacity: f64,
    pub wobble_phase: f64,
    pub wobble_speed: f64,
}

impl Mote {
    /// Fresh mote seeded below the bottom edge at a random depth.
    fn spawn(surface: Surface, rng: &mut SmallRng) -> Self {
        Self {
            x: rng.gen::<f64>() * surface.w,
            y: surface.h + rng.gen::<f64>() * MOTE_SPAWN_DEPTH,
            vx: (rng.gen::<f64>() - 0.5) * MOTE_DRIFT,
            vy: -RISE_SPEED * rng.gen_range(0.3..1.0),
            radius: rng.gen_range(MOTE_RADIUS_MIN..MOTE_RADIUS_MAX),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            opacity: rng.gen_range(0.3..0.8),
            wobble_phase: rng.gen::<f64>() * TAU,
            wobble_speed: rng.gen_range(WOBBLE_SPEED_MIN..WOBBLE_SPEED_MAX),
        }
    }
}

pub struct RisingField {
    motes: Vec<Mote>,
}

impl RisingField {
    pub fn new(surface: Surface, rng: &mut SmallRng) -> Self {
        let mut field = Self { motes: Vec::new() };
        field.rebuild(surface, rng);
        field
    }

    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }
}

impl Pool for RisingField {
    fn rebuild(&mut self, surface: Surface, rng: &mut SmallRng) {
        self.motes = (0..MOTE_COUNT).map(|_| Mote::spawn(surface, rng)).collect();
    }

    fn update(&mut self, _now_ms: f64, surface: Surface, rng: &mut SmallRng) {
        for mote in &mut self.motes {
            mote.y += mote.vy;
            mote.x += mote.vx + mote.wobble_phase.sin() * WOBBLE_AMPLITUDE;
            mote.wobble_phase += mote.wobble_speed;
            if mote.y < MOTE_TOP_EXIT {
                // Risen off the top: replace in place with a below-bottom spawn.
                *mote = Mote::spawn(surface, rng);
            }
        }
    }

    fn draw(&self, out: &mut dyn RenderTarget) {
        for mote in &self.motes {
            out.glow_circle(mote.x, mote.y, mote.radius, mote.color.with_alpha(mote.opacity));
        }
    }
}
