//! Retro backdrop: a drifting, twinkling starfield with an occasional streak.

use std::f64::consts::TAU;

use rand::{rngs::SmallRng, Rng};

use crate::config::{
    STAR_COUNT, STAR_DRIFT, STAR_SIZE_MAX, STAR_SIZE_MIN, STREAK_DECAY, STREAK_DX_MAX,
    STREAK_DX_MIN, STREAK_DY_MAX, STREAK_DY_MIN, STREAK_INTERVAL_MS, STREAK_LENGTH_FACTOR,
    TWINKLE_SPEED_MAX, TWINKLE_SPEED_MIN,
};
use crate::pool::Pool;
use crate::render::{RenderTarget, Rgba};
use crate::viewport::Surface;

/// A single twinkling star. Drawn as a small filled square.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub twinkle_phase: f64,
    pub twinkle_speed: f64,
}

impl Star {
    fn spawn(surface: Surface, rng: &mut SmallRng) -> Self {
        let mut star = Self::spawn_top(surface, rng);
        star.y = rng.gen::<f64>() * surface.h;
        star
    }

    /// Fresh star on the top edge, everything re-rolled.
    fn spawn_top(surface: Surface, rng: &mut SmallRng) -> Self {
        Self {
            x: rng.gen::<f64>() * surface.w,
            y: 0.0,
            size: rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
            speed: STAR_DRIFT * rng.gen_range(0.5..1.5),
            opacity: rng.gen_range(0.3..0.7),
            twinkle_phase: rng.gen::<f64>() * TAU,
            twinkle_speed: rng.gen_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX),
        }
    }
}

/// A short-lived diagonal streak across the field. At most one is alive at a
/// time; spawns are gated by [`STREAK_INTERVAL_MS`].
#[derive(Debug, Clone, Copy)]
pub struct ShootingStar {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
    pub life: f64,
}

impl ShootingStar {
    fn spawn(surface: Surface, rng: &mut SmallRng) -> Self {
        let dx = rng.gen_range(STREAK_DX_MIN..STREAK_DX_MAX);
        let dy = rng.gen_range(STREAK_DY_MIN..STREAK_DY_MAX);
        Self {
            // Start in the upper-left region so the streak has room to travel.
            x: rng.gen::<f64>() * surface.w * 0.7,
            y: rng.gen::<f64>() * surface.h * 0.4,
            dx,
            dy,
            length: dx.hypot(dy) * STREAK_LENGTH_FACTOR,
            life: 1.0,
        }
    }
}

pub struct Starfield {
    stars: Vec<Star>,
    streak: Option<ShootingStar>,
    last_streak_ms: Option<f64>,
}

impl Starfield {
    pub fn new(surface: Surface, rng: &mut SmallRng) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            streak: None,
            last_streak_ms: None,
        };
        field.rebuild(surface, rng);
        field
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn streak(&self) -> Option<&ShootingStar> {
        self.streak.as_ref()
    }
}

impl Pool for Starfield {
    fn rebuild(&mut self, surface: Surface, rng: &mut SmallRng) {
        self.stars = (0..STAR_COUNT).map(|_| Star::spawn(surface, rng)).collect();
        self.streak = None;
        self.last_streak_ms = None;
    }

    fn update(&mut self, now_ms: f64, surface: Surface, rng: &mut SmallRng) {
        for star in &mut self.stars {
            star.y += star.speed;
            star.twinkle_phase += star.twinkle_speed;
            star.opacity = 0.3 + 0.4 * star.twinkle_phase.sin().abs();
            if star.y > surface.h {
                // Fell off the bottom: replace in place with a fresh top spawn.
                *star = Star::spawn_top(surface, rng);
            }
        }

        if let Some(streak) = &mut self.streak {
            streak.x += streak.dx;
            streak.y += streak.dy;
            streak.life -= STREAK_DECAY;
            if streak.life <= 0.0 || streak.x > surface.w || streak.y > surface.h {
                self.streak = None;
            }
        } else {
            match self.last_streak_ms {
                // The interval clock starts on the first tick after a rebuild.
                None => self.last_streak_ms = Some(now_ms),
                Some(last) if now_ms - last > STREAK_INTERVAL_MS => {
                    self.streak = Some(ShootingStar::spawn(surface, rng));
                    self.last_streak_ms = Some(now_ms);
                }
                Some(_) => {}
            }
        }
    }

    fn draw(&self, out: &mut dyn RenderTarget) {
        for star in &self.stars {
            out.fill_rect(
                star.x,
                star.y,
                star.size,
                star.size,
                Rgba::new(255, 255, 255, star.opacity),
            );
        }
        if let Some(streak) = &self.streak {
            let norm = streak.dx.hypot(streak.dy);
            let tx = streak.x - streak.dx / norm * streak.length;
            let ty = streak.y - streak.dy / norm * streak.length;
            out.streak(
                streak.x,
                streak.y,
                tx,
                ty,
                2.0,
                Rgba::new(255, 255, 255, streak.life.clamp(0.0, 1.0)),
            );
        }
    }
}
