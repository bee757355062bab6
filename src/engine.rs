//! The backdrop engine: active theme, the three pools, and the tick pipeline.

use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};

use crate::pool::Pool;
use crate::render::RenderTarget;
use crate::theme::Theme;
use crate::viewport::{Surface, Viewport};

/// Owns the per-theme particle pools and runs one simulation/draw pass per
/// frame. Constructed once per page session; `destroy` is final.
///
/// Scheduling is the caller's concern: the engine only exposes `tick` and
/// expects to be driven from a frame callback on a single thread.
pub struct Engine {
    theme: Theme,
    /// Indexed by `Theme::index`; only the active pool is updated and drawn.
    pools: [Box<dyn Pool>; 3],
    viewport: Viewport,
    running: bool,
    rng: SmallRng,
}

impl Engine {
    /// Engine with an entropy-seeded RNG. Starts running immediately.
    pub fn new(w: f64, h: f64) -> Self {
        Self::with_rng(w, h, SmallRng::from_entropy())
    }

    /// Deterministic engine for reproducible runs.
    pub fn with_seed(w: f64, h: f64, seed: u64) -> Self {
        Self::with_rng(w, h, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(w: f64, h: f64, mut rng: SmallRng) -> Self {
        let surface = Surface { w, h };
        let pools = Theme::ALL.map(|theme| theme.build_pool(surface, &mut rng));
        info!("backdrop engine up at {w}x{h}");
        Self {
            theme: Theme::Retro,
            pools,
            viewport: Viewport::new(w, h),
            running: true,
            rng,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn surface(&self) -> Surface {
        self.viewport.size()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Switch the active theme and rebuild every pool, so the next frame
    /// draws the new model from fresh state.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!("theme -> {}", theme.as_str());
        self.theme = theme;
        self.rebuild_pools();
    }

    /// Record a resize signal. It is applied on the first tick after the
    /// quiet period, surface and pools together.
    pub fn notify_resize(&mut self, now_ms: f64, w: f64, h: f64) {
        self.viewport.note_resize(now_ms, w, h);
    }

    /// Run one frame: apply a settled resize, paint the wash, then update and
    /// draw the active pool. Returns `false` after `destroy`, in which case
    /// nothing was touched.
    pub fn tick(&mut self, now_ms: f64, out: &mut dyn RenderTarget) -> bool {
        if !self.running {
            return false;
        }

        if let Some(surface) = self.viewport.take_ready(now_ms) {
            debug!("viewport now {}x{}", surface.w, surface.h);
            out.resized(surface.w, surface.h);
            self.rebuild_pools();
        }

        let surface = self.viewport.size();
        out.wash(&self.theme.wash());

        let pool = &mut self.pools[self.theme.index()];
        pool.update(now_ms, surface, &mut self.rng);
        pool.draw(out);
        true
    }

    /// Stop permanently. Later ticks are no-ops; a fresh engine must be
    /// constructed to resume.
    pub fn destroy(&mut self) {
        info!("backdrop engine stopped");
        self.running = false;
    }

    fn rebuild_pools(&mut self) {
        let surface = self.viewport.size();
        for pool in &mut self.pools {
            pool.rebuild(surface, &mut self.rng);
        }
    }
}
