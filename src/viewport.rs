//! Surface dimensions and debounced resize tracking.

use crate::config::RESIZE_QUIET_MS;
use crate::debounce::Debounce;

/// Pixel dimensions of the drawing surface. Read-only to the pools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub w: f64,
    pub h: f64,
}

/// Tracks the live surface size and coalesces resize bursts.
///
/// Resize signals overwrite a pending-size slot and re-arm the quiet-period
/// timer; the new size is handed out once, after the burst settles.
#[derive(Debug)]
pub struct Viewport {
    size: Surface,
    pending: Option<Surface>,
    debounce: Debounce,
}

impl Viewport {
    pub fn new(w: f64, h: f64) -> Self {
        Self {
            size: Surface { w, h },
            pending: None,
            debounce: Debounce::new(RESIZE_QUIET_MS),
        }
    }

    pub fn size(&self) -> Surface {
        self.size
    }

    /// Record a resize signal; it takes effect after the quiet period.
    pub fn note_resize(&mut self, now_ms: f64, w: f64, h: f64) {
        self.pending = Some(Surface { w, h });
        self.debounce.note(now_ms);
    }

    /// The settled new size, at most once per burst. Adopts it as the live
    /// size on the way out.
    pub fn take_ready(&mut self, now_ms: f64) -> Option<Surface> {
        if self.debounce.ready(now_ms) {
            let size = self.pending.take()?;
            self.size = size;
            Some(size)
        } else {
            None
        }
    }
}
