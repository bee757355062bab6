//! Drawing-surface abstraction.
//!
//! Pools describe what they want painted through [`RenderTarget`]; the wasm
//! layer maps the calls onto a canvas 2d context, and host tests record them
//! instead of rasterizing.

/// An RGBA color. Channels are 0-255, alpha is 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue at a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` form, as canvas fill/stroke styles want it.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Per-frame background treatment for a theme.
///
/// An overlay wash with alpha below 1 doubles as the frame clear: previous
/// frames bleed through, which is what produces the motion-trail look. The
/// radial wash is opaque and clears fully.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wash {
    Overlay(Rgba),
    Radial {
        /// Gradient center, as fractions of the surface dimensions.
        cx_frac: f64,
        cy_frac: f64,
        /// Outer radius as a fraction of the larger surface dimension.
        radius_frac: f64,
        inner: Rgba,
        outer: Rgba,
    },
}

/// The drawing operations the pools need.
pub trait RenderTarget {
    /// The engine applied a resize; the backing surface should follow.
    fn resized(&mut self, w: f64, h: f64);

    /// Paint the whole surface with the theme wash.
    fn wash(&mut self, wash: &Wash);

    /// Axis-aligned filled rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    /// Filled circle with a soft glow in the same color.
    fn glow_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    /// Straight stroked segment.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba);

    /// Segment fading from `head` at (hx, hy) to fully transparent at the tail.
    fn streak(&mut self, hx: f64, hy: f64, tx: f64, ty: f64, width: f64, head: Rgba);
}
