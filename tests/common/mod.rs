//! Shared test support: a render target that records draw calls.

use backdrop_wasm::render::{RenderTarget, Rgba, Wash};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Resized { w: f64, h: f64 },
    Wash(Wash),
    Rect { x: f64, y: f64, w: f64, h: f64, color: Rgba },
    Circle { x: f64, y: f64, radius: f64, color: Rgba },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba },
    Streak { hx: f64, hy: f64, tx: f64, ty: f64, head: Rgba },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    #[allow(dead_code)]
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl RenderTarget for Recorder {
    fn resized(&mut self, w: f64, h: f64) {
        self.ops.push(Op::Resized { w, h });
    }

    fn wash(&mut self, wash: &Wash) {
        self.ops.push(Op::Wash(*wash));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ops.push(Op::Rect { x, y, w, h, color });
    }

    fn glow_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ops.push(Op::Circle { x, y, radius, color });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, _width: f64, color: Rgba) {
        self.ops.push(Op::Line { x1, y1, x2, y2, color });
    }

    fn streak(&mut self, hx: f64, hy: f64, tx: f64, ty: f64, _width: f64, head: Rgba) {
        self.ops.push(Op::Streak { hx, hy, tx, ty, head });
    }
}
