//! `RenderTarget` on a canvas 2d context.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::BackdropError;
use crate::render::{RenderTarget, Rgba, Wash};

pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| BackdropError::ContextUnavailable)?
            .ok_or(BackdropError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::ContextUnavailable)?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn set_fill(&self, color: Rgba) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
    }

    fn set_stroke(&self, color: Rgba) {
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(&color.css()));
    }
}

impl RenderTarget for CanvasTarget {
    fn resized(&mut self, w: f64, h: f64) {
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
    }

    fn wash(&mut self, wash: &Wash) {
        let (w, h) = self.size();
        match *wash {
            Wash::Overlay(color) => {
                self.set_fill(color);
                self.ctx.fill_rect(0.0, 0.0, w, h);
            }
            Wash::Radial {
                cx_frac,
                cy_frac,
                radius_frac,
                inner,
                outer,
            } => {
                let cx = w * cx_frac;
                let cy = h * cy_frac;
                let radius = (w.max(h) * radius_frac).max(1.0);
                if let Ok(gradient) = self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius)
                {
                    let _ = gradient.add_color_stop(0.0, &inner.css());
                    let _ = gradient.add_color_stop(1.0, &outer.css());
                    #[allow(deprecated)]
                    self.ctx.set_fill_style(&gradient.into());
                    self.ctx.fill_rect(0.0, 0.0, w, h);
                }
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.set_fill(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn glow_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.set_shadow_blur(radius * 4.0);
        self.ctx.set_shadow_color(&color.css());
        self.set_fill(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba) {
        self.set_stroke(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn streak(&mut self, hx: f64, hy: f64, tx: f64, ty: f64, width: f64, head: Rgba) {
        let gradient = self.ctx.create_linear_gradient(hx, hy, tx, ty);
        let _ = gradient.add_color_stop(0.0, &head.css());
        let _ = gradient.add_color_stop(1.0, &head.with_alpha(0.0).css());
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&gradient.into());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(hx, hy);
        self.ctx.line_to(tx, ty);
        self.ctx.stroke();
    }
}
