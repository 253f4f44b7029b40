use crate::error::MountError;
use crate::sim::{DrawSurface, Rgba, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`DrawSurface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(MountError::dom)?
            .ok_or(MountError::NoContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;
        Ok(Self { ctx })
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl DrawSurface for CanvasSurface {
    fn fade(&mut self, viewport: Viewport, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: Rgba) {
        let gradient = match self.ctx.create_radial_gradient(
            center.x as f64,
            center.y as f64,
            inner as f64,
            center.x as f64,
            center.y as f64,
            outer as f64,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("radial gradient error: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &color.css());
        _ = gradient.add_color_stop(1.0, &Rgba::TRANSPARENT.css());
        self.circle_path(center, outer);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, from_color: Rgba, to_color: Rgba, width: f64) {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        _ = gradient.add_color_stop(0.0, &from_color.css());
        _ = gradient.add_color_stop(1.0, &to_color.css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
