use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::DrawSurface;

/// Canvas 2D drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    /// Look up a canvas by element id and take its 2D context
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("No canvas with id '{id}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("Element '{id}' is not a canvas")))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
        })
    }

    /// Canvas size in pixels; the playing field matches it
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl DrawSurface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, size: Vec2) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        Ok(())
    }

    fn dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: &str,
    ) -> Result<(), JsValue> {
        let pattern = js_sys::Array::of2(&(dash[0] as f64).into(), &(dash[1] as f64).into());

        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_dash(&pattern)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.set_line_dash(&js_sys::Array::new())
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }
}
