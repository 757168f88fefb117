use crate::state::Session;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, TextureId, Vec2};

const BACKGROUND: Color32 = Color32::from_rgb(0x18, 0x18, 0x18);
const PROMPT_COLOR: Color32 = Color32::from_rgb(200, 122, 255);

/// Draws the canvas: the painted image and the brush outline
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Screen rectangle covered by an image of `image_size` pixels at `scale`
    pub fn image_rect(canvas: Rect, image_size: Vec2, scale: f32) -> Rect {
        Rect::from_min_size(canvas.min, image_size / scale)
    }

    pub fn render(&self, painter: &Painter, canvas: Rect, session: &Session, texture: Option<TextureId>) {
        painter.rect_filled(canvas, 0.0, BACKGROUND);

        let (Some(buffer), Some(texture)) = (session.buffer(), texture) else {
            painter.text(
                canvas.min + canvas.size() / 10.0,
                Align2::LEFT_TOP,
                "Drop an image here to work on it",
                FontId::proportional(20.0),
                PROMPT_COLOR,
            );
            return;
        };

        let rect = Self::image_rect(canvas, buffer.size(), session.scale());
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        painter.image(texture, rect, uv, Color32::WHITE);

        self.draw_brush_outline(painter, canvas, session);
    }

    fn draw_brush_outline(&self, painter: &Painter, canvas: Rect, session: &Session) {
        let Some(pointer) = session.screen_pointer() else {
            return;
        };
        let radius = session.brush().radius / session.scale();
        if radius <= 0.0 {
            return;
        }
        painter.circle_stroke(
            canvas.min + pointer.to_vec2(),
            radius,
            Stroke::new(1.0, Color32::from_white_alpha(160)),
        );
    }
}
