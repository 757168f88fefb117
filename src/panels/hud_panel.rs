use crate::command::Command;
use crate::components::Button;
use crate::image::PreviewMode;
use crate::state::Session;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect};

const HUD_COLOR: Color32 = Color32::GREEN;
const LINE_HEIGHT: f32 = 32.0;

/// Text lines shown over the image, top to bottom
pub fn hud_lines(session: &Session) -> Vec<String> {
    let color = match session.hovered_color() {
        Some([r, g, b, a]) => format!("COLOR: {}, {}, {}, {}", r, g, b, a),
        None => "COLOR: -".to_owned(),
    };
    let pointer = session.screen_pointer().unwrap_or(Pos2::ZERO);
    let brush = session.brush();
    let preview = match session.preview_mode() {
        PreviewMode::Composite => "composite",
        PreviewMode::Channel => "channel",
    };

    vec![
        color,
        format!("mouse x: {:.1}, y: {:.1}", pointer.x, pointer.y),
        format!("Channel: {}", brush.channel.name()),
        format!("Drawing With: {}", brush.value),
        format!("{}", session.pending_value()),
        format!("Radius: {:.0}  Preview: {}", brush.radius, preview),
    ]
}

/// Draw the HUD and the on-screen buttons. Only shown once an image is ready.
pub fn hud_panel(painter: &Painter, canvas: Rect, session: &Session, buttons: &[Button]) {
    if !session.is_ready() {
        return;
    }

    for (i, line) in hud_lines(session).into_iter().enumerate() {
        painter.text(
            canvas.min + egui::vec2(64.0, LINE_HEIGHT * (i + 1) as f32),
            Align2::LEFT_TOP,
            line,
            FontId::monospace(16.0),
            HUD_COLOR,
        );
    }

    for button in buttons {
        let selected = button.action == Command::SelectChannel(session.brush().channel);
        button.paint(painter, canvas.min, selected);
    }
}
