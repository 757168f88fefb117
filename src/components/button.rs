use crate::channel::Channel;
use crate::command::Command;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// An on-screen button: a label, a region relative to the canvas origin, and
/// the command it issues when pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub region: Rect,
    pub action: Command,
}

impl Button {
    pub fn new(label: &'static str, position: Pos2, size: Vec2, action: Command) -> Self {
        Self {
            label,
            region: Rect::from_min_size(position, size),
            action,
        }
    }

    /// Map `pos` into the button's unit square. `None` unless it lands in
    /// `[0, 1) x [0, 1)`.
    pub fn hit(&self, pos: Pos2) -> Option<Vec2> {
        let local = (pos - self.region.min) / self.region.size();
        let inside = (0.0..1.0).contains(&local.x) && (0.0..1.0).contains(&local.y);
        inside.then_some(local)
    }

    pub fn paint(&self, painter: &Painter, origin: Pos2, selected: bool) {
        let rect = self.region.translate(origin.to_vec2());
        let (fill, text) = if selected {
            (Color32::from_rgb(100, 181, 246), Color32::BLACK)
        } else {
            (Color32::from_gray(235), Color32::BLACK)
        };
        painter.rect_filled(rect, 4.0, fill);
        if selected {
            painter.rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::from_rgb(33, 150, 243)));
        }
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            self.label,
            FontId::proportional(20.0),
            text,
        );
    }
}

/// Channel selectors followed by an export button
pub fn default_buttons() -> Vec<Button> {
    let size = Vec2::new(44.0, 36.0);
    let mut buttons: Vec<Button> = Channel::ALL
        .iter()
        .enumerate()
        .map(|(i, &channel)| {
            Button::new(
                channel.short_name(),
                Pos2::new(64.0 + i as f32 * (size.x + 8.0), 230.0),
                size,
                Command::SelectChannel(channel),
            )
        })
        .collect();
    buttons.push(Button::new(
        "Save",
        Pos2::new(64.0 + 4.0 * (size.x + 8.0), 230.0),
        Vec2::new(72.0, size.y),
        Command::ExportImage,
    ));
    buttons
}

pub fn pointer_over(buttons: &[Button], pointer: Option<Pos2>) -> bool {
    pointer.is_some_and(|pos| buttons.iter().any(|button| button.hit(pos).is_some()))
}

/// Commands for every button under the pointer, if the primary button was
/// pressed this frame
pub fn dispatch(buttons: &[Button], pointer: Option<Pos2>, pressed: bool) -> Vec<Command> {
    let Some(pos) = pointer.filter(|_| pressed) else {
        return Vec::new();
    };
    buttons
        .iter()
        .filter(|button| button.hit(pos).is_some())
        .map(|button| button.action)
        .collect()
}
