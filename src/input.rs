use crate::channel::Channel;
use crate::command::Command;
use egui::{Context, Key, Modifiers, MouseWheelUnit, Pos2, Rect, Vec2};

/// Points egui reports per wheel line on native platforms
const POINTS_PER_WHEEL_NOTCH: f32 = 50.0;

/// Everything the session needs from one frame of raw input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position relative to the canvas top-left, in screen points
    pub pointer: Option<Pos2>,
    pub primary_down: bool,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Vertical wheel movement in notches, positive away from the user
    pub wheel_notches: f32,
    /// Key presses translated to commands, in the order they arrived
    pub commands: Vec<Command>,
    /// Size of the canvas area
    pub viewport: Vec2,
    /// Pointer is over an on-screen button, so it must not paint
    pub pointer_over_ui: bool,
}

/// Translate a key press into a command.
/// Cmd+S exports on macOS as well as Ctrl+S.
pub fn key_command(key: Key, modifiers: Modifiers) -> Option<Command> {
    if key == Key::S {
        if modifiers.command || modifiers.ctrl {
            return Some(Command::ExportImage);
        }
        if modifiers.shift {
            return Some(Command::SaveScreenshot);
        }
        return None;
    }
    if modifiers.command || modifiers.ctrl || modifiers.alt {
        return None;
    }

    let command = match key {
        Key::R => Command::SelectChannel(Channel::R),
        Key::G => Command::SelectChannel(Channel::G),
        Key::B => Command::SelectChannel(Channel::B),
        Key::A => Command::SelectChannel(Channel::A),
        Key::Enter => Command::CommitValue,
        Key::Backspace | Key::Escape => Command::CancelEntry,
        Key::Tab => Command::TogglePreview,
        Key::Num0 => Command::AppendDigit(0),
        Key::Num1 => Command::AppendDigit(1),
        Key::Num2 => Command::AppendDigit(2),
        Key::Num3 => Command::AppendDigit(3),
        Key::Num4 => Command::AppendDigit(4),
        Key::Num5 => Command::AppendDigit(5),
        Key::Num6 => Command::AppendDigit(6),
        Key::Num7 => Command::AppendDigit(7),
        Key::Num8 => Command::AppendDigit(8),
        Key::Num9 => Command::AppendDigit(9),
        _ => return None,
    };
    Some(command)
}

/// Convert a wheel delta into notches
pub fn wheel_notches(unit: MouseWheelUnit, delta: Vec2) -> f32 {
    match unit {
        MouseWheelUnit::Point => delta.y / POINTS_PER_WHEEL_NOTCH,
        MouseWheelUnit::Line | MouseWheelUnit::Page => delta.y,
    }
}

/// Handles converting raw egui input into a `FrameInput`
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn process_input(&self, ctx: &Context) -> FrameInput {
        let origin = self.canvas_rect.min;
        ctx.input(|input| {
            let mut frame = FrameInput {
                pointer: input.pointer.hover_pos().map(|pos| (pos - origin).to_pos2()),
                primary_down: input.pointer.primary_down(),
                primary_pressed: input.pointer.primary_pressed(),
                viewport: self.canvas_rect.size(),
                ..FrameInput::default()
            };

            for event in &input.raw.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => {
                        if let Some(command) = key_command(*key, *modifiers) {
                            frame.commands.push(command);
                        }
                    }
                    egui::Event::MouseWheel { unit, delta, .. } => {
                        frame.wheel_notches += wheel_notches(*unit, *delta);
                    }
                    _ => {}
                }
            }
            frame
        })
    }
}
