//! Per-image interaction state, advanced once per frame.
//!
//! A `Session` owns the pixel buffer and everything the user can change with
//! the keyboard, wheel and pointer. The app builds a `FrameInput` from egui and
//! calls [`Session::update`]; the session never talks to egui itself.

use crate::brush::BrushState;
use crate::channel::Channel;
use crate::command::{CancelMode, Command};
use crate::config::PainterConfig;
use crate::image::{PixelBuffer, PreviewMode};
use crate::input::FrameInput;
use ::image::DynamicImage;
use egui::{Pos2, Vec2};

/// Movement below this on both axes counts as standing still
pub const MOVEMENT_EPSILON: f32 = 0.000001;

/// True when both components lie strictly inside `(-EPSILON, EPSILON)`
pub fn length_negligible(v: Vec2) -> bool {
    (v.x < MOVEMENT_EPSILON && v.x > -MOVEMENT_EPSILON)
        && (v.y < MOVEMENT_EPSILON && v.y > -MOVEMENT_EPSILON)
}

/// Display scale: image pixels per screen point, fitting the larger ratio
pub fn display_scale(image: Vec2, viewport: Vec2) -> Option<f32> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some((image.x / viewport.x).max(image.y / viewport.y))
}

#[derive(Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    /// Decoded but not yet normalized to RGBA8 or scaled
    Loading(DynamicImage),
    Ready(PixelBuffer),
}

/// Pointer positions in image space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub position: Pos2,
    pub previous: Pos2,
}

impl PointerState {
    pub fn movement(&self) -> Vec2 {
        self.position - self.previous
    }
}

/// What happened during one frame update
#[derive(Debug, Default, PartialEq)]
pub struct FrameOutcome {
    pub stamped: bool,
    /// Commands the app has to carry out (file output)
    pub deferred: Vec<Command>,
}

pub struct Session {
    load_state: LoadState,
    brush: BrushState,
    pointer: PointerState,
    /// Pointer in screen points relative to the canvas, for the HUD
    screen_pointer: Option<Pos2>,
    pending_value: u32,
    cancel_mode: CancelMode,
    wheel_factor: f32,
    scale: f32,
    viewport: Vec2,
    texture_out_of_date: bool,
    hovered_color: Option<[u8; 4]>,
    preview_mode: PreviewMode,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&PainterConfig::default())
    }
}

impl Session {
    pub fn new(config: &PainterConfig) -> Self {
        Self {
            load_state: LoadState::Unloaded,
            brush: BrushState {
                radius: config.brush_radius.max(0.0),
                channel: config.channel,
                value: 0,
            },
            pointer: PointerState::default(),
            screen_pointer: None,
            pending_value: 0,
            cancel_mode: config.cancel_mode,
            wheel_factor: config.wheel_factor,
            scale: 1.0,
            viewport: Vec2::ZERO,
            texture_out_of_date: false,
            hovered_color: None,
            preview_mode: PreviewMode::default(),
        }
    }

    /// Replace the current image. The buffer is materialized on the next update.
    pub fn request_load(&mut self, image: DynamicImage) {
        log::info!(
            "Loading image {}x{} ({:?})",
            image.width(),
            image.height(),
            image.color()
        );
        self.load_state = LoadState::Loading(image);
        self.texture_out_of_date = true;
        self.hovered_color = None;
    }

    /// Advance one frame
    pub fn update(&mut self, input: &FrameInput) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        let viewport_changed = input.viewport != self.viewport;
        self.viewport = input.viewport;

        if matches!(self.load_state, LoadState::Loading(_)) {
            self.finish_loading();
        } else if viewport_changed {
            self.rescale();
        }

        if !self.is_ready() {
            return outcome;
        }

        for command in &input.commands {
            if command.is_deferred() {
                outcome.deferred.push(*command);
            } else {
                self.execute(*command);
            }
        }

        self.screen_pointer = input.pointer.or(self.screen_pointer);
        if let Some(pos) = input.pointer {
            self.pointer.position = (pos.to_vec2() * self.scale).to_pos2();
        }
        let position = self.pointer.position;
        let movement = self.pointer.movement();

        if let LoadState::Ready(buffer) = &mut self.load_state {
            self.hovered_color = buffer.sample(position.x, position.y);

            if input.primary_down && !input.pointer_over_ui && !length_negligible(movement) {
                self.brush.stamp(buffer, position);
                self.texture_out_of_date = true;
                outcome.stamped = true;
            }
        }

        if input.wheel_notches != 0.0 {
            self.brush.adjust_radius(input.wheel_notches * self.wheel_factor);
            log::debug!("wheel: {}, brush radius: {}", input.wheel_notches, self.brush.radius);
        }

        self.pointer.previous = self.pointer.position;
        outcome
    }

    /// Apply a command that only changes session state
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SelectChannel(channel) => self.select_channel(channel),
            Command::AppendDigit(digit) => {
                self.pending_value = self
                    .pending_value
                    .saturating_mul(10)
                    .saturating_add(u32::from(digit.min(9)));
                log::debug!("Input buffer: {}", self.pending_value);
            }
            Command::CommitValue => self.commit_value(),
            Command::CancelEntry => {
                self.pending_value = self.cancel_mode.apply(self.pending_value);
                log::debug!("Input buffer: {}", self.pending_value);
            }
            Command::TogglePreview => {
                self.preview_mode = self.preview_mode.toggled();
                self.texture_out_of_date = true;
            }
            Command::ExportImage | Command::SaveScreenshot => {
                log::warn!("{} must be handled by the app", command.describe());
            }
        }
    }

    fn select_channel(&mut self, channel: Channel) {
        if self.brush.channel == channel {
            return;
        }
        self.brush.channel = channel;
        if self.preview_mode == PreviewMode::Channel {
            self.texture_out_of_date = true;
        }
    }

    fn commit_value(&mut self) {
        // Only the low byte is kept: 300 paints 44
        let value = self.pending_value as u8;
        if u32::from(value) != self.pending_value {
            log::warn!("Paint value {} wraps to {}", self.pending_value, value);
        }
        self.brush.value = value;
        self.pending_value = 0;
        log::info!("Painting with value {}", value);
    }

    fn finish_loading(&mut self) {
        if let LoadState::Loading(image) = std::mem::take(&mut self.load_state) {
            let buffer = PixelBuffer::from_dynamic(image);
            self.load_state = LoadState::Ready(buffer);
            self.texture_out_of_date = true;
            self.rescale();
        }
    }

    fn rescale(&mut self) {
        let LoadState::Ready(buffer) = &self.load_state else {
            return;
        };
        if let Some(scale) = display_scale(buffer.size(), self.viewport) {
            self.scale = scale;
            log::debug!(
                "viewport {}x{}, display scale {}",
                self.viewport.x,
                self.viewport.y,
                scale
            );
        }
    }

    /// Consume the resync flag. Only reports true once the image is ready.
    pub fn take_resync(&mut self) -> bool {
        if self.is_ready() && self.texture_out_of_date {
            self.texture_out_of_date = false;
            true
        } else {
            false
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.load_state, LoadState::Ready(_))
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        match &self.load_state {
            LoadState::Ready(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn screen_pointer(&self) -> Option<Pos2> {
        self.screen_pointer
    }

    pub fn pending_value(&self) -> u32 {
        self.pending_value
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn hovered_color(&self) -> Option<[u8; 4]> {
        self.hovered_color
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    pub fn set_cancel_mode(&mut self, mode: CancelMode) {
        self.cancel_mode = mode;
    }
}
