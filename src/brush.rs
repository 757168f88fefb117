//! Brush state and the disc rasterizer used for every stamp.
//!
//! The footprint is not an exact circle: each row offset `dy` covers a
//! half-width of `round(cos(dy / radius * π/2) * radius)` columns. Pixels that
//! fall outside the buffer are clamped onto the nearest edge pixel instead of
//! being skipped, so a brush hanging over an edge paints that edge.

use crate::channel::Channel;
use crate::image::PixelBuffer;
use egui::Pos2;

/// Radius, target channel and paint value used for the next stamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    pub radius: f32,
    pub channel: Channel,
    pub value: u8,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            radius: 40.0,
            channel: Channel::A,
            value: 0,
        }
    }
}

impl BrushState {
    /// Grow or shrink the radius, never below zero
    pub fn adjust_radius(&mut self, delta: f32) {
        self.radius = (self.radius + delta).max(0.0);
    }

    pub fn stamp(&self, buffer: &mut PixelBuffer, center: Pos2) {
        stamp(buffer, center, self.radius, self.channel, self.value);
    }
}

/// Half-width of the footprint at row offset `dy`.
///
/// `π/2` is a single precision constant; the rest is evaluated in double
/// precision and rounded half away from zero.
pub fn half_width(dy: i32, radius: f64) -> i32 {
    let half_pi = f64::from(std::f32::consts::FRAC_PI_2);
    ((f64::from(dy) / radius * half_pi).cos() * radius).round() as i32
}

/// Write `value` into `channel` of every pixel under the brush footprint.
///
/// A radius that is zero, negative or not finite stamps only the clamped center.
pub fn stamp(buffer: &mut PixelBuffer, center: Pos2, radius: f32, channel: Channel, value: u8) {
    if buffer.is_empty() {
        return;
    }
    let max_x = buffer.width() as i32 - 1;
    let max_y = buffer.height() as i32 - 1;
    let mut put = |dx: i32, dy: i32| {
        let x = (dx as f32 + center.x) as i32;
        let y = (dy as f32 + center.y) as i32;
        buffer.set_channel(
            x.clamp(0, max_x) as usize,
            y.clamp(0, max_y) as usize,
            channel,
            value,
        );
    };

    if !(radius.is_finite() && radius > 0.0) {
        put(0, 0);
        return;
    }

    let radius = f64::from(radius);
    let r = radius.round() as i32;
    for dy in -r..=r {
        let w = half_width(dy, radius);
        for dx in -w..=w {
            put(dx, dy);
        }
    }
}
