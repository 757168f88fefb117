mod central_panel;
mod hud_panel;

pub use central_panel::central_panel;
pub use hud_panel::{hud_lines, hud_panel};
