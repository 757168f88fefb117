#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod channel;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod image;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod texture_manager;

pub use app::PainterApp;
pub use brush::{BrushState, stamp};
pub use channel::Channel;
pub use command::{CancelMode, Command};
pub use config::PainterConfig;
pub use error::{PainterError, PainterResult};
pub use crate::image::{PixelBuffer, PreviewMode};
pub use input::FrameInput;
pub use state::{FrameOutcome, LoadState, Session};
