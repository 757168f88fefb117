// Command line for the painter:
//   channel-painter mask.png
//   channel-painter mask.png --channel r --radius 12
//   channel-painter --config painter.json

use crate::channel::Channel;
use crate::config::{ConfigResult, PainterConfig};
use clap::Parser;
use std::path::PathBuf;

/// Paint single channels of an image with a round brush.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "channel-painter", version)]
pub struct CliArgs {
    /// Image to open on startup. More can be dropped onto the window later.
    pub image: Option<PathBuf>,

    /// JSON config file. Overrides the settings saved by the last session.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Initial brush radius in image pixels
    #[arg(short, long)]
    pub radius: Option<f32>,

    /// Initial channel: r, g, b or a
    #[arg(long)]
    pub channel: Option<Channel>,
}

/// What the app needs to know at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    /// Config from `--config`; `None` means use the persisted one
    pub config: Option<PainterConfig>,
    pub image: Option<PathBuf>,
    pub radius: Option<f32>,
    pub channel: Option<Channel>,
}

impl CliArgs {
    pub fn into_launch_options(self) -> ConfigResult<LaunchOptions> {
        let config = self
            .config
            .as_deref()
            .map(PainterConfig::load)
            .transpose()?;
        Ok(LaunchOptions {
            config,
            image: self.image,
            radius: self.radius,
            channel: self.channel,
        })
    }
}

impl LaunchOptions {
    /// Apply the command line overrides on top of a base config
    pub fn apply_overrides(&self, mut config: PainterConfig) -> PainterConfig {
        if let Some(radius) = self.radius {
            config.brush_radius = radius.max(0.0);
        }
        if let Some(channel) = self.channel {
            config.channel = channel;
        }
        config
    }
}
