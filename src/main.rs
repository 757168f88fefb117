#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use channel_painter::PainterApp;
use channel_painter::cli::{CliArgs, LaunchOptions};
use clap::Parser;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let launch = CliArgs::parse()
        .into_launch_options()
        .unwrap_or_else(|err| {
            log::error!("{}, using saved settings", err);
            LaunchOptions::default()
        });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Image Tool")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([320.0, 240.0])
            .with_resizable(true)
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Image Tool",
        native_options,
        Box::new(|cc| Ok(Box::new(PainterApp::new(cc, launch)))),
    )
}
