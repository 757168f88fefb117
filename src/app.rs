use crate::cli::LaunchOptions;
use crate::command::Command;
use crate::components::{self, Button};
use crate::config::PainterConfig;
use crate::file_handler::{self, FileHandler};
use crate::input::{FrameInput, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{FrameOutcome, Session};
use crate::texture_manager::TextureManager;
use egui::{Rect, TextureId};

pub struct PainterApp {
    config: PainterConfig,
    session: Session,
    textures: TextureManager,
    files: FileHandler,
    input: InputHandler,
    renderer: Renderer,
    buttons: Vec<Button>,
    /// A screenshot was requested and its image has not arrived yet
    screenshot_requested: bool,
}

impl PainterApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        let base = launch
            .config
            .clone()
            .or_else(|| cc.storage.and_then(|storage| eframe::get_value(storage, eframe::APP_KEY)))
            .unwrap_or_default();
        let config = launch.apply_overrides(base);

        let mut app = Self::with_config(config);
        if let Some(path) = &launch.image {
            match file_handler::load_image(path) {
                Ok(image) => app.session.request_load(image),
                Err(err) => log::error!("{}", err),
            }
        }
        app
    }

    /// An app without a window, for driving frames directly
    pub fn with_config(config: PainterConfig) -> Self {
        Self {
            session: Session::new(&config),
            config,
            textures: TextureManager::new(),
            files: FileHandler::new(),
            input: InputHandler::new(Rect::NOTHING),
            renderer: Renderer::new(),
            buttons: components::default_buttons(),
            screenshot_requested: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn texture_id(&self) -> Option<TextureId> {
        self.textures.texture_id()
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.files.preview_files_being_dropped(ctx);
        if !self.files.check_for_dropped_files(ctx) {
            return;
        }
        match self.files.take_dropped_image() {
            Some(Ok(image)) => {
                self.textures.clear();
                self.session.request_load(image);
                ctx.request_repaint();
            }
            Some(Err(err)) => log::error!("{}", err),
            None => {}
        }
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if !self.screenshot_requested {
            return;
        }
        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = screenshot {
            self.screenshot_requested = false;
            if let Err(err) = file_handler::save_screenshot(&image, &self.config.screenshot_path) {
                log::error!("{}", err);
            }
        }
    }

    /// Read this frame's input and advance the session
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let frame = self.input.process_input(ctx);
        let outcome = self.step(frame);
        for command in outcome.deferred {
            self.run_deferred(ctx, command);
        }
    }

    /// Route button presses into the frame and update the session
    pub fn step(&mut self, mut frame: FrameInput) -> FrameOutcome {
        if self.session.is_ready() {
            frame.pointer_over_ui = components::pointer_over(&self.buttons, frame.pointer);
            frame.commands.extend(components::dispatch(
                &self.buttons,
                frame.pointer,
                frame.primary_pressed,
            ));
        }
        self.session.update(&frame)
    }

    fn run_deferred(&mut self, ctx: &egui::Context, command: Command) {
        log::info!("{}", command.describe());
        match command {
            Command::ExportImage => {
                let result = match self.session.buffer() {
                    Some(buffer) => file_handler::export_png(buffer, &self.config.export_path),
                    None => Err(crate::error::PainterError::NoImage),
                };
                if let Err(err) = result {
                    log::error!("{}", err);
                }
            }
            Command::SaveScreenshot => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
                self.screenshot_requested = true;
            }
            other => self.session.execute(other),
        }
    }

    pub fn sync_texture(&mut self, ctx: &egui::Context) {
        self.textures.sync(ctx, &mut self.session);
    }
}

impl eframe::App for PainterApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.brush_radius = self.session.brush().radius;
        self.config.channel = self.session.brush().channel;
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);
        self.handle_dropped_files(ctx);
        panels::central_panel(self, ctx);
    }
}
