use crate::error::{PainterError, PainterResult};
use crate::image::PixelBuffer;
use egui::ColorImage;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tga"];

/// Decode an image file from disk
pub fn load_image(path: &Path) -> PainterResult<DynamicImage> {
    log::info!("Loading image from path: {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| PainterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes)
}

pub fn decode_image(bytes: &[u8]) -> PainterResult<DynamicImage> {
    let image = image::load_from_memory(bytes)?;
    log::debug!("Successfully decoded image: {}x{}", image.width(), image.height());
    Ok(image)
}

/// Write the buffer as a PNG
pub fn export_png(buffer: &PixelBuffer, path: &Path) -> PainterResult<()> {
    let image = buffer.to_rgba_image()?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| PainterError::Export {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Exported image to {}", path.display());
    Ok(())
}

/// Write a captured window image as a PNG
pub fn save_screenshot(screenshot: &ColorImage, path: &Path) -> PainterResult<()> {
    let [width, height] = screenshot.size;
    let raw: Vec<u8> = screenshot
        .pixels
        .iter()
        .flat_map(|color| color.to_srgba_unmultiplied())
        .collect();
    let image = RgbaImage::from_raw(width as u32, height as u32, raw).ok_or(
        PainterError::InvalidDimensions {
            width: width as u32,
            height: height as u32,
        },
    )?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| PainterError::Export {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved screenshot to {}", path.display());
    Ok(())
}

/// Picks up files dropped onto the window
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            dropped_files: Vec::new(),
        }
    }

    /// Returns true if new files were dropped this frame
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Decode the first dropped file. Only one image is edited at a time, so
    /// any further files are ignored.
    pub fn take_dropped_image(&mut self) -> Option<PainterResult<DynamicImage>> {
        let mut files = std::mem::take(&mut self.dropped_files).into_iter();
        let file = files.next()?;
        let ignored = files.count();
        if ignored > 0 {
            log::warn!("Ignoring {} additional dropped file(s)", ignored);
        }
        Some(Self::load_dropped_file(&file))
    }

    fn load_dropped_file(file: &egui::DroppedFile) -> PainterResult<DynamicImage> {
        let file_name = Self::file_name(file);
        if !Self::is_image_file(file) {
            return Err(PainterError::UnsupportedFile(file_name));
        }

        if let Some(bytes) = &file.bytes {
            log::info!("Processing image from memory: {} ({} bytes)", file_name, bytes.len());
            decode_image(bytes)
        } else if let Some(path) = &file.path {
            load_image(path)
        } else {
            Err(PainterError::NoFileData(file_name))
        }
    }

    fn file_name(file: &egui::DroppedFile) -> String {
        if let Some(path) = &file.path {
            path.display().to_string()
        } else if !file.name.is_empty() {
            file.name.clone()
        } else {
            "unknown".to_owned()
        }
    }

    /// Check if a file is an image based on MIME type or extension
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            return file.mime.starts_with("image/");
        }
        let name = match &file.path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => file.name.clone(),
        };
        Path::new(&name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Darken the window and list the files being dragged over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping files:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}
