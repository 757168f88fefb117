use crate::state::Session;
use egui::{Context, TextureHandle, TextureId, TextureOptions};

/// Keeps the display texture in step with the session's pixel buffer
pub struct TextureManager {
    handle: Option<TextureHandle>,
    /// Number of uploads so far, used in the texture name and the log
    uploads: u64,
}

impl TextureManager {
    pub fn new() -> Self {
        Self {
            handle: None,
            uploads: 0,
        }
    }

    /// Re-upload the buffer if the session says it changed.
    /// Returns true when an upload happened.
    pub fn sync(&mut self, ctx: &Context, session: &mut Session) -> bool {
        if !session.take_resync() {
            return false;
        }
        let Some(buffer) = session.buffer() else {
            return false;
        };

        let image = buffer.to_color_image(session.preview_mode(), session.brush().channel);
        match &mut self.handle {
            Some(handle) if handle.size() == image.size => {
                handle.set(image, TextureOptions::LINEAR);
            }
            _ => {
                log::debug!("Creating texture {}x{}", image.size[0], image.size[1]);
                self.handle = Some(ctx.load_texture("painted_image", image, TextureOptions::LINEAR));
            }
        }
        self.uploads += 1;
        true
    }

    pub fn texture_id(&self) -> Option<TextureId> {
        self.handle.as_ref().map(|handle| handle.id())
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Drop the texture, e.g. when a new image starts loading
    pub fn clear(&mut self) {
        self.handle = None;
    }
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new()
    }
}
