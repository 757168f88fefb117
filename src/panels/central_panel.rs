use crate::PainterApp;
use super::hud_panel;

pub fn central_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let response = ui.allocate_rect(
                ui.available_rect_before_wrap(),
                egui::Sense::click_and_drag(),
            );
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);
            app.sync_texture(ctx);

            let painter = ui.painter_at(canvas_rect);
            app.renderer()
                .render(&painter, canvas_rect, app.session(), app.texture_id());
            hud_panel(&painter, canvas_rect, app.session(), app.buttons());
        });
}
