// ui.rs - Frame loop: resize, paint, tick, blit

use std::time::Instant;

use conway::{Engine, PixelBuffer, clamp_frame_delta};
use eframe::egui;
use egui::{Color32, ColorImage, Pos2, Rect, TextureHandle, TextureOptions, Vec2};
use tracing::{debug, info};

pub struct LifeApp {
    engine     : Engine,
    texture    : Option<TextureHandle>,
    last_frame : Instant,
    paused     : bool,
    title      : String,
}

impl LifeApp {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            texture: None,
            last_frame: Instant::now(),
            paused: false,
            title: String::new(),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (quit, pause, reseed, clear, single_step) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::N),
            )
        });

        if quit {
            info!("escape pressed, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if pause {
            self.paused = !self.paused;
            debug!(paused = self.paused, "toggled pause");
        }
        if reseed {
            self.engine.reseed();
        }
        if clear {
            self.engine.clear();
        }
        if single_step && self.paused {
            self.engine.step();
        }
    }

    fn upload(&mut self, ctx: &egui::Context, frame: ColorImage) -> Option<&TextureHandle> {
        // Zero-area buffers happen while the window is smaller than one cell
        if frame.size[0] == 0 || frame.size[1] == 0 {
            return None;
        }
        match self.texture.as_mut() {
            Some(texture) => texture.set(frame, TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("life-grid", frame, TextureOptions::NEAREST)),
        }
        self.texture.as_ref()
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let state = if self.paused { " (paused)" } else { "" };
        let title = format!(
            "Game of Life - generation {} - population {}{}",
            self.engine.generation(),
            self.engine.population(),
            state,
        );
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

// The engine's pixels go to egui as-is.
fn to_color_image(buffer: &PixelBuffer) -> ColorImage {
    ColorImage {
        size: buffer.size(),
        pixels: buffer.pixels().to_vec(),
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = clamp_frame_delta(now.duration_since(self.last_frame).as_secs_f32());
        self.last_frame = now;

        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let pixels_per_point = ctx.pixels_per_point();

                let width = (area.width() * pixels_per_point) as usize;
                let height = (area.height() * pixels_per_point) as usize;
                if width > 0 && height > 0 {
                    self.engine.on_resize(width, height);
                }

                let pointer = ctx.input(|i| {
                    if i.pointer.primary_down() { i.pointer.latest_pos() } else { None }
                });
                if let Some(pos) = pointer {
                    let local = (pos - area.min) * pixels_per_point;
                    if local.x >= 0.0 && local.y >= 0.0 {
                        self.engine.on_pointer_active(local.x as usize, local.y as usize);
                    }
                }

                if !self.paused {
                    self.engine.tick(dt);
                }

                let image = to_color_image(self.engine.render());
                let size = Vec2::new(image.size[0] as f32, image.size[1] as f32) / pixels_per_point;
                if let Some(texture) = self.upload(ctx, image) {
                    ui.painter().image(
                        texture.id(),
                        Rect::from_min_size(area.min, size),
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            });

        self.update_title(ctx);

        // The simulation clock needs a steady stream of frames
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::{CellSize, EngineConfig, Palette};

    #[test]
    fn color_image_is_the_buffer_verbatim() {
        let config = EngineConfig {
            cell_size: CellSize::square(2),
            seed: Some(3),
            palette: Palette {
                alive: Color32::WHITE,
                dead: Color32::BLACK,
            },
            ..Default::default()
        };
        let mut engine = Engine::initialize(10, 6, config).unwrap();
        let buffer = engine.render().clone();

        let image = to_color_image(&buffer);
        assert_eq!(image.size, [10, 6]);
        assert_eq!(image.pixels, buffer.pixels());
    }
}
