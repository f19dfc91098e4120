// ui.rs - Controls, board drawing and mouse painting for the viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2, pos2};
use std::time::Duration;

use conway::config;

use crate::GameOfLife;

const NOTICE_TIME: Duration = Duration::from_secs(1);

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();
        self.sync_texture(ctx);

        if self.notice.as_ref().is_some_and(|(_, at)| at.elapsed() >= NOTICE_TIME) {
            self.notice = None;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.controller.is_running() {
                        self.controller.stop();
                        self.notify("Paused");
                    } else {
                        self.controller.run();
                        self.notify("Go!");
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.controller.next();
                    self.notify("Step by step");
                }

                if ui.button("⏹ Clear").clicked() {
                    self.controller.clear();
                    self.notify("Clear");
                }

                if ui.button("🎲 Random").clicked() {
                    self.random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                let selected = self
                    .patterns
                    .get(self.selected_pattern)
                    .map(|p| p.name().to_string())
                    .unwrap_or_default();
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in self.patterns.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name());
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                if ui.button("➖").clicked() {
                    self.speed.down();
                    self.notify(self.speed.mode());
                }
                ui.label(format!("{} ({} ms)", self.speed.mode(), self.speed.interval().as_millis()));
                if ui.button("➕").clicked() {
                    self.speed.up();
                    self.notify(self.speed.mode());
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Board
            let rows = self.controller.rows();
            let cols = self.controller.cols();
            let board_size = Vec2::new(cols as f32, rows as f32) * config::CELL_SIZE;
            let (response, painter) = ui.allocate_painter(board_size, egui::Sense::click_and_drag());
            let board = response.rect;

            if let Some(texture) = &self.texture {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture.id(), board, uv, Color32::WHITE);
            } else {
                painter.rect_filled(board, 0.0, self.dead_color);
            }
            painter.rect_stroke(board, 0.0, Stroke::new(1.0, Color32::from_gray(60)));

            // Drawing with the mouse brings cells alive
            if response.clicked() || response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if board.contains(pos) {
                        let local = pos - board.min;
                        let row = (local.y / config::CELL_SIZE) as usize;
                        let col = (local.x / config::CELL_SIZE) as usize;
                        self.controller.paint(row, col);
                    }
                }
            }

            ui.separator();

            // Statistics
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.controller.cycles()));
                ui.label(format!("Population: {}", self.controller.population()));
                ui.label(format!("Born: {}", self.controller.generated()));
                if let Some((text, _)) = &self.notice {
                    ui.separator();
                    ui.strong(text.as_str());
                }
            });
        });

        // Keep the timer running while a generation or a notice is pending
        if self.controller.is_running() || self.notice.is_some() {
            ctx.request_repaint_after(self.speed.interval());
        }
    }
}
