// ui.rs - egui projection of the board plus click, key and timer handling

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2, ViewportCommand};
use life_board::{Cell, Controller};
use tracing::{debug, warn};

const ALIVE_COLOR: Color32 = Color32::BLACK;
const DEAD_COLOR: Color32 = Color32::WHITE;
const GRID_LINE_COLOR: Color32 = Color32::LIGHT_GRAY;

/// Height reserved under the board for the status line.
const STATUS_HEIGHT: f32 = 28.0;
const PANEL_MARGIN: f32 = 8.0;

pub struct LifeApp {
    controller: Controller,
    cell_size: f32,
}

impl LifeApp {
    pub fn new(controller: Controller, cell_size: f32) -> Self {
        Self { controller, cell_size }
    }

    fn board_size(&self) -> Vec2 {
        let board = self.controller.board();
        Vec2::new(
            board.width() as f32 * self.cell_size,
            board.height() as f32 * self.cell_size,
        )
    }

    pub fn window_size(&self) -> Vec2 {
        self.board_size() + Vec2::new(2.0 * PANEL_MARGIN, 2.0 * PANEL_MARGIN + STATUS_HEIGHT)
    }

    /// Maps a pointer position to the cell under it, if any.
    fn cell_at(&self, origin: Pos2, pos: Pos2) -> Option<Cell> {
        let offset = pos - origin;
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }
        let row = (offset.y / self.cell_size) as usize;
        let col = (offset.x / self.cell_size) as usize;
        self.controller.board().contains(row, col).then_some((row, col))
    }

    fn cell_rect(&self, origin: Pos2, (row, col): Cell) -> Rect {
        Rect::from_min_size(
            origin + Vec2::new(col as f32, row as f32) * self.cell_size,
            Vec2::splat(self.cell_size),
        )
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(self.board_size(), Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, DEAD_COLOR);

        let board = self.controller.board();
        for row in 0..board.height() {
            for col in 0..board.width() {
                let rect = self.cell_rect(origin, (row, col));
                if board.is_alive(row, col).unwrap_or(false) {
                    painter.rect_filled(rect, 0.0, ALIVE_COLOR);
                }
                painter.rect_stroke(rect, 0.0, Stroke::new(1.0, GRID_LINE_COLOR));
            }
        }

        if response.clicked() {
            let clicked = response
                .interact_pointer_pos()
                .and_then(|pos| self.cell_at(origin, pos));
            if let Some((row, col)) = clicked {
                if let Err(err) = self.controller.click(row, col) {
                    warn!(%err, "cell click rejected");
                }
            }
        }
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        let board = self.controller.board();
        let hint = if self.controller.is_running() {
            "Running - Enter/Space to pause"
        } else {
            "Editing - click cells, Enter/Space to start"
        };
        ui.horizontal(|ui| {
            ui.label(hint);
            ui.separator();
            ui.label(format!("Step {}", board.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", board.population()));
        });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space)) {
            self.controller.toggle_running(now);
            if self.controller.is_running() {
                ctx.send_viewport_cmd(ViewportCommand::Title(self.controller.title()));
            }
        }

        if let Some(changed) = self.controller.tick(now) {
            debug!(
                generation = self.controller.board().generation(),
                changed = changed.len(),
                "tick"
            );
            ctx.send_viewport_cmd(ViewportCommand::Title(self.controller.title()));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(PANEL_MARGIN))
            .show(ctx, |ui| {
                self.draw_board(ui);
                self.draw_status(ui);
            });

        // Wake up for the next generation even without input.
        if let Some(wait) = self.controller.time_until_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_board::LifeBoard;
    use std::time::Duration;

    fn app() -> LifeApp {
        let board = LifeBoard::new(3, 2).unwrap();
        LifeApp::new(Controller::new(board, Duration::from_millis(300)), 20.0)
    }

    #[test]
    fn pointer_maps_to_row_and_column() {
        let app = app();
        let origin = Pos2::new(10.0, 10.0);
        assert_eq!(app.cell_at(origin, Pos2::new(15.0, 35.0)), Some((1, 0)));
        assert_eq!(app.cell_at(origin, Pos2::new(69.0, 10.0)), Some((0, 2)));
    }

    #[test]
    fn pointer_off_the_board_maps_to_nothing() {
        let app = app();
        let origin = Pos2::new(10.0, 10.0);
        assert_eq!(app.cell_at(origin, Pos2::new(75.0, 10.0)), None);
        assert_eq!(app.cell_at(origin, Pos2::new(5.0, 20.0)), None);
        assert_eq!(app.cell_at(origin, Pos2::new(20.0, 50.0)), None);
    }

    #[test]
    fn window_fits_board_and_status_line() {
        let app = app();
        assert_eq!(app.window_size(), Vec2::new(76.0, 84.0));
        assert_eq!(
            app.cell_rect(Pos2::ZERO, (1, 2)),
            Rect::from_min_size(Pos2::new(40.0, 20.0), Vec2::splat(20.0))
        );
    }
}
