//! Board rendering for the Othello GUI

use crate::{Board, Disc, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::FlipAnimation;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        legal_moves: &[Pos],
        last_move: Option<Pos>,
        game_over: bool,
        animation: Option<&FlipAnimation>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 16.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background and felt
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BORDER);
        let felt = Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        );
        painter.rect_filled(felt, CornerRadius::same(2), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter, felt);

        // Draw coordinate labels
        self.draw_coordinates(&painter);

        // Draw placed discs
        self.draw_discs(&painter, board, animation);

        // Draw legal-move hints
        for &pos in legal_moves {
            let center = self.cell_center(pos);
            painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, hint_dot());
        }

        // Draw last move marker
        if let Some(pos) = last_move {
            let center = self.cell_center(pos);
            painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = legal_moves.contains(&board_pos);
                    if is_valid {
                        let center = self.cell_center(board_pos);
                        painter.circle_filled(
                            center,
                            self.cell_size * DISC_RADIUS_RATIO,
                            hover_valid(),
                        );
                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 8x8 grid lines
    fn draw_grid(&self, painter: &Painter, felt: Rect) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = felt.min + Vec2::new(offset, 0.0);
            let end = felt.min + Vec2::new(offset, felt.height());
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = felt.min + Vec2::new(0.0, offset);
            let end = felt.min + Vec2::new(felt.width(), offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        // Column labels (a-h) along the top
        for col in 0..BOARD_SIZE {
            let letter = (b'a' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.45);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), TEXT_MUTED);
        }

        // Row labels (1-8) along the left
        for row in 0..BOARD_SIZE {
            let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.45, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", row + 1),
                font.clone(),
                TEXT_MUTED,
            );
        }
    }

    /// Draw all placed discs, routing animated cells through the flip state
    fn draw_discs(&self, painter: &Painter, board: &Board, animation: Option<&FlipAnimation>) {
        for (pos, disc) in board.occupied() {
            match animation.and_then(|a| a.progress(pos).map(|t| (a.from, t))) {
                Some((from, t)) if t < 0.5 => {
                    // First half: still showing the old owner, shrinking
                    let scale = 1.0 - (t.max(0.0) * 2.0);
                    self.draw_disc_scaled(painter, pos, from, scale);
                }
                Some((_, t)) if t < 1.0 => {
                    // Second half: regrowing in the new owner's color
                    let scale = (t - 0.5) * 2.0;
                    self.draw_disc_scaled(painter, pos, disc, scale);
                }
                _ => self.draw_disc_scaled(painter, pos, disc, 1.0),
            }
        }
    }

    /// Draw a single disc with visual polish
    fn draw_disc_scaled(&self, painter: &Painter, pos: Pos, disc: Disc, scale: f32) {
        if scale <= 0.0 {
            return;
        }
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO * scale;

        match disc {
            Disc::Black => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                // Main disc
                painter.circle_filled(center, radius, BLACK_DISC);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Disc::White => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );

                // Main disc
                painter.circle_filled(center, radius, WHITE_DISC);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
            Disc::Empty => {}
        }
    }

    /// Center of a cell in screen coordinates
    fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
