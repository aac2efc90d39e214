//! Character-grid rasterizer
//!
//! Scales the canvas down onto a fixed grid of cells. A cell is filled when
//! the rectangle covers any part of it.

use super::frame::{Frame, RectView};

const EMPTY: char = '.';
const OBSTACLE: char = '#';
const PLAYER: char = '@';
const CRASH: char = 'X';

/// Renders frames as plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        // 10 canvas units per cell at the reference 480x270 canvas
        Self { cols: 48, rows: 27 }
    }
}

impl TextRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Draw the frame, followed by a score line
    pub fn render(&self, frame: &Frame) -> String {
        let mut grid = vec![vec![EMPTY; self.cols]; self.rows];
        let cell_w = frame.canvas_width / self.cols as f32;
        let cell_h = frame.canvas_height / self.rows as f32;

        for obstacle in frame.visible_obstacles() {
            self.fill(&mut grid, obstacle, cell_w, cell_h, |_| OBSTACLE);
        }
        let player_glyph = if frame.running { PLAYER } else { CRASH };
        self.fill(&mut grid, &frame.player, cell_w, cell_h, |current| {
            if current == OBSTACLE { CRASH } else { player_glyph }
        });

        let mut out = String::with_capacity((self.cols + 1) * (self.rows + 1) + 32);
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out.push_str(&format!("Score: {}", frame.score));
        if !frame.running {
            out.push_str("  GAME OVER");
        }
        out.push('\n');
        out
    }

    fn fill(
        &self,
        grid: &mut [Vec<char>],
        rect: &RectView,
        cell_w: f32,
        cell_h: f32,
        glyph: impl Fn(char) -> char,
    ) {
        let Some((c0, c1)) = span(rect.bounds.left, rect.bounds.right, cell_w, self.cols) else {
            return;
        };
        let Some((r0, r1)) = span(rect.bounds.top, rect.bounds.bottom, cell_h, self.rows) else {
            return;
        };
        for row in &mut grid[r0..=r1] {
            for cell in &mut row[c0..=c1] {
                *cell = glyph(*cell);
            }
        }
    }
}

/// Inclusive cell range covered by [lo, hi], clipped to `0..count`
fn span(lo: f32, hi: f32, cell: f32, count: usize) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }
    let extent = cell * count as f32;
    if hi < 0.0 || lo >= extent {
        return None;
    }
    let first = (lo.max(0.0) / cell).floor() as usize;
    // A right/bottom edge landing exactly on a cell boundary does not spill over
    let last = ((hi.min(extent) / cell).ceil() as usize).saturating_sub(1);
    let last = last.max(first).min(count - 1);
    Some((first.min(count - 1), last))
}
