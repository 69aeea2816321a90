// src/preview.rs
//! ASCII rendering of a flow layout, one box per placement.

use anyhow::{bail, Result};
use drift_core::{Bounds, Placement};
use drift_layout::FlowLayout;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Largest canvas a preview will allocate, in cells.
const MAX_COLS: f32 = 1000.0;
const MAX_ROWS: f32 = 2000.0;

pub struct Canvas {
    cols: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            cells: vec![vec![' '; cols]; rows],
        }
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if let Some(line) = self.cells.get_mut(row) {
            if col < line.len() {
                line[col] = ch;
            }
        }
    }

    fn draw_box(&mut self, col: usize, row: usize, width: usize, height: usize, label: &str) {
        let right = col.saturating_add(width.saturating_sub(1));
        let bottom = row.saturating_add(height.saturating_sub(1));

        for c in col..=right {
            self.put(c, row, '-');
            self.put(c, bottom, '-');
        }
        for r in row..=bottom {
            self.put(col, r, '|');
            self.put(right, r, '|');
        }
        for (c, r) in [(col, row), (right, row), (col, bottom), (right, bottom)] {
            self.put(c, r, '+');
        }

        if width > 2 && height > 2 {
            let label_row = row.saturating_add(height / 2);
            for (i, ch) in label.chars().take(width - 2).enumerate() {
                self.put(col.saturating_add(1 + i), label_row, ch);
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.cells.len());
        for line in &self.cells {
            let text: String = line.iter().collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

fn to_cols(value: f32, scale: f32) -> usize {
    (value * scale).round().max(0.0) as usize
}

fn to_rows(value: f32, scale: f32) -> usize {
    (value * scale / CELL_ASPECT).round().max(0.0) as usize
}

/// Draws every placement as a labelled box; `scale` is columns per point.
/// A bounded container's right edge is marked with `:` so overflow shows.
///
/// Fails when the scaled layout would not fit a `MAX_COLS` x `MAX_ROWS`
/// canvas; pass a smaller `--scale` for wide layouts.
pub fn render(layout: &FlowLayout<String>, bounds: &Bounds, scale: f32) -> Result<String> {
    if !scale.is_finite() || scale <= 0.0 {
        bail!("Preview scale must be a positive number, got {}", scale);
    }

    let extent_x = layout
        .placements
        .iter()
        .map(Placement::right)
        .fold(bounds.min.x + layout.size.x, f32::max)
        - bounds.min.x;
    let scaled_cols = extent_x * scale;
    let scaled_rows = layout.size.y * scale / CELL_ASPECT;
    if !(scaled_cols <= MAX_COLS && scaled_rows <= MAX_ROWS) {
        bail!(
            "Preview of a {:.0}x{:.0} layout at scale {} needs {:.0}x{:.0} cells (limit {}x{})",
            extent_x,
            layout.size.y,
            scale,
            scaled_cols,
            scaled_rows,
            MAX_COLS,
            MAX_ROWS
        );
    }

    let cols = to_cols(extent_x, scale) + 2;
    let rows = to_rows(layout.size.y, scale) + 2;
    let mut canvas = Canvas::new(cols, rows);

    if bounds.width().is_finite() {
        let edge = to_cols(bounds.width(), scale);
        for row in 0..rows {
            canvas.put(edge, row, ':');
        }
    }

    for placement in &layout.placements {
        let local = placement.origin - bounds.min;
        let col = to_cols(local.x, scale);
        let row = to_rows(local.y, scale);
        let width = to_cols(placement.size.x, scale).max(2);
        let height = to_rows(placement.size.y, scale).max(2);
        canvas.draw_box(col, row, width, height, &placement.id);
    }

    Ok(canvas.render())
}
