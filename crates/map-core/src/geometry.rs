//! Fold geometry.
//!
//! Each half of a pane is rotated around Y by the fold angle, so its on-screen
//! width shrinks to `width * cos(angle)`. Both halves of every pane lose that
//! much, which leaves a gap of `2 * (width - rotated_width)` per pane. That gap
//! is the `offset` the layout uses to pull panes back together.

use crate::config::{MapConfig, PaperConfig, PiecesConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Rendered pane height (`ratio * width`).
    pub height: f64,
    /// Projected width of one half after folding.
    pub rotated_width: f64,
    /// Horizontal gap opened by the fold, per pane.
    pub offset: f64,
}

/// Derive pane height and fold offset. Pure.
#[inline]
pub fn calculate(pieces: &PiecesConfig, map: &MapConfig) -> Geometry {
    let rotated_width = pieces.width * map.fold_angle.to_radians().cos();
    Geometry {
        height: pieces.ratio * pieces.width,
        rotated_width,
        offset: 2.0 * (pieces.width - rotated_width),
    }
}

impl Geometry {
    /// Sum of `i * offset` over `i in 0..amount`.
    #[inline]
    pub fn total_compensation(&self, amount: usize) -> f64 {
        if amount < 2 {
            return 0.0;
        }
        let n = amount as f64;
        self.offset * n * (n - 1.0) / 2.0
    }
}

impl PaperConfig {
    /// Recompute the derived fields (`pieces.height`, `map.offset`) in place.
    pub fn apply_geometry(&mut self) -> Geometry {
        let geometry = calculate(&self.pieces, &self.map);
        self.pieces.height = geometry.height;
        self.map.offset = geometry.offset;
        geometry
    }
}
