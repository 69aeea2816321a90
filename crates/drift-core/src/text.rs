//! Chip measurement for text labels (interest tags, amenities, rig badges).
//!
//! There is no font stack here. Widths come from an average glyph advance,
//! which is what the chip screens need to decide where a row breaks.

use glam::Vec2;
use crate::FlowItem;

/// Sizing parameters for a pill-shaped text chip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipMetrics {
    /// Font size in points
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
    /// Padding left and right of the label
    pub padding_x: f32,
    /// Padding above and below the label
    pub padding_y: f32,
}

impl ChipMetrics {
    /// Small tags used for interests.
    pub fn compact() -> Self {
        Self {
            font_size: 14.0,
            advance_ratio: 0.55,
            line_height: 1.2,
            padding_x: 12.0,
            padding_y: 6.0,
        }
    }

    /// Larger badges used for rig features and amenities.
    pub fn badge() -> Self {
        Self {
            font_size: 16.0,
            advance_ratio: 0.6,
            line_height: 1.25,
            padding_x: 16.0,
            padding_y: 8.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "compact" => Some(Self::compact()),
            "badge" => Some(Self::badge()),
            _ => None,
        }
    }

    /// Estimated size of a chip showing `label`.
    pub fn measure(&self, label: &str) -> Vec2 {
        // Scalar values, not bytes: "Café" is four glyphs wide.
        let glyphs = label.chars().count() as f32;
        let width = glyphs * self.font_size * self.advance_ratio + 2.0 * self.padding_x;
        let height = self.font_size * self.line_height + 2.0 * self.padding_y;
        Vec2::new(width, height)
    }
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self::compact()
    }
}

/// A labelled chip before measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub id: String,
    pub label: String,
}

impl Chip {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn measured(self, metrics: &ChipMetrics) -> MeasuredChip {
        let size = metrics.measure(&self.label);
        MeasuredChip { chip: self, size }
    }
}

/// A chip with its size resolved against a set of metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredChip {
    pub chip: Chip,
    pub size: Vec2,
}

impl FlowItem for MeasuredChip {
    type Id = String;

    fn id(&self) -> String {
        self.chip.id.clone()
    }

    fn intrinsic_size(&self) -> Vec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_chip_size() {
        let metrics = ChipMetrics {
            font_size: 10.0,
            advance_ratio: 0.5,
            line_height: 1.0,
            padding_x: 4.0,
            padding_y: 2.0,
        };

        let size = metrics.measure("hiking");
        assert_eq!(size, Vec2::new(6.0 * 5.0 + 8.0, 14.0));
    }

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        let metrics = ChipMetrics::compact();
        assert_eq!(metrics.measure("Café").x, metrics.measure("Cafe").x);
    }

    #[test]
    fn test_empty_label_is_all_padding() {
        let metrics = ChipMetrics::badge();
        assert_eq!(metrics.measure("").x, 2.0 * metrics.padding_x);
    }

    #[test]
    fn test_measured_chip_is_flow_item() {
        let chip = Chip::new("solar", "Solar").measured(&ChipMetrics::compact());
        assert_eq!(chip.id(), "solar");
        assert_eq!(chip.intrinsic_size(), ChipMetrics::compact().measure("Solar"));
    }

    #[test]
    fn test_metrics_by_name() {
        assert_eq!(ChipMetrics::from_name("badge"), Some(ChipMetrics::badge()));
        assert_eq!(ChipMetrics::from_name("jumbo"), None);
    }
}
