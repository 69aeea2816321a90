// crates/drift-layout/src/flow.rs
use drift_core::{AvailableWidth, Bounds, FlowItem, Placement, Result};
use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::{checked_size, validate_bounds, FlowEngine, FlowLayout, FlowSpacing};

/// Line-wrapping packer: items run left to right and wrap like words.
///
/// An item wraps only when it would cross the right edge *and* its row
/// already holds something, so an item wider than the container still gets
/// a row of its own and overflows instead of looping or being dropped.
///
/// `with_debug(true)` adds a `trace!` event per item (size and position).
/// Without it only the per-pass `debug!` summary and overflow warnings are
/// emitted, whatever the log filter allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineWrapEngine {
    debug: bool,
}

impl LineWrapEngine {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl FlowEngine for LineWrapEngine {
    fn name(&self) -> &'static str {
        "line-wrap"
    }

    fn layout<I: FlowItem>(
        &self,
        items: &[I],
        bounds: Bounds,
        spacing: FlowSpacing,
    ) -> Result<FlowLayout<I::Id>> {
        let container_width = validate_bounds(&bounds)?;
        spacing.validate()?;

        let mut placements = Vec::with_capacity(items.len());
        // Cursor is relative to bounds.min so wrap checks don't pick up
        // rounding from a far-away origin.
        let mut x = 0.0f32;
        let mut y = 0.0f32;
        let mut row_height = 0.0f32;
        let mut natural_width = 0.0f32;
        let mut rows = 0usize;

        for (index, item) in items.iter().enumerate() {
            let size = checked_size(index, item)?;

            if index == 0 {
                rows = 1;
            } else if x + size.x > container_width && x > 0.0 {
                x = 0.0;
                y += row_height + spacing.vertical;
                row_height = 0.0;
                rows += 1;
            }

            if size.x > container_width {
                warn!(
                    "Item {} is {:.1} wide, overflowing the {:.1} container",
                    index, size.x, container_width
                );
            }

            if self.debug {
                trace!("Item {} ({:?}) -> ({:.1}, {:.1})", index, size, x, y);
            }

            placements.push(Placement {
                id: item.id(),
                index,
                row: rows - 1,
                origin: bounds.min + Vec2::new(x, y),
                size,
            });

            natural_width = natural_width.max(x + size.x);
            x += size.x + spacing.horizontal;
            row_height = row_height.max(size.y);
        }

        let width = if container_width.is_finite() {
            container_width
        } else {
            natural_width
        };
        let size = Vec2::new(width, y + row_height);

        debug!(
            "Line-wrap layout: {} items in {} rows, size {:?}",
            items.len(),
            rows,
            size
        );

        Ok(FlowLayout {
            placements,
            size,
            rows,
        })
    }
}

/// Total size of `items` wrapped under `available_width`.
pub fn measure<I: FlowItem>(
    items: &[I],
    available_width: AvailableWidth,
    horizontal_spacing: f32,
    vertical_spacing: f32,
) -> Result<Vec2> {
    let constraints = crate::FlowConstraints {
        available_width,
        spacing: FlowSpacing::new(horizontal_spacing, vertical_spacing),
    };
    LineWrapEngine::new().measure(items, &constraints)
}

/// Top-left corner of every item, in input order, within `bounds`.
pub fn place<I: FlowItem>(
    items: &[I],
    bounds: Bounds,
    horizontal_spacing: f32,
    vertical_spacing: f32,
) -> Result<Vec<Placement<I::Id>>> {
    LineWrapEngine::new().place(
        items,
        bounds,
        FlowSpacing::new(horizontal_spacing, vertical_spacing),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::{FlowError, SizedItem};

    fn sizes(dims: &[(f32, f32)]) -> Vec<Vec2> {
        dims.iter().map(|&(w, h)| Vec2::new(w, h)).collect()
    }

    fn origins(placements: &[Placement<()>]) -> Vec<(f32, f32)> {
        placements.iter().map(|p| (p.origin.x, p.origin.y)).collect()
    }

    fn bounded(width: f32) -> Bounds {
        Bounds::from_origin_width(Vec2::ZERO, width)
    }

    #[test]
    fn test_wraps_third_item() {
        let items = sizes(&[(40.0, 20.0), (40.0, 30.0), (40.0, 20.0)]);

        let placements = place(&items, bounded(100.0), 8.0, 8.0).unwrap();
        assert_eq!(origins(&placements), vec![(0.0, 0.0), (48.0, 0.0), (0.0, 38.0)]);

        let size = measure(&items, AvailableWidth::Definite(100.0), 8.0, 8.0).unwrap();
        assert_eq!(size, Vec2::new(100.0, 30.0 + 8.0 + 20.0));
    }

    #[test]
    fn test_oversized_item_gets_own_row() {
        let items = sizes(&[(150.0, 24.0)]);

        let placements = place(&items, bounded(100.0), 8.0, 8.0).unwrap();
        assert_eq!(origins(&placements), vec![(0.0, 0.0)]);

        let size = measure(&items, AvailableWidth::Definite(100.0), 8.0, 8.0).unwrap();
        assert_eq!(size, Vec2::new(100.0, 24.0));
    }

    #[test]
    fn test_oversized_item_between_others() {
        let items = sizes(&[(40.0, 10.0), (150.0, 10.0), (40.0, 10.0)]);
        let layout = LineWrapEngine::new()
            .layout(&items, bounded(100.0), FlowSpacing::uniform(0.0))
            .unwrap();

        assert_eq!(origins(&layout.placements), vec![(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]);
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_zero_height_rows_stay_distinct() {
        let items = sizes(&[(60.0, 0.0), (60.0, 0.0)]);
        let layout = LineWrapEngine::new()
            .layout(&items, bounded(100.0), FlowSpacing::uniform(0.0))
            .unwrap();

        assert_eq!(origins(&layout.placements), vec![(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.placements[1].row, 1);
        assert_eq!(drift_core::rows(&layout.placements).len(), layout.rows);
    }

    #[test]
    fn test_zero_width_item_does_not_occupy_row() {
        let items = sizes(&[(0.0, 10.0), (150.0, 10.0)]);
        let layout = LineWrapEngine::new()
            .layout(&items, bounded(100.0), FlowSpacing::uniform(0.0))
            .unwrap();

        assert_eq!(origins(&layout.placements), vec![(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(layout.size, Vec2::new(100.0, 10.0));
        assert_eq!(layout.rows, 1);
    }

    #[test]
    fn test_unbounded_single_row() {
        let items = sizes(&[(40.0, 20.0), (40.0, 35.0), (40.0, 20.0)]);

        let placements = place(&items, Bounds::default(), 8.0, 8.0).unwrap();
        assert_eq!(origins(&placements), vec![(0.0, 0.0), (48.0, 0.0), (96.0, 0.0)]);

        let size = measure(&items, AvailableWidth::Unbounded, 8.0, 8.0).unwrap();
        assert_eq!(size, Vec2::new(136.0, 35.0));
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Vec2> = Vec::new();

        assert_eq!(
            measure(&items, AvailableWidth::Definite(100.0), 8.0, 8.0).unwrap(),
            Vec2::new(100.0, 0.0)
        );
        assert_eq!(
            measure(&items, AvailableWidth::Unbounded, 8.0, 8.0).unwrap(),
            Vec2::ZERO
        );
        assert!(place(&items, bounded(100.0), 8.0, 8.0).unwrap().is_empty());
    }

    #[test]
    fn test_mixed_heights_row() {
        let items = sizes(&[(40.0, 20.0), (40.0, 50.0), (40.0, 10.0)]);
        let placements = place(&items, bounded(88.0), 8.0, 12.0).unwrap();

        assert_eq!(placements[1].origin, Vec2::new(48.0, 0.0));
        assert_eq!(placements[2].origin, Vec2::new(0.0, 62.0));
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        let items = sizes(&[(46.0, 10.0), (46.0, 10.0)]);
        let placements = place(&items, bounded(100.0), 8.0, 8.0).unwrap();
        assert_eq!(placements[1].origin, Vec2::new(54.0, 0.0));
    }

    #[test]
    fn test_zero_width_container() {
        let items = sizes(&[(10.0, 5.0), (20.0, 5.0), (30.0, 5.0)]);
        let layout = LineWrapEngine::new()
            .layout(&items, bounded(0.0), FlowSpacing::new(4.0, 2.0))
            .unwrap();

        assert_eq!(origins(&layout.placements), vec![(0.0, 0.0), (0.0, 7.0), (0.0, 14.0)]);
        assert_eq!(layout.size, Vec2::new(0.0, 19.0));
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_bounds_origin_offsets_placements() {
        let items = sizes(&[(40.0, 20.0), (40.0, 20.0), (40.0, 20.0)]);
        let bounds = Bounds::new(Vec2::new(16.0, 100.0), Vec2::new(116.0, 400.0));
        let placements = place(&items, bounds, 8.0, 8.0).unwrap();

        assert_eq!(
            origins(&placements),
            vec![(16.0, 100.0), (64.0, 100.0), (16.0, 128.0)]
        );
    }

    #[test]
    fn test_placements_carry_ids_and_sizes() {
        let items = vec![
            SizedItem::new("solar", 40.0, 20.0),
            SizedItem::new("starlink", 60.0, 20.0),
        ];
        let placements = place(&items, bounded(80.0), 8.0, 8.0).unwrap();

        assert_eq!(placements[0].id, "solar");
        assert_eq!(placements[1].id, "starlink");
        assert_eq!(placements[1].index, 1);
        assert_eq!(placements[1].size, Vec2::new(60.0, 20.0));
        assert_eq!(placements[1].origin, Vec2::new(0.0, 28.0));
    }

    #[test]
    fn test_debug_only_adds_tracing() {
        let items = sizes(&[(40.0, 20.0), (40.0, 30.0), (40.0, 20.0)]);
        let spacing = FlowSpacing::uniform(8.0);

        let quiet = LineWrapEngine::new().layout(&items, bounded(100.0), spacing);
        let traced = LineWrapEngine::new()
            .with_debug(true)
            .layout(&items, bounded(100.0), spacing);
        assert_eq!(quiet, traced);
    }

    #[test]
    fn test_invalid_parameters() {
        let items = sizes(&[(10.0, 10.0)]);

        assert!(matches!(
            measure(&items, AvailableWidth::Definite(100.0), -1.0, 8.0),
            Err(FlowError::InvalidParameter { name: "horizontal_spacing", .. })
        ));
        assert!(matches!(
            measure(&items, AvailableWidth::Definite(100.0), 8.0, -1.0),
            Err(FlowError::InvalidParameter { name: "vertical_spacing", .. })
        ));
        assert!(matches!(
            measure(&items, AvailableWidth::Definite(-5.0), 8.0, 8.0),
            Err(FlowError::InvalidParameter { name: "available_width", .. })
        ));
        assert!(matches!(
            place(&items, bounded(100.0), f32::NAN, 8.0),
            Err(FlowError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_invalid_item_size() {
        let items = sizes(&[(10.0, 10.0), (-1.0, 10.0)]);
        assert_eq!(
            place(&items, bounded(100.0), 8.0, 8.0),
            Err(FlowError::InvalidItemSize { index: 1, width: -1.0, height: 10.0 })
        );
    }
}
