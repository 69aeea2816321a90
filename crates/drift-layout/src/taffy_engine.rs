//! Taffy-backed flow engine.
//!
//! A wrapping flex row with gaps breaks lines the same way the line-wrap
//! packer does, so this engine doubles as a cross-check against a general
//! layout solver.
//!
//! One input is refused: a zero-width item followed by one wider than the
//! container, with no horizontal spacing. Flexbox breaks before any item
//! that is not first on its line, while the line-wrap rule keeps an item on
//! a row whose cursor has not advanced yet, so the two would disagree there.

use drift_core::{Bounds, FlowError, FlowItem, Placement, Result};
use glam::Vec2;
use taffy::prelude::*;
use tracing::debug;

use crate::{checked_size, validate_bounds, FlowEngine, FlowLayout, FlowSpacing};

/// Flow engine that builds a fresh Taffy tree for every pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaffyFlowEngine;

impl TaffyFlowEngine {
    pub fn new() -> Self {
        Self
    }

    fn container_style(container_width: f32, spacing: FlowSpacing) -> Style {
        let bounded = container_width.is_finite();
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_wrap: if bounded { FlexWrap::Wrap } else { FlexWrap::NoWrap },
            align_items: Some(AlignItems::FlexStart),
            align_content: Some(AlignContent::FlexStart),
            gap: Size {
                width: LengthPercentage::Length(spacing.horizontal),
                height: LengthPercentage::Length(spacing.vertical),
            },
            size: Size {
                width: if bounded {
                    Dimension::Length(container_width)
                } else {
                    Dimension::Auto
                },
                height: Dimension::Auto,
            },
            ..Default::default()
        }
    }

    fn item_style(size: Vec2) -> Style {
        Style {
            size: Size {
                width: Dimension::Length(size.x),
                height: Dimension::Length(size.y),
            },
            // Items keep their intrinsic size; oversized ones overflow.
            flex_grow: 0.0,
            flex_shrink: 0.0,
            ..Default::default()
        }
    }
}

/// Tolerance when deciding whether an item starts a new flex line.
const LINE_START_EPSILON: f32 = 1e-3;

fn solver_error(err: taffy::TaffyError) -> FlowError {
    FlowError::Solver(err.to_string())
}

/// Rejects a zero-advance item directly before an item that overflows the
/// container; flex line breaking can't express "this row is still empty".
fn check_zero_advance(sizes: &[Vec2], container_width: f32, spacing: FlowSpacing) -> Result<()> {
    if spacing.horizontal > 0.0 {
        return Ok(());
    }
    for (index, pair) in sizes.windows(2).enumerate() {
        if pair[0].x == 0.0 && pair[1].x > container_width {
            return Err(FlowError::Unsupported(format!(
                "taffy engine cannot place oversized item {} after zero-width item {} \
                 with no horizontal spacing; use the line-wrap engine",
                index + 1,
                index
            )));
        }
    }
    Ok(())
}

impl FlowEngine for TaffyFlowEngine {
    fn name(&self) -> &'static str {
        "taffy"
    }

    fn layout<I: FlowItem>(
        &self,
        items: &[I],
        bounds: Bounds,
        spacing: FlowSpacing,
    ) -> Result<FlowLayout<I::Id>> {
        let container_width = validate_bounds(&bounds)?;
        spacing.validate()?;

        let mut taffy: TaffyTree<()> = TaffyTree::new();
        taffy.disable_rounding();

        let sizes = items
            .iter()
            .enumerate()
            .map(|(index, item)| checked_size(index, item))
            .collect::<Result<Vec<_>>>()?;
        check_zero_advance(&sizes, container_width, spacing)?;

        let mut nodes = Vec::with_capacity(items.len());
        for size in &sizes {
            nodes.push(taffy.new_leaf(Self::item_style(*size)).map_err(solver_error)?);
        }

        let root = taffy
            .new_with_children(Self::container_style(container_width, spacing), &nodes)
            .map_err(solver_error)?;

        let available_width = if container_width.is_finite() {
            AvailableSpace::Definite(container_width)
        } else {
            AvailableSpace::MaxContent
        };
        taffy
            .compute_layout(
                root,
                Size {
                    width: available_width,
                    height: AvailableSpace::MaxContent,
                },
            )
            .map_err(solver_error)?;

        let mut placements = Vec::with_capacity(items.len());
        let mut rows = 0;
        // Local position and main-axis advance of the previous item.
        let mut previous: Option<(Vec2, f32)> = None;
        for (index, (item, node)) in items.iter().zip(&nodes).enumerate() {
            let layout = taffy.layout(*node).map_err(solver_error)?;
            let local = Vec2::new(layout.location.x, layout.location.y);
            let size = sizes[index];

            // A line break shows as a new y or the x cursor moving back. Rows
            // of zero height with no row gap share y, so x is what tells.
            let new_line = match previous {
                None => true,
                Some((prev, advance)) => {
                    local.y != prev.y || local.x + LINE_START_EPSILON < prev.x + advance
                }
            };
            if new_line {
                rows += 1;
            }
            previous = Some((local, size.x + spacing.horizontal));

            placements.push(Placement {
                id: item.id(),
                index,
                row: rows - 1,
                origin: bounds.min + local,
                size,
            });
        }

        let root_layout = taffy.layout(root).map_err(solver_error)?;
        let width = if container_width.is_finite() {
            container_width
        } else {
            root_layout.size.width
        };
        let size = Vec2::new(width, root_layout.size.height);

        debug!(
            "Taffy flow layout: {} items in {} rows, size {:?}",
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
