// crates/drift-layout/src/lib.rs

use drift_core::{Bounds, FlowItem, Placement, Result};
use glam::Vec2;

pub mod constraints;
pub mod flow;
pub mod taffy_engine;

pub use constraints::*;
pub use flow::{measure, place, LineWrapEngine};
pub use taffy_engine::TaffyFlowEngine;

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout<Id> {
    /// One entry per input item, in input order.
    pub placements: Vec<Placement<Id>>,
    /// Size reported to the parent: the container width when bounded,
    /// the natural row width otherwise.
    pub size: Vec2,
    pub rows: usize,
}

pub trait FlowEngine {
    fn name(&self) -> &'static str;

    fn layout<I: FlowItem>(
        &self,
        items: &[I],
        bounds: Bounds,
        spacing: FlowSpacing,
    ) -> Result<FlowLayout<I::Id>>;

    fn measure<I: FlowItem>(&self, items: &[I], constraints: &FlowConstraints) -> Result<Vec2> {
        constraints.validate()?;
        Ok(self.layout(items, constraints.bounds(), constraints.spacing)?.size)
    }

    fn place<I: FlowItem>(
        &self,
        items: &[I],
        bounds: Bounds,
        spacing: FlowSpacing,
    ) -> Result<Vec<Placement<I::Id>>> {
        Ok(self.layout(items, bounds, spacing)?.placements)
    }
}
