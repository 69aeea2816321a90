// crates/drift-core/src/geometry.rs
use glam::Vec2;

/// Axis-aligned rectangle a flow is wrapped inside.
///
/// Only `min` and the horizontal extent matter to the packer; `max.y` is kept
/// so hosts can pass the frame they were given without trimming it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds anchored at `origin` with the given width and unlimited height.
    pub fn from_origin_width(origin: Vec2, width: f32) -> Self {
        Self {
            min: origin,
            max: Vec2::new(origin.x + width, f32::INFINITY),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_origin_width(Vec2::ZERO, f32::INFINITY)
    }
}

/// Where one item landed.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<Id> {
    pub id: Id,
    /// Position of the item in the input sequence.
    pub index: usize,
    /// Zero-based row the item was wrapped onto.
    pub row: usize,
    /// Top-left corner, in the coordinate space of the bounds.
    pub origin: Vec2,
    /// The intrinsic size the item was measured at.
    pub size: Vec2,
}

impl<Id> Placement<Id> {
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }
}

/// Groups placements into rows, keeping input order.
///
/// Grouping follows `Placement::row`, not `y`: a zero-height row with no
/// vertical spacing shares its `y` with the row after it.
pub fn rows<Id>(placements: &[Placement<Id>]) -> Vec<&[Placement<Id>]> {
    let mut rows = Vec::new();
    let mut start = 0;
    for i in 1..=placements.len() {
        if i == placements.len() || placements[i].row != placements[start].row {
            if i > start {
                rows.push(&placements[start..i]);
            }
            start = i;
        }
    }
    rows
}
