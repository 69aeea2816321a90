// crates/drift-layout/src/constraints.rs
use drift_core::{check_non_negative, AvailableWidth, Bounds, FlowError, FlowItem, Result, DEFAULT_CHIP_SPACING};
use glam::Vec2;

/// Gaps between neighbouring items and between rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSpacing {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for FlowSpacing {
    fn default() -> Self {
        Self::uniform(DEFAULT_CHIP_SPACING)
    }
}

impl FlowSpacing {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    pub fn uniform(spacing: f32) -> Self {
        Self::new(spacing, spacing)
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("horizontal_spacing", self.horizontal, false)?;
        check_non_negative("vertical_spacing", self.vertical, false)?;
        Ok(())
    }
}

/// Everything `measure` needs besides the items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowConstraints {
    pub available_width: AvailableWidth,
    pub spacing: FlowSpacing,
}

impl FlowConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// `f32::INFINITY` means unbounded.
    pub fn with_width(mut self, width: f32) -> Self {
        self.available_width = AvailableWidth::from(width);
        self
    }

    pub fn with_spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.spacing = FlowSpacing::new(horizontal, vertical);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let AvailableWidth::Definite(width) = self.available_width {
            check_non_negative("available_width", width, false)?;
        }
        self.spacing.validate()
    }

    /// Bounds at the origin whose width is the available width.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_width(Vec2::ZERO, self.available_width.limit())
    }
}

/// Checks that `bounds` has a usable origin and a non-negative width.
pub fn validate_bounds(bounds: &Bounds) -> Result<f32> {
    if !bounds.min.is_finite() {
        return Err(FlowError::InvalidParameter {
            name: "bounds.min",
            value: if bounds.min.x.is_finite() { bounds.min.y } else { bounds.min.x },
        });
    }
    check_non_negative("available_width", bounds.width(), true)
}

/// Reads an item's size, rejecting negative or non-finite dimensions.
pub fn checked_size<I: FlowItem>(index: usize, item: &I) -> Result<Vec2> {
    let size = item.intrinsic_size();
    if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
        return Err(FlowError::InvalidItemSize {
            index,
            width: size.x,
            height: size.y,
        });
    }
    Ok(size)
}
