// crates/drift-core/src/layout_units.rs
use crate::{FlowError, Result};

/// Horizontal room a flow may use before wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvailableWidth {
    /// Fixed width in points
    Definite(f32),
    /// No constraint; everything lands on one row
    Unbounded,
}

impl AvailableWidth {
    /// The wrap limit, with `Unbounded` mapped to `+inf`.
    pub fn limit(&self) -> f32 {
        match self {
            AvailableWidth::Definite(width) => *width,
            AvailableWidth::Unbounded => f32::INFINITY,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, AvailableWidth::Definite(_))
    }

    /// Parse a width like "100", "100px", "auto" or "unbounded".
    pub fn from_string(value: &str) -> Result<Self> {
        let value = value.trim();

        match value.to_ascii_lowercase().as_str() {
            "auto" | "unbounded" | "inf" | "infinity" | "none" => {
                return Ok(AvailableWidth::Unbounded)
            }
            _ => {}
        }

        let number = value.strip_suffix("px").unwrap_or(value).trim();
        let width = number
            .parse::<f32>()
            .map_err(|_| FlowError::Document(format!("unrecognized width '{}'", value)))?;

        if width.is_infinite() && width > 0.0 {
            return Ok(AvailableWidth::Unbounded);
        }
        crate::check_non_negative("available_width", width, false)?;
        Ok(AvailableWidth::Definite(width))
    }
}

impl Default for AvailableWidth {
    fn default() -> Self {
        AvailableWidth::Unbounded
    }
}

impl From<f32> for AvailableWidth {
    fn from(width: f32) -> Self {
        if width == f32::INFINITY {
            AvailableWidth::Unbounded
        } else {
            AvailableWidth::Definite(width)
        }
    }
}

impl From<Option<f32>> for AvailableWidth {
    fn from(width: Option<f32>) -> Self {
        width.map(AvailableWidth::from).unwrap_or(AvailableWidth::Unbounded)
    }
}

impl std::fmt::Display for AvailableWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailableWidth::Definite(width) => write!(f, "{}px", width),
            AvailableWidth::Unbounded => write!(f, "unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_widths() {
        assert_eq!(AvailableWidth::from_string("100"), Ok(AvailableWidth::Definite(100.0)));
        assert_eq!(AvailableWidth::from_string(" 250px "), Ok(AvailableWidth::Definite(250.0)));
        assert_eq!(AvailableWidth::from_string("0"), Ok(AvailableWidth::Definite(0.0)));
        assert_eq!(AvailableWidth::from_string("auto"), Ok(AvailableWidth::Unbounded));
        assert_eq!(AvailableWidth::from_string("Unbounded"), Ok(AvailableWidth::Unbounded));
        assert_eq!(AvailableWidth::from_string("inf"), Ok(AvailableWidth::Unbounded));
    }

    #[test]
    fn test_parse_rejects_garbage_and_negatives() {
        assert!(matches!(
            AvailableWidth::from_string("wide"),
            Err(FlowError::Document(_))
        ));
        assert!(matches!(
            AvailableWidth::from_string("-10px"),
            Err(FlowError::InvalidParameter { name: "available_width", .. })
        ));
        assert!(AvailableWidth::from_string("NaN").is_err());
    }

    #[test]
    fn test_limit_and_display() {
        assert_eq!(AvailableWidth::Definite(80.0).limit(), 80.0);
        assert!(AvailableWidth::Unbounded.limit().is_infinite());
        assert_eq!(AvailableWidth::from(f32::INFINITY), AvailableWidth::Unbounded);
        assert_eq!(AvailableWidth::from(None), AvailableWidth::Unbounded);
        assert_eq!(AvailableWidth::Definite(80.0).to_string(), "80px");
        assert_eq!(AvailableWidth::Unbounded.to_string(), "unbounded");
    }
}
