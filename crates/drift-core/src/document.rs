// crates/drift-core/src/document.rs
use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AvailableWidth, ChipMetrics, Chip, FlowError, Result, SizedItem};

/// Gap between neighbouring chips on the profile and rig screens.
pub const DEFAULT_CHIP_SPACING: f32 = 8.0;

fn default_spacing() -> f32 {
    DEFAULT_CHIP_SPACING
}

/// Width as written in a document: `100`, `"100px"` or `"unbounded"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthSpec {
    Points(f32),
    Text(String),
}

/// One entry of the `items` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    Sized { id: String, width: f32, height: f32 },
    Labelled { id: String, label: String },
}

impl ItemSpec {
    pub fn id(&self) -> &str {
        match self {
            ItemSpec::Sized { id, .. } | ItemSpec::Labelled { id, .. } => id,
        }
    }
}

/// A flow layout request as read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub width: Option<WidthSpec>,
    #[serde(default = "default_spacing")]
    pub horizontal_spacing: f32,
    #[serde(default = "default_spacing")]
    pub vertical_spacing: f32,
    #[serde(default)]
    pub origin: Option<[f32; 2]>,
    /// Metrics preset for labelled items: "compact" or "badge".
    #[serde(default)]
    pub chip_style: Option<String>,
    pub items: Vec<ItemSpec>,
}

impl LayoutDocument {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| FlowError::Document(e.to_string()))
    }

    pub fn available_width(&self) -> Result<AvailableWidth> {
        match &self.width {
            None => Ok(AvailableWidth::Unbounded),
            Some(WidthSpec::Points(width)) => {
                crate::check_non_negative("available_width", *width, true)?;
                Ok(AvailableWidth::from(*width))
            }
            Some(WidthSpec::Text(text)) => AvailableWidth::from_string(text),
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin.map(Vec2::from).unwrap_or(Vec2::ZERO)
    }

    pub fn metrics(&self) -> Result<ChipMetrics> {
        match self.chip_style.as_deref() {
            None => Ok(ChipMetrics::default()),
            Some(name) => ChipMetrics::from_name(name)
                .ok_or_else(|| FlowError::Document(format!("unknown chip style '{}'", name))),
        }
    }

    /// Measures every item, labelled ones through the document's chip metrics.
    pub fn resolve_items(&self) -> Result<Vec<SizedItem>> {
        let metrics = self.metrics()?;
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(self.items.len());

        for entry in &self.items {
            if !seen.insert(entry.id()) {
                return Err(FlowError::Document(format!("duplicate item id '{}'", entry.id())));
            }

            let item = match entry {
                ItemSpec::Sized { id, width, height } => SizedItem::new(id.clone(), *width, *height),
                ItemSpec::Labelled { id, label } => {
                    let chip = Chip::new(id.clone(), label.clone()).measured(&metrics);
                    SizedItem {
                        id: chip.chip.id,
                        size: chip.size,
                    }
                }
            };
            items.push(item);
        }

        debug!("Resolved {} items from layout document", items.len());
        Ok(items)
    }
}
