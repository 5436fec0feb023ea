//! Search item types.

use serde::{Deserialize, Serialize};

/// Priority assumed for items that do not set one.
pub const DEFAULT_PRIORITY: u8 = 5;

/// Kind of searchable item. Determines the dialog section it appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Documentation page.
    Doc,
    /// UI component page.
    Component,
    /// Example app template.
    Example,
    /// Quick link to a specific feature or section.
    Feature,
}

impl ItemType {
    /// Lowercase tag, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Component => "component",
            Self::Example => "example",
            Self::Feature => "feature",
        }
    }
}

/// Display hint for the icon shown next to a result.
///
/// Resolved to an actual glyph by whatever renders the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Layout,
    Zap,
    Palette,
    Layers,
    Smartphone,
    Type,
    Box,
    MousePointer,
    FormInput,
    Component,
    FileText,
    Code,
    Sparkles,
}

impl Icon {
    /// Icon for a component category. Unknown categories get [`Icon::Box`].
    pub fn for_category(category: &str) -> Self {
        match category {
            "Text Animations" => Self::Type,
            "Animations" => Self::Layers,
            "Buttons" => Self::MousePointer,
            "Inputs" => Self::FormInput,
            "Layout" => Self::Layout,
            "Overlay" => Self::Box,
            "Data Display" => Self::Component,
            "Feedback" => Self::Zap,
            _ => Self::Box,
        }
    }
}

/// Target framework of a component or example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    ReactNative,
    Flutter,
    Both,
}

/// A uniform, searchable descriptor for anything the search dialog can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Unique identifier, namespaced by source (e.g. `component-button`).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Item kind.
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Navigation target.
    pub href: String,

    /// Short description for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Extra terms matched by the filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Alternative phrasings a user might type (e.g. "toggle" for Switch).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    /// Icon display hint.
    pub icon: Icon,

    /// Component category, only set for components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Ranking priority, 1-10, higher is more relevant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// Target framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,
}

impl SearchItem {
    /// Priority used for ordering, falling back to [`DEFAULT_PRIORITY`].
    pub fn effective_priority(&self) -> u8 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}
