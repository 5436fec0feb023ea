//! Static component and example catalog.
//!
//! These records are the source data for the component gallery, the example
//! templates and the global search index. They are compiled in and never
//! change at runtime.

use std::fmt;

use serde::Serialize;

/// Metadata for a single UI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentMeta {
    /// Display name.
    pub name: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// URL slug, unique across the catalog.
    pub slug: &'static str,

    /// Gallery category.
    pub category: &'static str,

    /// Recently added.
    pub is_new: bool,

    /// Part of the stylish (animated/decorative) set.
    pub is_stylish: bool,
}

/// Skill level of an example template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Display name, as shown on the example cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for an example app template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleMeta {
    /// URL identifier.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Skill level.
    pub difficulty: Difficulty,

    /// Names of the UI components the template showcases.
    pub components: &'static [&'static str],
}

const fn component(
    name: &'static str,
    description: &'static str,
    slug: &'static str,
    category: &'static str,
    is_new: bool,
    is_stylish: bool,
) -> ComponentMeta {
    ComponentMeta {
        name,
        description,
        slug,
        category,
        is_new,
        is_stylish,
    }
}

static COMPONENTS: &[ComponentMeta] = &[
    // Text Animations
    component(
        "Split Text",
        "Animated text that reveals character by character.",
        "split-text",
        "Text Animations",
        true,
        true,
    ),
    component(
        "Blur Text",
        "Text with blur-in animation effect.",
        "blur-text",
        "Text Animations",
        true,
        true,
    ),
    component(
        "Gradient Text",
        "Animated gradient text with smooth color transitions.",
        "gradient-text",
        "Text Animations",
        true,
        true,
    ),
    component(
        "Typewriter",
        "Classic typewriter text animation effect.",
        "typewriter",
        "Text Animations",
        true,
        true,
    ),
    // Animations
    component(
        "Fade Content",
        "Fade in animation for content sections.",
        "fade-content",
        "Animations",
        true,
        false,
    ),
    component(
        "Scale Content",
        "Scale animation with spring physics.",
        "scale-content",
        "Animations",
        true,
        false,
    ),
    component(
        "Slide In",
        "Slide in animation from any direction.",
        "slide-in",
        "Animations",
        true,
        false,
    ),
    // Buttons
    component(
        "Button",
        "A pressable button component with multiple variants.",
        "button",
        "Buttons",
        false,
        false,
    ),
    component(
        "Gradient Button",
        "A stylish button with gradient backgrounds and glow effect.",
        "gradient-button",
        "Buttons",
        true,
        true,
    ),
    component(
        "FAB",
        "Floating Action Button with expandable menu.",
        "fab",
        "Buttons",
        true,
        true,
    ),
    // Inputs
    component(
        "Input",
        "A text input field for user data entry.",
        "input",
        "Inputs",
        false,
        false,
    ),
    component(
        "Animated Input",
        "Material-style input with floating label animation.",
        "animated-input",
        "Inputs",
        true,
        true,
    ),
    component(
        "Switch",
        "A toggle switch for boolean settings.",
        "switch",
        "Inputs",
        false,
        false,
    ),
    component(
        "Checkbox",
        "A check box with spring animation.",
        "checkbox",
        "Inputs",
        true,
        false,
    ),
    component(
        "Slider",
        "A customizable slider for selecting values.",
        "slider",
        "Inputs",
        true,
        false,
    ),
    component(
        "OTP Input",
        "6-digit verification code input with auto-focus.",
        "otp-input",
        "Inputs",
        true,
        true,
    ),
    // Layout
    component(
        "Card",
        "A container component for grouping related content.",
        "card",
        "Layout",
        false,
        false,
    ),
    component(
        "Glass Card",
        "A modern glassmorphism card with blur effect.",
        "glass-card",
        "Layout",
        true,
        true,
    ),
    component(
        "Accordion",
        "Collapsible content sections with smooth animations.",
        "accordion",
        "Layout",
        true,
        false,
    ),
    component(
        "Tabs",
        "Animated tab navigation with sliding indicator.",
        "tabs",
        "Layout",
        true,
        false,
    ),
    // Overlay
    component(
        "Modal",
        "A dialog overlay for focused interactions.",
        "modal",
        "Overlay",
        false,
        false,
    ),
    // Data Display
    component(
        "Avatar",
        "An image component for displaying user profile pictures.",
        "avatar",
        "Data Display",
        false,
        false,
    ),
    component(
        "Badge",
        "A small label for status or count indicators.",
        "badge",
        "Data Display",
        false,
        false,
    ),
    component(
        "Skeleton",
        "Loading placeholder with shimmer animation.",
        "skeleton",
        "Data Display",
        true,
        false,
    ),
    component(
        "Progress",
        "Animated progress bar with spring animation.",
        "progress",
        "Data Display",
        true,
        false,
    ),
    // Feedback
    component(
        "Alert",
        "A component for displaying important messages.",
        "alert",
        "Feedback",
        false,
        false,
    ),
    component(
        "Spinner",
        "Animated loading spinner.",
        "spinner",
        "Feedback",
        true,
        false,
    ),
    component(
        "Toast",
        "Toast notifications with animations.",
        "toast",
        "Feedback",
        true,
        false,
    ),
];

static EXAMPLES: &[ExampleMeta] = &[
    ExampleMeta {
        id: "todo-app",
        name: "Todo App",
        description: "A beautiful task management app with categories, priorities, and smooth animations.",
        difficulty: Difficulty::Beginner,
        components: &["Button", "Input", "Checkbox", "Card", "Modal"],
    },
    ExampleMeta {
        id: "ecommerce",
        name: "E-commerce App",
        description: "Full-featured shopping app with product listings, cart, and checkout flow.",
        difficulty: Difficulty::Intermediate,
        components: &["Card", "Button", "Badge", "Modal", "Tabs"],
    },
    ExampleMeta {
        id: "social-app",
        name: "Social Media App",
        description: "Social networking layout with feed, stories, and profiles.",
        difficulty: Difficulty::Advanced,
        components: &["Avatar", "Card", "Input", "Skeleton"],
    },
    ExampleMeta {
        id: "finance-app",
        name: "Finance Dashboard",
        description: "Banking interface with transaction list and spending overview.",
        difficulty: Difficulty::Advanced,
        components: &["Card", "Badge", "Progress"],
    },
];

/// All components, in gallery order.
pub fn components() -> &'static [ComponentMeta] {
    COMPONENTS
}

/// All example templates, in gallery order.
pub fn examples() -> &'static [ExampleMeta] {
    EXAMPLES
}

/// Distinct component categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for c in COMPONENTS {
        if !seen.contains(&c.category) {
            seen.push(c.category);
        }
    }
    seen
}

/// Look up a component by its exact slug.
pub fn component_by_slug(slug: &str) -> Option<&'static ComponentMeta> {
    COMPONENTS.iter().find(|c| c.slug == slug)
}

/// Components belonging to `category` (exact match).
pub fn components_by_category(category: &str) -> Vec<&'static ComponentMeta> {
    COMPONENTS.iter().filter(|c| c.category == category).collect()
}

/// Look up an example template by id.
pub fn example_by_id(id: &str) -> Option<&'static ExampleMeta> {
    EXAMPLES.iter().find(|e| e.id == id)
}

/// Component picker filter.
///
/// A blank query returns the whole catalog. Otherwise keeps components whose
/// name, description or category contains the lower-cased query.
pub fn filter_components(query: &str) -> Vec<&'static ComponentMeta> {
    if query.trim().is_empty() {
        return COMPONENTS.iter().collect();
    }

    let q = query.to_lowercase();
    COMPONENTS
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&q)
                || c.description.to_lowercase().contains(&q)
                || c.category.to_lowercase().contains(&q)
        })
        .collect()
}

/// Group components by category, in order of first appearance.
pub fn group_by_category<'a>(
    list: &[&'a ComponentMeta],
) -> Vec<(&'a str, Vec<&'a ComponentMeta>)> {
    let mut groups: Vec<(&'a str, Vec<&'a ComponentMeta>)> = Vec::new();

    for &c in list {
        match groups.iter_mut().find(|(name, _)| *name == c.category) {
            Some((_, members)) => members.push(c),
            None => groups.push((c.category, vec![c])),
        }
    }

    groups
}
