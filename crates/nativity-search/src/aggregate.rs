//! Search index aggregation.
//!
//! Flattens documentation pages, catalog components, example templates and
//! quick-link features into one list of [`SearchItem`]s ordered by priority.

use std::sync::LazyLock;

use nativity_core::{ComponentMeta, ExampleMeta, catalog};
use tracing::info;

use crate::item::{Framework, Icon, ItemType, SearchItem};

/// Alternate terms developers type when looking for a component, by slug.
static COMPONENT_SYNONYMS: &[(&str, &[&str])] = &[
    ("button", &["click", "action", "submit", "press", "tap", "cta"]),
    ("input", &["text field", "form", "textbox", "entry"]),
    ("switch", &["toggle", "on off", "boolean"]),
    ("checkbox", &["check", "tick", "select"]),
    ("slider", &["range", "volume", "seek"]),
    ("modal", &["dialog", "popup", "overlay", "sheet"]),
    ("card", &["container", "box", "panel"]),
    ("avatar", &["profile", "user image", "photo"]),
    ("badge", &["tag", "label", "chip", "pill"]),
    ("skeleton", &["loading", "placeholder", "shimmer"]),
    ("progress", &["loading bar", "percentage", "status"]),
    ("alert", &["notification", "message", "warning"]),
    ("spinner", &["loader", "loading", "indicator"]),
    ("toast", &["snackbar", "notification", "message"]),
    ("tabs", &["navigation", "segmented", "sections"]),
    ("accordion", &["collapse", "expandable", "dropdown"]),
    ("fab", &["floating button", "action button", "plus button"]),
    ("otp-input", &["verification", "code input", "pin"]),
    ("typewriter", &["typing", "text animation", "reveal"]),
    ("blur-text", &["blur animation", "fade text"]),
    ("split-text", &["character animation", "letter animation"]),
    ("gradient-text", &["colorful text", "animated text"]),
];

const EXAMPLE_SYNONYMS: &[&str] = &["sample", "demo", "project", "boilerplate"];

const EXAMPLE_PRIORITY: u8 = 6;

static SEARCH_ITEMS: LazyLock<Vec<SearchItem>> = LazyLock::new(|| {
    let items = build_search_items(catalog::components(), catalog::examples());
    info!(items = items.len(), "Built search index");
    items
});

/// The aggregated index over the built-in catalog.
///
/// Built on first access and shared read-only afterwards.
pub fn search_items() -> &'static [SearchItem] {
    &SEARCH_ITEMS
}

/// Synonyms for a component slug (case-insensitive). Empty when unlisted.
pub fn synonyms_for(slug: &str) -> &'static [&'static str] {
    let key = slug.to_lowercase();
    COMPONENT_SYNONYMS
        .iter()
        .find(|(s, _)| *s == key)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

/// Slugs that have a synonym entry.
pub fn synonym_slugs() -> impl Iterator<Item = &'static str> {
    COMPONENT_SYNONYMS.iter().map(|(slug, _)| *slug)
}

/// Build the full index from catalog records.
///
/// Items are concatenated as docs, components, examples, features and then
/// stably sorted by descending priority, so equal priorities keep that order.
pub fn build_search_items(components: &[ComponentMeta], examples: &[ExampleMeta]) -> Vec<SearchItem> {
    let mut items = doc_items();
    items.extend(components.iter().map(component_item));
    items.extend(examples.iter().map(example_item));
    items.extend(feature_items());

    items.sort_by(|a, b| b.effective_priority().cmp(&a.effective_priority()));
    items
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn component_item(c: &ComponentMeta) -> SearchItem {
    let mut keywords = strings(&[c.category, "ui", "component", c.slug]);
    if c.is_new {
        keywords.extend(strings(&["new", "latest"]));
    }

    SearchItem {
        id: format!("component-{}", c.slug),
        title: c.name.to_string(),
        item_type: ItemType::Component,
        href: format!("/docs/components/{}", c.slug),
        description: Some(c.description.to_string()),
        keywords,
        synonyms: strings(synonyms_for(c.slug)),
        icon: Icon::for_category(c.category),
        category: Some(c.category.to_string()),
        priority: Some(if c.is_new { 8 } else { 5 }),
        framework: Some(Framework::ReactNative),
    }
}

fn example_item(e: &ExampleMeta) -> SearchItem {
    let mut keywords = strings(&["template", "starter", "app", "code", "example"]);
    keywords.push(e.difficulty.to_string());
    keywords.extend(strings(e.components));

    SearchItem {
        id: format!("example-{}", e.id),
        title: e.name.to_string(),
        item_type: ItemType::Example,
        href: format!("/examples/{}", e.id),
        description: Some(e.description.to_string()),
        keywords,
        synonyms: strings(EXAMPLE_SYNONYMS),
        icon: Icon::Smartphone,
        category: None,
        priority: Some(EXAMPLE_PRIORITY),
        framework: Some(Framework::ReactNative),
    }
}

/// Hand-authored entry (docs and features) with no category or framework.
struct Entry {
    id: &'static str,
    title: &'static str,
    href: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    synonyms: &'static [&'static str],
    icon: Icon,
    priority: u8,
}

impl Entry {
    fn into_item(self, item_type: ItemType) -> SearchItem {
        SearchItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            item_type,
            href: self.href.to_string(),
            description: Some(self.description.to_string()),
            keywords: strings(self.keywords),
            synonyms: strings(self.synonyms),
            icon: self.icon,
            category: None,
            priority: Some(self.priority),
            framework: None,
        }
    }
}

fn doc_items() -> Vec<SearchItem> {
    [
        Entry {
            id: "doc-intro",
            title: "Introduction",
            href: "/docs",
            description: "Overview of Nativity UI",
            keywords: &["intro", "overview", "about", "welcome", "home"],
            synonyms: &["start", "begin", "what is"],
            icon: Icon::FileText,
            priority: 10,
        },
        Entry {
            id: "doc-getting-started",
            title: "Getting Started",
            href: "/docs/getting-started",
            description: "Installation and setup guide",
            keywords: &["install", "setup", "usage", "npm", "yarn", "cli", "expo", "create"],
            synonyms: &["how to install", "quick start", "begin", "tutorial"],
            icon: Icon::Zap,
            priority: 9,
        },
        Entry {
            id: "doc-theming",
            title: "Theming",
            href: "/docs/theming",
            description: "Colors, dark mode, and design tokens",
            keywords: &[
                "colors",
                "dark mode",
                "light mode",
                "design system",
                "tokens",
                "css",
                "styles",
                "theme",
            ],
            synonyms: &["styling", "customization", "branding", "appearance", "look"],
            icon: Icon::Palette,
            priority: 8,
        },
        Entry {
            id: "doc-animations",
            title: "Animations",
            href: "/docs/animations",
            description: "Guide to using Reanimated with Nativity UI",
            keywords: &["reanimated", "motion", "gestures", "shared values", "spring", "timing"],
            synonyms: &["movement", "transitions", "effects", "animate"],
            icon: Icon::Layers,
            priority: 8,
        },
    ]
    .into_iter()
    .map(|e| e.into_item(ItemType::Doc))
    .collect()
}

fn feature_items() -> Vec<SearchItem> {
    [
        Entry {
            id: "feat-dark-mode",
            title: "Dark Mode",
            href: "/docs/theming#dark-mode",
            description: "Enable dark theme",
            keywords: &["theme", "night", "color scheme", "dark"],
            synonyms: &["night mode", "dark theme", "black mode"],
            icon: Icon::Palette,
            priority: 7,
        },
        Entry {
            id: "feat-installation",
            title: "Installation",
            href: "/docs/getting-started#installation",
            description: "npm install nativity-ui",
            keywords: &["npm", "yarn", "install", "add", "package"],
            synonyms: &["how to install", "setup"],
            icon: Icon::Code,
            priority: 9,
        },
        Entry {
            id: "feat-components-gallery",
            title: "Components Gallery",
            href: "/components",
            description: "Browse all UI components",
            keywords: &["all", "list", "browse", "gallery"],
            synonyms: &["component list", "ui library", "all components"],
            icon: Icon::Sparkles,
            priority: 8,
        },
    ]
    .into_iter()
    .map(|e| e.into_item(ItemType::Feature))
    .collect()
}
