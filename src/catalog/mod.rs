//! Story Catalog
//!
//! Registry mapping a stable identifier to a renderable example of a UI
//! primitive or composition. Entries are defined statically at load time and
//! never mutated; an identifier collision is an authoring mistake surfaced
//! when the catalog is built, not a runtime fault.

mod registry;

pub use registry::build_catalog;

use gpui::{AnyView, App, Window};

use crate::error::{Error, Result};
use crate::interaction::Scenario;

/// Top-level grouping shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Single foundational widgets (button, input, switch, ...)
    Primitives,
    /// Composed page sections (login form, settings panels, ...)
    Blocks,
    /// Full page compositions
    Pages,
}

impl Section {
    /// All sections in sidebar order
    pub fn all() -> [Section; 3] {
        [Section::Primitives, Section::Blocks, Section::Pages]
    }

    /// Translation key for the section heading
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Primitives => "section_primitives",
            Section::Blocks => "section_blocks",
            Section::Pages => "section_pages",
        }
    }
}

/// How the content canvas wraps a story
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoryLayout {
    /// Centered in the canvas with generous whitespace
    #[default]
    Centered,
    /// Padded, top-aligned, scrollable
    Padded,
    /// Fills the whole canvas
    Fullscreen,
}

/// Factory producing a story's view.
///
/// Construction may fail when a configuration violates a primitive's
/// contract; the canvas marks that single entry failed and leaves the rest
/// of the catalog untouched.
pub type RenderFn = fn(&mut Window, &mut App) -> Result<AnyView>;

/// Factory producing a story's interaction scenarios
pub type ScenarioFn = fn() -> Vec<Scenario>;

/// One named, isolated render of a component in a specific configuration
#[derive(Debug, Clone, Copy)]
pub struct StoryEntry {
    /// Unique identifier within the catalog (e.g. "primitives/button")
    pub id: &'static str,
    /// Sidebar title
    pub title: &'static str,
    /// Sidebar grouping
    pub section: Section,
    /// One-line description shown above the canvas
    pub description: &'static str,
    /// Canvas wrapper
    pub layout: StoryLayout,
    /// View factory
    pub render: RenderFn,
    /// Scripted interactions, if the entry declares any
    pub scenarios: Option<ScenarioFn>,
}

impl StoryEntry {
    /// The entry's scenarios, empty when none are declared
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios.map(|build| build()).unwrap_or_default()
    }
}

/// Immutable set of story entries with pairwise-distinct identifiers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<StoryEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers
    pub fn try_new(entries: Vec<StoryEntry>) -> Result<Self> {
        let mut seen: Vec<&'static str> = Vec::with_capacity(entries.len());
        for entry in &entries {
            if seen.contains(&entry.id) {
                return Err(Error::Invalid {
                    message: format!("duplicate story id: {}", entry.id),
                });
            }
            seen.push(entry.id);
        }
        Ok(Self { entries })
    }

    /// All entries in registration order
    pub fn entries(&self) -> &[StoryEntry] {
        &self.entries
    }

    /// Look up an entry by identifier
    pub fn get(&self, id: &str) -> Option<&StoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries belonging to one section, in registration order
    pub fn section_entries(&self, section: Section) -> impl Iterator<Item = &StoryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.section == section)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_rendered(_window: &mut Window, _cx: &mut App) -> Result<AnyView> {
        Err(Error::Invalid {
            message: "not rendered in tests".into(),
        })
    }

    fn entry(id: &'static str) -> StoryEntry {
        StoryEntry {
            id,
            title: "Test",
            section: Section::Primitives,
            description: "",
            layout: StoryLayout::Centered,
            render: never_rendered,
            scenarios: None,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::try_new(vec![entry("a"), entry("b"), entry("a")]);
        assert!(result.is_err());
    }

    #[test]
    fn lookup_by_id() {
        let catalog =
            Catalog::try_new(vec![entry("a"), entry("b")]).expect("distinct ids");
        assert_eq!(catalog.get("b").map(|e| e.id), Some("b"));
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn section_entries_preserve_registration_order() {
        let catalog =
            Catalog::try_new(vec![entry("a"), entry("b")]).expect("distinct ids");
        let ids: Vec<_> = catalog
            .section_entries(Section::Primitives)
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
