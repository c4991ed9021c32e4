//! Catalog registry
//!
//! Assembles every story page into the catalog. Registration order is the
//! sidebar order within each section.

use super::Catalog;
use crate::error::Result;
use crate::stories::{blocks, pages, primitives};

/// Build the full catalog.
///
/// Fails only on a duplicate identifier, which is an authoring mistake
/// caught here at load time.
pub fn build_catalog() -> Result<Catalog> {
    Catalog::try_new(vec![
        // Primitives
        primitives::button::entry(),
        primitives::input::entry(),
        primitives::checkbox::entry(),
        primitives::switch::entry(),
        primitives::select::entry(),
        primitives::badge::entry(),
        primitives::avatar::entry(),
        primitives::card::entry(),
        primitives::table::entry(),
        primitives::tabs::entry(),
        // Blocks
        blocks::login_form::entry(),
        blocks::settings_notifications::entry(),
        blocks::settings_security::entry(),
        blocks::data_table::entry(),
        blocks::site_header::entry(),
        // Pages
        pages::settings::entry(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Section;
    use crate::interaction::run_all;

    #[test]
    fn catalog_builds_with_distinct_ids() {
        let catalog = build_catalog().expect("no duplicate story ids");
        assert_eq!(catalog.len(), 16);
    }

    #[test]
    fn every_section_has_entries() {
        let catalog = build_catalog().expect("catalog builds");
        for section in Section::all() {
            assert!(
                catalog.section_entries(section).next().is_some(),
                "empty section: {section:?}"
            );
        }
    }

    #[test]
    fn every_declared_scenario_passes() {
        let catalog = build_catalog().expect("catalog builds");
        for entry in catalog.entries() {
            for outcome in run_all(&entry.scenarios()) {
                assert!(
                    outcome.passed(),
                    "{} / {}: {:?}",
                    entry.id,
                    outcome.name,
                    outcome.result
                );
            }
        }
    }

    #[test]
    fn scenario_names_are_distinct_within_an_entry() {
        let catalog = build_catalog().expect("catalog builds");
        for entry in catalog.entries() {
            let mut names: Vec<_> =
                entry.scenarios().iter().map(|s| s.name()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), entry.scenarios().len(), "{}", entry.id);
        }
    }
}
