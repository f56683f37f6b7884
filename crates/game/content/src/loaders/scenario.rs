//! Scenario loader.
//!
//! Loads actors, scenery, the hit effect, and an optional replay script from
//! RON files.

use std::collections::BTreeSet;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for battle scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text.
    ///
    /// Rejects files that list the same actor id twice. At runtime a duplicate
    /// `AddActor` is ignored, which would silently drop the second entry.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.actors.is_empty() {
            anyhow::bail!("scenario defines no actors");
        }

        let mut seen = BTreeSet::new();
        for actor in &scenario.actors {
            if !seen.insert(&actor.id) {
                anyhow::bail!("scenario lists actor {} more than once", actor.id);
            }
        }

        Ok(scenario)
    }
}
