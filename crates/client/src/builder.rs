//! Demo builder with fail-fast roster validation.

use anyhow::{Context, Result, ensure};
use game_core::FactoryRegistry;

use crate::{ClientConfig, Demo, RosterEntry};

/// Builder for constructing a [`Demo`].
///
/// # Design Principles
///
/// - **Defaults**: built-in registry, default roster, abilities shown
/// - **Fail-fast validation**: every roster entry is resolved in `build()`,
///   before anything is announced
#[derive(Default)]
pub struct DemoBuilder {
    registry: Option<FactoryRegistry>,
    roster: Option<Vec<RosterEntry>>,
    show_abilities: Option<bool>,
}

impl DemoBuilder {
    /// Create a new DemoBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom registry instead of the built-in classes and themes.
    pub fn registry(mut self, registry: FactoryRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn roster(mut self, roster: Vec<RosterEntry>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn show_abilities(mut self, show: bool) -> Self {
        self.show_abilities = Some(show);
        self
    }

    /// Apply roster and ability settings from configuration.
    pub fn config(self, config: &ClientConfig) -> Self {
        self.roster(config.roster.clone())
            .show_abilities(config.show_abilities)
    }

    /// Build the Demo.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty or names a class or theme the
    /// registry does not know.
    pub fn build(self) -> Result<Demo> {
        let registry = self.registry.unwrap_or_else(FactoryRegistry::with_defaults);
        let roster = self.roster.unwrap_or_else(ClientConfig::default_roster);

        ensure!(!roster.is_empty(), "Roster is empty. Use .roster() to set it.");

        for entry in &roster {
            registry
                .character_factory(&entry.class)
                .with_context(|| format!("invalid roster entry {}:{}", entry.class, entry.theme))?;
            registry
                .equipment_factory(&entry.theme)
                .with_context(|| format!("invalid roster entry {}:{}", entry.class, entry.theme))?;
        }

        Ok(Demo {
            registry,
            roster,
            show_abilities: self.show_abilities.unwrap_or(true),
        })
    }
}
