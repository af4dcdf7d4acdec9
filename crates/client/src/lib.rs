//! Demo driver for the RPG character and equipment factories.
//!
//! # Architecture
//!
//! ```text
//! Demo (composition root)
//!   ├─→ FactoryRegistry (class and theme selection)
//!   ├─→ Roster (which class gets which theme)
//!   └─→ Announcer (where the transcript goes)
//! ```
//!
//! The binary wires configuration and logging around [`Demo`]; tests drive it
//! with a `Vec<String>` announcer.

mod builder;
pub mod config;
pub mod logging;

pub use builder::DemoBuilder;
pub use config::{ClientConfig, RosterEntry};

use anyhow::Result;
use game_core::{Announcer, Character, FactoryRegistry};

pub const HEADER: &str = "=== RPG Character Creation System ===";
pub const FOOTER: &str = "=== Demo Complete ===";

/// Prints announcements to stdout, one per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutAnnouncer;

impl Announcer for StdoutAnnouncer {
    fn announce(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Creates, presents and equips every character of the roster in order.
pub struct Demo {
    registry: FactoryRegistry,
    roster: Vec<RosterEntry>,
    show_abilities: bool,
}

impl Demo {
    /// Create a new DemoBuilder.
    pub fn builder() -> DemoBuilder {
        DemoBuilder::new()
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    /// Plays the demo into `out` and returns the equipped party.
    ///
    /// For each entry: stat sheet, special ability (unless disabled), equip.
    /// A blank line separates characters.
    pub fn run(&self, out: &mut dyn Announcer) -> Result<Vec<Box<dyn Character>>> {
        out.announce(HEADER);

        let mut party = Vec::with_capacity(self.roster.len());
        for (index, entry) in self.roster.iter().enumerate() {
            let character_factory = self.registry.character_factory(&entry.class)?;
            let equipment_factory = self.registry.equipment_factory(&entry.theme)?;

            if index > 0 {
                out.announce("");
            }

            let mut character = character_factory.create_character();
            character.display_stats(out);
            if self.show_abilities {
                character.use_special_ability(out);
            }
            character.equip(equipment_factory, out);

            tracing::debug!(
                class = character.class_name(),
                theme = %equipment_factory.theme(),
                "Roster entry complete"
            );
            party.push(character);
        }

        out.announce("");
        out.announce(FOOTER);
        Ok(party)
    }
}
