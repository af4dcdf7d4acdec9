//! Magic theme: wizard staff and enchanted robe.

use super::factory::EquipmentFactory;
use super::item::{Armor, Theme, Weapon};

impl Theme {
    pub const MAGIC: Theme = Theme::new("Magic");
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WizardStaff;

impl Weapon for WizardStaff {
    fn info(&self) -> &'static str {
        "Wizard Staff"
    }

    fn damage(&self) -> u32 {
        15
    }

    fn theme(&self) -> Theme {
        Theme::MAGIC
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnchantedRobe;

impl Armor for EnchantedRobe {
    fn info(&self) -> &'static str {
        "Enchanted Robe"
    }

    fn defense(&self) -> u32 {
        10
    }

    fn theme(&self) -> Theme {
        Theme::MAGIC
    }
}

/// Hands out [`WizardStaff`] and [`EnchantedRobe`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MagicFactory;

impl EquipmentFactory for MagicFactory {
    fn theme(&self) -> Theme {
        Theme::MAGIC
    }

    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(WizardStaff)
    }

    fn create_armor(&self) -> Box<dyn Armor> {
        Box::new(EnchantedRobe)
    }
}
