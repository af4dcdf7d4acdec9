//! Ranger theme: longbow and leather armor.

use super::factory::EquipmentFactory;
use super::item::{Armor, Theme, Weapon};

impl Theme {
    pub const RANGER: Theme = Theme::new("Ranger");
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Longbow;

impl Weapon for Longbow {
    fn info(&self) -> &'static str {
        "Longbow"
    }

    fn damage(&self) -> u32 {
        20
    }

    fn theme(&self) -> Theme {
        Theme::RANGER
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeatherArmor;

impl Armor for LeatherArmor {
    fn info(&self) -> &'static str {
        "Leather Armor"
    }

    fn defense(&self) -> u32 {
        20
    }

    fn theme(&self) -> Theme {
        Theme::RANGER
    }
}

/// Hands out [`Longbow`] and [`LeatherArmor`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RangerFactory;

impl EquipmentFactory for RangerFactory {
    fn theme(&self) -> Theme {
        Theme::RANGER
    }

    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(Longbow)
    }

    fn create_armor(&self) -> Box<dyn Armor> {
        Box::new(LeatherArmor)
    }
}
