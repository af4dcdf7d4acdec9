//! Medieval theme: iron sword and plate armor.

use super::factory::EquipmentFactory;
use super::item::{Armor, Theme, Weapon};

impl Theme {
    pub const MEDIEVAL: Theme = Theme::new("Medieval");
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IronSword;

impl Weapon for IronSword {
    fn info(&self) -> &'static str {
        "Iron Sword"
    }

    fn damage(&self) -> u32 {
        25
    }

    fn theme(&self) -> Theme {
        Theme::MEDIEVAL
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlateArmor;

impl Armor for PlateArmor {
    fn info(&self) -> &'static str {
        "Plate Armor"
    }

    fn defense(&self) -> u32 {
        30
    }

    fn theme(&self) -> Theme {
        Theme::MEDIEVAL
    }
}

/// Hands out [`IronSword`] and [`PlateArmor`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MedievalFactory;

impl EquipmentFactory for MedievalFactory {
    fn theme(&self) -> Theme {
        Theme::MEDIEVAL
    }

    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(IronSword)
    }

    fn create_armor(&self) -> Box<dyn Armor> {
        Box::new(PlateArmor)
    }
}
