//! Themed equipment and the factories that produce it.
//!
//! Each theme module defines one weapon, one armor and the
//! [`EquipmentFactory`] that pairs them. A factory only ever hands out items
//! of its own [`Theme`].

mod factory;
mod item;
mod magic;
mod medieval;
mod ranger;

pub use factory::EquipmentFactory;
pub use item::{Armor, Theme, Weapon};
pub use magic::{EnchantedRobe, MagicFactory, WizardStaff};
pub use medieval::{IronSword, MedievalFactory, PlateArmor};
pub use ranger::{LeatherArmor, Longbow, RangerFactory};
