//! Playable characters and the factories that create them.
//!
//! Every class lives in its own module together with its factory, so adding a
//! class is one new module implementing [`Character`] and [`CharacterFactory`].

mod archer;
mod base;
mod factory;
mod mage;
mod warrior;

pub use archer::{Archer, ArcherFactory};
pub use base::{Character, CharacterBase, EquipState, StatSheet};
pub use factory::CharacterFactory;
pub use mage::{Mage, MageFactory};
pub use warrior::{Warrior, WarriorFactory};
