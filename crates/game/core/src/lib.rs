//! Character creation and themed equipment for the RPG demo.
//!
//! `game-core` defines the two creation seams of the game:
//! - [`CharacterFactory`] builds one character class (Warrior, Mage, Archer, ...)
//! - [`EquipmentFactory`] builds one matched weapon/armor pair per [`Theme`]
//!
//! Callers depend only on the traits. Concrete types are enumerated in exactly
//! one place, [`FactoryRegistry::with_defaults`], and new classes or themes are
//! added by implementing the traits and registering the factory.
pub mod announce;
pub mod attributes;
pub mod character;
pub mod equipment;
pub mod error;
pub mod registry;

pub use announce::Announcer;
pub use attributes::Attributes;
pub use character::{
    Archer, ArcherFactory, Character, CharacterBase, CharacterFactory, EquipState, Mage,
    MageFactory, StatSheet, Warrior, WarriorFactory,
};
pub use equipment::{
    Armor, EnchantedRobe, EquipmentFactory, IronSword, LeatherArmor, Longbow, MagicFactory,
    MedievalFactory, PlateArmor, RangerFactory, Theme, Weapon, WizardStaff,
};
pub use error::{ErrorSeverity, GameError, RegistryError};
pub use registry::FactoryRegistry;
