//! Mage class and its factory.

use super::base::{Character, CharacterBase};
use super::factory::CharacterFactory;
use crate::attributes::Attributes;

/// Spellcaster: deep mana pool and intelligence, fragile body.
///
/// Pairs naturally with the magic theme, though any factory can equip it.
#[derive(Debug)]
pub struct Mage {
    base: CharacterBase,
}

impl Mage {
    pub const CLASS: &'static str = "Mage";
    pub const ATTRIBUTES: Attributes = Attributes::new(80, 100, 10, 40);

    pub fn new() -> Self {
        Self {
            base: CharacterBase::new(Self::CLASS, Self::ATTRIBUTES),
        }
    }
}

impl Default for Mage {
    fn default() -> Self {
        Self::new()
    }
}

impl Character for Mage {
    fn base(&self) -> &CharacterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CharacterBase {
        &mut self.base
    }

    fn special_ability(&self) -> String {
        format!("{} casts Fireball!", self.name())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MageFactory;

impl CharacterFactory for MageFactory {
    fn class_name(&self) -> &'static str {
        Mage::CLASS
    }

    fn create_character(&self) -> Box<dyn Character> {
        tracing::debug!(class = Mage::CLASS, "Creating character");
        Box::new(Mage::new())
    }
}
