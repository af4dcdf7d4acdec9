//! Archer class and its factory.

use super::base::{Character, CharacterBase};
use super::factory::CharacterFactory;
use crate::attributes::Attributes;

/// Ranged fighter with balanced attributes.
#[derive(Debug)]
pub struct Archer {
    base: CharacterBase,
}

impl Archer {
    pub const CLASS: &'static str = "Archer";
    pub const ATTRIBUTES: Attributes = Attributes::new(100, 40, 25, 20);

    pub fn new() -> Self {
        Self {
            base: CharacterBase::new(Self::CLASS, Self::ATTRIBUTES),
        }
    }
}

impl Default for Archer {
    fn default() -> Self {
        Self::new()
    }
}

impl Character for Archer {
    fn base(&self) -> &CharacterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CharacterBase {
        &mut self.base
    }

    fn special_ability(&self) -> String {
        format!("{} uses Piercing Arrow!", self.name())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ArcherFactory;

impl CharacterFactory for ArcherFactory {
    fn class_name(&self) -> &'static str {
        Archer::CLASS
    }

    fn create_character(&self) -> Box<dyn Character> {
        tracing::debug!(class = Archer::CLASS, "Creating character");
        Box::new(Archer::new())
    }
}
