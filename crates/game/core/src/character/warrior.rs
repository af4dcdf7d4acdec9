//! Warrior class and its factory.

use super::base::{Character, CharacterBase};
use super::factory::CharacterFactory;
use crate::attributes::Attributes;

/// Frontline fighter: high health and strength, little mana.
#[derive(Debug)]
pub struct Warrior {
    base: CharacterBase,
}

impl Warrior {
    pub const CLASS: &'static str = "Warrior";
    pub const ATTRIBUTES: Attributes = Attributes::new(150, 20, 40, 10);

    pub fn new() -> Self {
        Self {
            base: CharacterBase::new(Self::CLASS, Self::ATTRIBUTES),
        }
    }
}

impl Default for Warrior {
    fn default() -> Self {
        Self::new()
    }
}

impl Character for Warrior {
    fn base(&self) -> &CharacterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CharacterBase {
        &mut self.base
    }

    fn special_ability(&self) -> String {
        format!("{} uses Whirlwind Strike!", self.name())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WarriorFactory;

impl CharacterFactory for WarriorFactory {
    fn class_name(&self) -> &'static str {
        Warrior::CLASS
    }

    fn create_character(&self) -> Box<dyn Character> {
        tracing::debug!(class = Warrior::CLASS, "Creating character");
        Box::new(Warrior::new())
    }
}
