//! Shared character state and the [`Character`] capability.
//!
//! Every class embeds a [`CharacterBase`] holding identity, attributes and the
//! equipped items. The trait supplies display and equip logic on top of that
//! base; classes only provide their special ability.

use core::fmt;

use crate::announce::Announcer;
use crate::attributes::Attributes;
use crate::equipment::{Armor, EquipmentFactory, Theme, Weapon};

/// Whether a character currently carries a loadout.
///
/// There is no transition back to `Unequipped`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EquipState {
    #[default]
    Unequipped,
    Equipped,
}

/// Fields common to every character class.
#[derive(Debug)]
pub struct CharacterBase {
    name: String,
    class: &'static str,
    attributes: Attributes,
    weapon: Option<Box<dyn Weapon>>,
    armor: Option<Box<dyn Armor>>,
}

impl CharacterBase {
    /// Creates an unequipped base named after its class.
    pub fn new(class: &'static str, attributes: Attributes) -> Self {
        Self {
            name: class.to_owned(),
            class,
            attributes,
            weapon: None,
            armor: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn weapon(&self) -> Option<&dyn Weapon> {
        self.weapon.as_deref()
    }

    pub fn armor(&self) -> Option<&dyn Armor> {
        self.armor.as_deref()
    }

    /// Stores a new loadout, returning true if an older one was dropped.
    pub fn set_loadout(&mut self, weapon: Box<dyn Weapon>, armor: Box<dyn Armor>) -> bool {
        let had_weapon = self.weapon.replace(weapon).is_some();
        let had_armor = self.armor.replace(armor).is_some();
        had_weapon || had_armor
    }
}

/// Printable snapshot of a character's identity and attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatSheet {
    pub name: String,
    pub class: &'static str,
    pub attributes: Attributes,
}

impl StatSheet {
    /// Lines in display order: header, Class, Health, Mana, Strength, Intelligence.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("=== {} ===", self.name),
            format!("Class: {}", self.class),
            format!("Health: {}", self.attributes.health),
            format!("Mana: {}", self.attributes.mana),
            format!("Strength: {}", self.attributes.strength),
            format!("Intelligence: {}", self.attributes.intelligence),
        ]
    }
}

/// A playable character.
///
/// Implementors expose their [`CharacterBase`] and a special ability message;
/// everything else is provided.
pub trait Character: fmt::Debug + Send {
    fn base(&self) -> &CharacterBase;

    fn base_mut(&mut self) -> &mut CharacterBase;

    /// Announcement for this class's special ability.
    fn special_ability(&self) -> String;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn class_name(&self) -> &'static str {
        self.base().class()
    }

    fn attributes(&self) -> Attributes {
        self.base().attributes()
    }

    fn weapon(&self) -> Option<&dyn Weapon> {
        self.base().weapon()
    }

    fn armor(&self) -> Option<&dyn Armor> {
        self.base().armor()
    }

    fn equip_state(&self) -> EquipState {
        match (self.weapon(), self.armor()) {
            (Some(_), Some(_)) => EquipState::Equipped,
            _ => EquipState::Unequipped,
        }
    }

    /// Theme shared by the equipped weapon and armor, if any.
    fn loadout_theme(&self) -> Option<Theme> {
        match (self.weapon(), self.armor()) {
            (Some(weapon), Some(armor)) if weapon.theme() == armor.theme() => Some(weapon.theme()),
            _ => None,
        }
    }

    fn stat_sheet(&self) -> StatSheet {
        StatSheet {
            name: self.name().to_owned(),
            class: self.class_name(),
            attributes: self.attributes(),
        }
    }

    fn display_stats(&self, out: &mut dyn Announcer) {
        for line in self.stat_sheet().lines() {
            out.announce(&line);
        }
    }

    fn use_special_ability(&self, out: &mut dyn Announcer) {
        out.announce(&self.special_ability());
    }

    /// Equips a fresh weapon and armor from `factory`, replacing any loadout.
    ///
    /// Each creation method of the factory is called exactly once.
    fn equip(&mut self, factory: &dyn EquipmentFactory, out: &mut dyn Announcer) {
        let weapon = factory.create_weapon();
        let armor = factory.create_armor();

        out.announce(&format!(
            "{} equipped with {} and {}",
            self.name(),
            weapon.info(),
            armor.info()
        ));
        out.announce(&format!(
            "Weapon: {} (Damage: {})",
            weapon.info(),
            weapon.damage()
        ));
        out.announce(&format!(
            "Armor: {} (Defense: {})",
            armor.info(),
            armor.defense()
        ));

        tracing::info!(
            character = self.name(),
            theme = %factory.theme(),
            weapon = weapon.info(),
            armor = armor.info(),
            "Character equipped"
        );

        if self.base_mut().set_loadout(weapon, armor) {
            tracing::debug!("Previous loadout dropped");
        }
    }
}
