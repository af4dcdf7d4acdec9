//! Factory selection by name.
//!
//! The registry is the one place that enumerates concrete factories. Everything
//! else talks to `dyn CharacterFactory` / `dyn EquipmentFactory`. Keys are the
//! class name or theme name, matched ASCII case-insensitively.

use std::collections::BTreeMap;

use crate::character::{ArcherFactory, Character, CharacterFactory, MageFactory, WarriorFactory};
use crate::equipment::{EquipmentFactory, MagicFactory, MedievalFactory, RangerFactory};
use crate::error::RegistryError;

/// Registry of character and equipment factories keyed by name.
#[derive(Default)]
pub struct FactoryRegistry {
    classes: BTreeMap<String, Box<dyn CharacterFactory>>,
    themes: BTreeMap<String, Box<dyn EquipmentFactory>>,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in classes and themes.
    pub fn with_defaults() -> Self {
        let classes: [Box<dyn CharacterFactory>; 3] = [
            Box::new(WarriorFactory),
            Box::new(MageFactory),
            Box::new(ArcherFactory),
        ];
        let themes: [Box<dyn EquipmentFactory>; 3] = [
            Box::new(MedievalFactory),
            Box::new(MagicFactory),
            Box::new(RangerFactory),
        ];

        let mut registry = Self::new();
        for factory in classes {
            registry
                .classes
                .insert(factory.class_name().to_ascii_lowercase(), factory);
        }
        for factory in themes {
            registry.themes.insert(factory.theme().key(), factory);
        }
        registry
    }

    /// Registers a character factory under its class name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateClass`] if the class is already registered.
    pub fn register_character_factory(
        &mut self,
        factory: Box<dyn CharacterFactory>,
    ) -> Result<(), RegistryError> {
        let key = factory.class_name().to_ascii_lowercase();
        if self.classes.contains_key(&key) {
            return Err(RegistryError::DuplicateClass(factory.class_name().to_owned()));
        }
        tracing::debug!(class = factory.class_name(), "Registered character factory");
        self.classes.insert(key, factory);
        Ok(())
    }

    /// Registers an equipment factory under its theme.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTheme`] if the theme is already registered.
    pub fn register_equipment_factory(
        &mut self,
        factory: Box<dyn EquipmentFactory>,
    ) -> Result<(), RegistryError> {
        let theme = factory.theme();
        let key = theme.key();
        if self.themes.contains_key(&key) {
            return Err(RegistryError::DuplicateTheme(theme.name().to_owned()));
        }
        tracing::debug!(theme = theme.name(), "Registered equipment factory");
        self.themes.insert(key, factory);
        Ok(())
    }

    /// Looks up the factory for `class`.
    pub fn character_factory(&self, class: &str) -> Result<&dyn CharacterFactory, RegistryError> {
        self.classes
            .get(&class.to_ascii_lowercase())
            .map(|factory| factory.as_ref())
            .ok_or_else(|| RegistryError::UnknownClass(class.to_owned()))
    }

    /// Looks up the factory for `theme`.
    pub fn equipment_factory(&self, theme: &str) -> Result<&dyn EquipmentFactory, RegistryError> {
        self.themes
            .get(&theme.to_ascii_lowercase())
            .map(|factory| factory.as_ref())
            .ok_or_else(|| RegistryError::UnknownTheme(theme.to_owned()))
    }

    /// Creates a fresh character of `class`.
    pub fn create_character(&self, class: &str) -> Result<Box<dyn Character>, RegistryError> {
        Ok(self.character_factory(class)?.create_character())
    }

    /// Registered class keys in sorted order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Registered theme keys in sorted order.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::Theme;

    #[test]
    fn defaults_are_registered() {
        let registry = FactoryRegistry::with_defaults();
        assert_eq!(
            registry.class_names().collect::<Vec<_>>(),
            vec!["archer", "mage", "warrior"]
        );
        assert_eq!(
            registry.themes().collect::<Vec<_>>(),
            vec!["magic", "medieval", "ranger"]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = FactoryRegistry::with_defaults();
        let mage = registry.create_character("MAGE").expect("mage is registered");
        assert_eq!(mage.name(), "Mage");

        let factory = registry
            .equipment_factory("Ranger")
            .expect("ranger is registered");
        assert_eq!(factory.theme(), Theme::RANGER);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let registry = FactoryRegistry::with_defaults();
        assert_eq!(
            registry.create_character("paladin").unwrap_err(),
            RegistryError::UnknownClass("paladin".into())
        );
        assert!(matches!(
            registry.equipment_factory("undead"),
            Err(RegistryError::UnknownTheme(name)) if name == "undead"
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = FactoryRegistry::with_defaults();
        assert_eq!(
            registry.register_character_factory(Box::new(WarriorFactory)),
            Err(RegistryError::DuplicateClass("Warrior".into()))
        );
        assert_eq!(
            registry.register_equipment_factory(Box::new(MagicFactory)),
            Err(RegistryError::DuplicateTheme("Magic".into()))
        );
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let registry = FactoryRegistry::new();
        assert_eq!(registry.class_names().count(), 0);
        assert!(registry.create_character("warrior").is_err());
    }
}
