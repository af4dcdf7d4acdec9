//! Factory method for characters.

use super::base::Character;

/// Creates characters of exactly one class.
///
/// Callers hold a `dyn CharacterFactory` and never name the class they get
/// back. Implementations are stateless and construction cannot fail.
pub trait CharacterFactory: Send + Sync {
    /// Class name this factory produces, also its registry key.
    fn class_name(&self) -> &'static str;

    /// Builds a fresh, unequipped character.
    fn create_character(&self) -> Box<dyn Character>;
}
