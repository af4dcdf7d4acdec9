//! Abstract factory for themed equipment.

use super::item::{Armor, Theme, Weapon};

/// Produces one matched weapon/armor pair.
///
/// Implementations are stateless. Both creation methods build a fresh item on
/// every call, and both items always report [`EquipmentFactory::theme`].
pub trait EquipmentFactory: Send + Sync {
    /// Theme shared by every item this factory produces.
    fn theme(&self) -> Theme;

    /// Builds a new weapon of this factory's theme.
    fn create_weapon(&self) -> Box<dyn Weapon>;

    /// Builds a new armor of this factory's theme.
    fn create_armor(&self) -> Box<dyn Armor>;
}
