//! Base attributes shared by every character class.

/// The four attributes every character carries.
///
/// Values are fixed per class at construction and never change afterwards.
/// - **Health**: hit points
/// - **Mana**: spell resource
/// - **Strength**: physical power
/// - **Intelligence**: magical aptitude
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub intelligence: u32,
}

impl Attributes {
    /// Create attributes with the specified values
    pub const fn new(health: u32, mana: u32, strength: u32, intelligence: u32) -> Self {
        Self {
            health,
            mana,
            strength,
            intelligence,
        }
    }
}
