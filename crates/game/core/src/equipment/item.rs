//! Weapon and armor capabilities.

use core::fmt;

/// Consistency grouping shared by every item an equipment factory produces.
///
/// Themes are open: a new theme is a new constant, declared next to the items
/// and factory that belong to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Theme(&'static str);

impl Theme {
    /// Creates a theme with the given display name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Display name of the theme (e.g. "Medieval").
    pub const fn name(&self) -> &'static str {
        self.0
    }

    /// Lower-case lookup key used by the registry.
    pub fn key(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An offensive item.
///
/// Weapons are passive values: every accessor returns a constant of the
/// concrete type.
pub trait Weapon: fmt::Debug + Send + Sync {
    /// Fixed description shown to the player.
    fn info(&self) -> &'static str;

    /// Fixed damage rating.
    fn damage(&self) -> u32;

    /// Theme this weapon belongs to.
    fn theme(&self) -> Theme;
}

/// A defensive item.
pub trait Armor: fmt::Debug + Send + Sync {
    /// Fixed description shown to the player.
    fn info(&self) -> &'static str;

    /// Fixed defense rating.
    fn defense(&self) -> u32;

    /// Theme this armor belongs to.
    fn theme(&self) -> Theme;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_key_is_lowercase_name() {
        let theme = Theme::new("Dragon Slayer");
        assert_eq!(theme.name(), "Dragon Slayer");
        assert_eq!(theme.key(), "dragon slayer");
        assert_eq!(theme.to_string(), "Dragon Slayer");
    }
}
