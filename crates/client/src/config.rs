//! Demo configuration structures and loaders.

use std::env;
use std::path::PathBuf;

/// One character of the demo party and the theme it is equipped with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub class: String,
    pub theme: String,
}

impl RosterEntry {
    pub fn new(class: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            theme: theme.into(),
        }
    }

    /// Parses a `class:theme` pair. Both halves must be non-empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (class, theme) = raw.split_once(':')?;
        let (class, theme) = (class.trim(), theme.trim());
        if class.is_empty() || theme.is_empty() {
            return None;
        }
        Some(Self::new(class, theme))
    }
}

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub roster: Vec<RosterEntry>,
    pub show_abilities: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            roster: Self::default_roster(),
            show_abilities: true,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Warrior in medieval gear, mage in magic gear, archer in ranger gear.
    pub fn default_roster() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new("warrior", "medieval"),
            RosterEntry::new("mage", "magic"),
            RosterEntry::new("archer", "ranger"),
        ]
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RPG_ROSTER` - Comma-separated `class:theme` pairs (default: warrior:medieval,mage:magic,archer:ranger)
    /// - `RPG_SHOW_ABILITIES` - Announce special abilities (default: true)
    /// - `RPG_LOG_DIR` - Log file directory (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("RPG_ROSTER") {
            config.roster = parse_roster(&raw);
        }
        if let Some(show) = read_env_bool("RPG_SHOW_ABILITIES") {
            config.show_abilities = show;
        }
        config.log_dir = Self::log_dir_from_env();

        config
    }

    /// Reads `RPG_LOG_DIR` alone, so logging can start before the rest of
    /// the configuration is parsed.
    pub fn log_dir_from_env() -> Option<PathBuf> {
        env::var_os("RPG_LOG_DIR").map(PathBuf::from)
    }
}

/// Parses a roster list, skipping malformed entries.
///
/// Falls back to the default roster when nothing valid remains.
pub fn parse_roster(raw: &str) -> Vec<RosterEntry> {
    let roster: Vec<RosterEntry> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| {
            let entry = RosterEntry::parse(item);
            if entry.is_none() {
                tracing::warn!("Ignoring malformed roster entry '{}'", item);
            }
            entry
        })
        .collect();

    if roster.is_empty() {
        tracing::warn!("RPG_ROSTER has no valid entries, using the default roster");
        return ClientConfig::default_roster();
    }
    roster
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_entry_parsing() {
        assert_eq!(
            RosterEntry::parse(" mage : ranger "),
            Some(RosterEntry::new("mage", "ranger"))
        );
        assert_eq!(RosterEntry::parse("mage"), None);
        assert_eq!(RosterEntry::parse(":ranger"), None);
        assert_eq!(RosterEntry::parse("mage:"), None);
    }

    #[test]
    fn roster_skips_malformed_entries() {
        let roster = parse_roster("warrior:magic, bogus, ,archer:medieval");
        assert_eq!(
            roster,
            vec![
                RosterEntry::new("warrior", "magic"),
                RosterEntry::new("archer", "medieval"),
            ]
        );
    }

    #[test]
    fn empty_roster_falls_back_to_default() {
        assert_eq!(parse_roster(""), ClientConfig::default_roster());
        assert_eq!(parse_roster("nonsense"), ClientConfig::default_roster());
    }

    #[test]
    fn bool_parsing() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
