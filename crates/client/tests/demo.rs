use game_core::{Attributes, Character, CharacterBase, CharacterFactory, FactoryRegistry, Theme};
use rpg_client::{ClientConfig, Demo, FOOTER, HEADER, RosterEntry};

#[test]
fn default_demo_transcript() {
    let demo = Demo::builder().build().expect("default roster is valid");
    let mut out: Vec<String> = Vec::new();
    let party = demo.run(&mut out).expect("demo runs");

    let expected = vec![
        HEADER,
        "=== Warrior ===",
        "Class: Warrior",
        "Health: 150",
        "Mana: 20",
        "Strength: 40",
        "Intelligence: 10",
        "Warrior uses Whirlwind Strike!",
        "Warrior equipped with Iron Sword and Plate Armor",
        "Weapon: Iron Sword (Damage: 25)",
        "Armor: Plate Armor (Defense: 30)",
        "",
        "=== Mage ===",
        "Class: Mage",
        "Health: 80",
        "Mana: 100",
        "Strength: 10",
        "Intelligence: 40",
        "Mage casts Fireball!",
        "Mage equipped with Wizard Staff and Enchanted Robe",
        "Weapon: Wizard Staff (Damage: 15)",
        "Armor: Enchanted Robe (Defense: 10)",
        "",
        "=== Archer ===",
        "Class: Archer",
        "Health: 100",
        "Mana: 40",
        "Strength: 25",
        "Intelligence: 20",
        "Archer uses Piercing Arrow!",
        "Archer equipped with Longbow and Leather Armor",
        "Weapon: Longbow (Damage: 20)",
        "Armor: Leather Armor (Defense: 20)",
        "",
        FOOTER,
    ];
    assert_eq!(out, expected);

    let themes: Vec<_> = party.iter().map(|c| c.loadout_theme()).collect();
    assert_eq!(
        themes,
        vec![Some(Theme::MEDIEVAL), Some(Theme::MAGIC), Some(Theme::RANGER)]
    );
}

#[test]
fn builder_applies_config_roster() {
    let config = ClientConfig {
        roster: vec![RosterEntry::new("archer", "magic")],
        show_abilities: false,
        log_dir: None,
    };
    let demo = Demo::builder().config(&config).build().expect("valid roster");

    assert_eq!(demo.roster(), &[RosterEntry::new("archer", "magic")]);
}

#[test]
fn default_roster_is_used_when_none_is_given() {
    let demo = Demo::builder().build().expect("valid");
    assert_eq!(demo.roster(), ClientConfig::default_roster().as_slice());
}

#[test]
fn transcript_is_deterministic() {
    let demo = Demo::builder().build().expect("valid");
    let mut first: Vec<String> = Vec::new();
    let mut second: Vec<String> = Vec::new();
    demo.run(&mut first).expect("demo runs");
    demo.run(&mut second).expect("demo runs");
    assert_eq!(first, second);
}

#[test]
fn abilities_can_be_hidden() {
    let demo = Demo::builder()
        .roster(vec![RosterEntry::new("mage", "medieval")])
        .show_abilities(false)
        .build()
        .expect("valid roster");
    let mut out: Vec<String> = Vec::new();
    let party = demo.run(&mut out).expect("demo runs");

    assert!(!out.iter().any(|line| line.contains("Fireball")));
    assert!(out.contains(&"Mage equipped with Iron Sword and Plate Armor".to_owned()));
    assert_eq!(party.len(), 1);
}

#[test]
fn unknown_roster_entries_fail_before_running() {
    let err = Demo::builder()
        .roster(vec![
            RosterEntry::new("warrior", "medieval"),
            RosterEntry::new("paladin", "magic"),
        ])
        .build()
        .err()
        .expect("paladin is not registered");

    let message = format!("{err:#}");
    assert!(message.contains("paladin:magic"), "{message}");
    assert!(message.contains("no character factory registered for class 'paladin'"));
}

#[test]
fn empty_roster_is_rejected() {
    assert!(Demo::builder().roster(Vec::new()).build().is_err());
}

#[derive(Debug)]
struct Paladin {
    base: CharacterBase,
}

impl Character for Paladin {
    fn base(&self) -> &CharacterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CharacterBase {
        &mut self.base
    }

    fn special_ability(&self) -> String {
        format!("{} calls down Holy Light!", self.name())
    }
}

struct PaladinFactory;

impl CharacterFactory for PaladinFactory {
    fn class_name(&self) -> &'static str {
        "Paladin"
    }

    fn create_character(&self) -> Box<dyn Character> {
        Box::new(Paladin {
            base: CharacterBase::new("Paladin", Attributes::new(130, 50, 35, 25)),
        })
    }
}

#[test]
fn custom_registry_extends_the_party() {
    let mut registry = FactoryRegistry::with_defaults();
    registry
        .register_character_factory(Box::new(PaladinFactory))
        .expect("paladin is new");

    let demo = Demo::builder()
        .registry(registry)
        .roster(vec![RosterEntry::new("Paladin", "Medieval")])
        .build()
        .expect("paladin is registered");
    let mut out: Vec<String> = Vec::new();
    demo.run(&mut out).expect("demo runs");

    assert_eq!(out[1], "=== Paladin ===");
    assert!(out.contains(&"Paladin calls down Holy Light!".to_owned()));
    assert!(out.contains(&"Paladin equipped with Iron Sword and Plate Armor".to_owned()));
}
