// tests/extractors.rs
use monster_scrape::core::html::CreatureDocument;
use monster_scrape::record::Ability;
use monster_scrape::specs::creature::{self, SpeedMode};
use monster_scrape::{assemble, ExtractError, ExtractOptions, Field};

fn fixture(name: &str) -> CreatureDocument {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let html = std::fs::read_to_string(&path).unwrap();
    CreatureDocument::parse(&html)
}

#[test]
fn giant_eel_stat_block() {
    let doc = fixture("giant_eel.html");

    assert_eq!(creature::extract_name(&doc).unwrap(), "Giant Eel");

    let d = creature::extract_descriptors(&doc).unwrap();
    assert_eq!((d.size.as_str(), d.body_type.as_str(), d.alignment.as_str()),
               ("Large", "beast", "unaligned"));

    let ac = creature::extract_armor_class(&doc).unwrap();
    assert_eq!((ac.ac, ac.natural_armor), (13, true));

    let hp = creature::extract_hit_points(&doc).unwrap();
    assert_eq!((hp.hit_points, hp.hit_dice_count, hp.hit_dice), (45, 6, 10));

    let sp = creature::extract_speeds(&doc, SpeedMode::Legacy).unwrap();
    assert_eq!((sp.ground_ft, sp.fly_ft, sp.swim_ft), (10, 0, 60));

    let ab = creature::extract_abilities(&doc).unwrap();
    assert_eq!(ab.scores(), [19, 13, 14, 1, 10, 3]);
    assert_eq!(ab.modifiers(), [4, 1, 2, -5, 0, -4]);
}

#[test]
fn plain_armor_and_fly_speed() {
    let doc = fixture("hill_pegasus.html");

    let ac = creature::extract_armor_class(&doc).unwrap();
    assert_eq!((ac.ac, ac.natural_armor), (12, false));

    for mode in [SpeedMode::Legacy, SpeedMode::Corrected] {
        let sp = creature::extract_speeds(&doc, mode).unwrap();
        assert_eq!((sp.ground_ft, sp.fly_ft, sp.swim_ft), (60, 90, 0));
    }

    let ab = creature::extract_abilities(&doc).unwrap();
    assert_eq!(ab.modifier(Ability::Constitution), 3);
    assert_eq!(ab.modifier(Ability::Charisma), 1);
}

#[test]
fn extraction_is_repeatable() {
    let doc = fixture("giant_eel.html");
    let opts = ExtractOptions::default();

    let first = assemble(&doc, 1, &opts);
    let second = assemble(&doc, 1, &opts);
    assert!(first.is_complete());
    assert_eq!(first.record, second.record);
}

#[test]
fn unlinked_armor_class_is_not_found() {
    let doc = fixture("no_armor_class.html");

    let err = creature::extract_armor_class(&doc).unwrap_err();
    assert_eq!(err, ExtractError::FieldNotFound { field: Field::ArmorClass });

    // The other groups still read.
    let a = assemble(&doc, 9, &ExtractOptions::default());
    assert_eq!(a.failures, vec![err]);
    assert!(a.record.armor.is_none());
    assert_eq!(a.record.monster_name.as_deref(), Some("Shade"));
    assert_eq!(a.record.abilities.unwrap().scores(), [6, 14, 10, 8, 10, 10]);
    assert_eq!(a.record.vitality.unwrap().hit_dice, 8);
}
