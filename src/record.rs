// src/record.rs
//! One creature's row: typed field-groups plus the flat column schema they render to.
//!
//! Extracted groups are `Option`s. `None` means "the extractor failed and the run kept
//! the partial record"; a complete record has every group set. The reserved groups
//! (senses, resistances, conditions, ...) are never populated yet and stay `None`,
//! which renders as an empty cell / JSON `null` rather than a made-up zero.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptors {
    pub size: String,
    pub body_type: String,
    pub alignment: String,
}

/// AC and the natural-armour flag always travel together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmorClass {
    pub ac: i32,
    pub natural_armor: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitPoints {
    pub hit_points: u32,
    pub hit_dice_count: u32,
    /// Die face count (4, 6, 8, 10, 12, 20, 100). Not checked against `hit_points`.
    pub hit_dice: u32,
}

/// Feet per round; 0 means the creature has no such movement mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Speeds {
    pub ground_ft: u32,
    pub fly_ft: u32,
    pub swim_ft: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Stat-block order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn index(self) -> usize { self as usize }
}

/// `floor(score / 2) - 5`.
pub fn ability_modifier(score: i32) -> i32 {
    score.div_euclid(2) - 5
}

/// The six scores in stat-block order. Modifiers are always derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityScores {
    scores: [i32; 6],
}

impl AbilityScores {
    pub fn new(scores: [i32; 6]) -> Self { Self { scores } }

    pub fn score(&self, ability: Ability) -> i32 { self.scores[ability.index()] }

    pub fn modifier(&self, ability: Ability) -> i32 { ability_modifier(self.score(ability)) }

    pub fn scores(&self) -> [i32; 6] { self.scores }

    pub fn modifiers(&self) -> [i32; 6] { self.scores.map(ability_modifier) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageType {
    Acid, Bludgeoning, Cold, Fire, Force, Lightning,
    Necrotic, Piercing, Poison, Psychic, Radiant, Slashing,
}

impl DamageType {
    pub const COUNT: usize = 12;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Blinded, Charmed, Deafened, Exhaustion, Frightened, Grappled, Incapacitated,
    Invisible, Paralyzed, Petrified, Poisoned, Prone, Restrained, Stunned, Unconscious,
}

impl Condition {
    pub const COUNT: usize = 15;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Senses {
    pub blindsight: Option<u32>,
    pub darkvision: Option<u32>,
    pub tremorsense: Option<u32>,
    pub truesight: Option<u32>,
}

/// Columns that exist in the table but have no extractor yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservedFields {
    pub challenge_rating: Option<String>,
    pub passive_perception: Option<u32>,
    pub senses: Senses,
    pub damage: [Option<bool>; DamageType::COUNT],
    pub conditions: [Option<bool>; Condition::COUNT],
}

impl ReservedFields {
    pub fn damage(&self, kind: DamageType) -> Option<bool> { self.damage[kind as usize] }
    pub fn condition(&self, cond: Condition) -> Option<bool> { self.conditions[cond as usize] }
}

/// One table cell.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Bool(bool),
    Text(String),
    Null,
}

impl Cell {
    /// Delimited-text form; `Null` is an empty field.
    pub fn render(&self) -> String {
        match self {
            Cell::Int(n)  => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::Text(t) => t.clone(),
            Cell::Null    => s!(),
        }
    }
}

fn or_null<const N: usize>(cells: Option<[Cell; N]>) -> [Cell; N] {
    cells.unwrap_or_else(|| std::array::from_fn(|_| Cell::Null))
}

fn opt_int(v: Option<u32>) -> Cell {
    v.map_or(Cell::Null, |n| Cell::Int(n.into()))
}

fn opt_bool(v: Option<bool>) -> Cell {
    v.map_or(Cell::Null, Cell::Bool)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureRecord {
    pub monster_id: u32,
    pub monster_name: Option<String>,
    pub descriptors: Option<Descriptors>,
    pub armor: Option<ArmorClass>,
    pub vitality: Option<HitPoints>,
    pub speeds: Option<Speeds>,
    pub abilities: Option<AbilityScores>,
    pub reserved: ReservedFields,
}

impl CreatureRecord {
    /// Column names, in table order.
    pub const COLUMNS: [&'static str; 58] = [
        "monster_id", "monster_name",
        "size", "body_type", "alignment",
        "ac", "natural_armor",
        "hit_points", "hit_dice_count", "hit_dice",
        "ground_speed_ft", "fly_speed_ft", "swim_speed_ft",
        "strength_score", "dexterity_score", "constitution_score",
        "intelligence_score", "wisdom_score", "charisma_score",
        "strength_modifier", "dexterity_modifier", "constitution_modifier",
        "intelligence_modifier", "wisdom_modifier", "charisma_modifier",
        "challenge_rating", "passive_perception",
        "blindsight", "darkvision", "tremorsense", "truesight",
        "acid_damage", "bludgeoning_damage", "cold_damage", "fire_damage",
        "force_damage", "lightning_damage", "necrotic_damage", "piercing_damage",
        "poison_damage", "psychic_damage", "radiant_damage", "slashing_damage",
        "blinded", "charmed", "deafened", "exhaustion", "frightened", "grappled",
        "incapacitated", "invisible", "paralyzed", "petrified", "poisoned", "prone",
        "restrained", "stunned", "unconscious",
    ];

    /// A record with only the id set.
    pub fn new(monster_id: u32) -> Self {
        Self {
            monster_id,
            monster_name: None,
            descriptors: None,
            armor: None,
            vitality: None,
            speeds: None,
            abilities: None,
            reserved: ReservedFields::default(),
        }
    }

    /// Every extracted group is present.
    pub fn is_complete(&self) -> bool {
        self.monster_name.is_some()
            && self.descriptors.is_some()
            && self.armor.is_some()
            && self.vitality.is_some()
            && self.speeds.is_some()
            && self.abilities.is_some()
    }

    /// One cell per entry of [`Self::COLUMNS`].
    pub fn cells(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(Self::COLUMNS.len());

        out.push(Cell::Int(self.monster_id.into()));
        out.push(self.monster_name.clone().map_or(Cell::Null, Cell::Text));

        out.extend(or_null(self.descriptors.as_ref().map(|d| [
            Cell::Text(d.size.clone()),
            Cell::Text(d.body_type.clone()),
            Cell::Text(d.alignment.clone()),
        ])));
        out.extend(or_null(self.armor.map(|a| [
            Cell::Int(a.ac.into()),
            Cell::Bool(a.natural_armor),
        ])));
        out.extend(or_null(self.vitality.map(|h| [
            Cell::Int(h.hit_points.into()),
            Cell::Int(h.hit_dice_count.into()),
            Cell::Int(h.hit_dice.into()),
        ])));
        out.extend(or_null(self.speeds.map(|s| [
            Cell::Int(s.ground_ft.into()),
            Cell::Int(s.fly_ft.into()),
            Cell::Int(s.swim_ft.into()),
        ])));
        out.extend(or_null(self.abilities.map(|a| a.scores().map(|n| Cell::Int(n.into())))));
        out.extend(or_null(self.abilities.map(|a| a.modifiers().map(|n| Cell::Int(n.into())))));

        let r = &self.reserved;
        out.push(r.challenge_rating.clone().map_or(Cell::Null, Cell::Text));
        out.push(opt_int(r.passive_perception));
        out.push(opt_int(r.senses.blindsight));
        out.push(opt_int(r.senses.darkvision));
        out.push(opt_int(r.senses.tremorsense));
        out.push(opt_int(r.senses.truesight));
        out.extend(r.damage.iter().copied().map(opt_bool));
        out.extend(r.conditions.iter().copied().map(opt_bool));

        debug_assert_eq!(out.len(), Self::COLUMNS.len());
        out
    }

    /// Delimited-text row.
    pub fn to_row(&self) -> Vec<String> {
        self.cells().iter().map(Cell::render).collect()
    }
}

/// Serializes as one flat object keyed by column name.
impl Serialize for CreatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cells = self.cells();
        let mut map = serializer.serialize_map(Some(cells.len()))?;
        for (name, cell) in Self::COLUMNS.iter().zip(&cells) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn giant_eel() -> CreatureRecord {
        CreatureRecord {
            monster_name: Some(s!("Giant Eel")),
            descriptors: Some(Descriptors {
                size: s!("Large"),
                body_type: s!("beast"),
                alignment: s!("unaligned"),
            }),
            armor: Some(ArmorClass { ac: 13, natural_armor: true }),
            vitality: Some(HitPoints { hit_points: 45, hit_dice_count: 6, hit_dice: 10 }),
            speeds: Some(Speeds { ground_ft: 10, fly_ft: 0, swim_ft: 60 }),
            abilities: Some(AbilityScores::new([19, 13, 14, 1, 10, 3])),
            ..CreatureRecord::new(7)
        }
    }

    #[test]
    fn modifier_boundaries() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(3), -4);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn modifiers_follow_scores() {
        let a = AbilityScores::new([1, 9, 10, 17, 24, 30]);
        assert_eq!(a.modifiers(), [-5, -1, 0, 3, 7, 10]);
        assert_eq!(a.modifier(Ability::Wisdom), 7);
        assert_eq!(a.score(Ability::Charisma), 30);
    }

    #[test]
    fn abilities_index_in_stat_block_order() {
        let a = AbilityScores::new([1, 2, 3, 4, 5, 6]);
        for (i, ability) in Ability::ALL.into_iter().enumerate() {
            assert_eq!(ability.index(), i);
            assert_eq!(a.score(ability), i as i32 + 1);
        }
    }

    #[test]
    fn reserved_fields_start_unknown() {
        let r = CreatureRecord::new(1).reserved;
        assert_eq!(r.damage(DamageType::Fire), None);
        assert_eq!(r.condition(Condition::Exhaustion), None);

        let mut r = r;
        r.damage[DamageType::Slashing as usize] = Some(true);
        assert_eq!(r.damage(DamageType::Slashing), Some(true));
        assert_eq!(r.damage(DamageType::Acid), None);
    }

    #[test]
    fn one_cell_per_column() {
        assert_eq!(giant_eel().cells().len(), CreatureRecord::COLUMNS.len());
        assert_eq!(CreatureRecord::new(1).cells().len(), CreatureRecord::COLUMNS.len());
    }

    #[test]
    fn row_renders_values_and_blanks() {
        let row = giant_eel().to_row();
        assert_eq!(&row[..7], &["7", "Giant Eel", "Large", "beast", "unaligned", "13", "true"]);
        assert_eq!(&row[13..19], &["19", "13", "14", "1", "10", "3"]);
        assert_eq!(&row[19..25], &["4", "1", "2", "-5", "0", "-4"]);
        assert!(row[25..].iter().all(String::is_empty));
    }

    #[test]
    fn missing_group_renders_as_blanks() {
        let mut rec = giant_eel();
        rec.vitality = None;
        assert!(!rec.is_complete());
        let row = rec.to_row();
        assert_eq!(&row[7..10], &["", "", ""]);
        assert_eq!(row[10], "10");
    }

    #[test]
    fn json_is_flat_with_nulls() {
        let v = serde_json::to_value(giant_eel()).unwrap();
        assert_eq!(v["monster_name"], "Giant Eel");
        assert_eq!(v["natural_armor"], true);
        assert_eq!(v["swim_speed_ft"], 60);
        assert_eq!(v["strength_modifier"], 4);
        assert!(v["darkvision"].is_null());
        assert!(v["unconscious"].is_null());
        assert_eq!(v.as_object().unwrap().len(), CreatureRecord::COLUMNS.len());
    }
}
