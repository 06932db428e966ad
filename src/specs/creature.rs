// src/specs/creature.rs
//! Field extractors for one creature page.
//!
//! Each field-group has a pure `parse_*` over the located text and an `extract_*`
//! that locates the text in a [`CreatureDocument`] first. Extractors are independent
//! and hold no state; calling one twice on the same document gives the same answer.
//!
//! Page shape (dandwiki 5e creature template):
//! ```text
//! <span class="mw-headline">Giant Eel</span>
//! <table> … <i>Large beast, unaligned</i> …
//!   <b><a href=".../Armor_Class_...">Armor Class</a></b> 13 (natural armour)<br>
//!   <b><a href=".../Hit_Points_...">Hit Points</a></b> 45 (6d10 + 12)<br>
//!   <b><a href=".../Movement_...">Speed</a></b> 10 ft., swim 60 ft.
//!   <table><tr><th><a href=".../Strength_...">STR</a></th>…</tr>
//!          <tr><td>19 (+4)</td>…</tr></table>
//! ```

use std::sync::LazyLock;

use scraper::Selector;

use crate::core::html::{locate, Anchor, CreatureDocument, Hop, LABEL_VALUE, ROW_BELOW};
use crate::core::sanitize::{blank_enclosed, ltrim_set, rtrim_set};
use crate::error::{ExtractError, Field};
use crate::record::{AbilityScores, ArmorClass, Descriptors, HitPoints, Speeds};

fn builtin(field: Field, href: &str, path: &'static [Hop]) -> Anchor {
    Anchor::new(field, href, path).expect("built-in anchor pattern")
}

pub static ARMOR_CLASS: LazyLock<Anchor> =
    LazyLock::new(|| builtin(Field::ArmorClass, "Armor_Class", LABEL_VALUE));
pub static HIT_POINTS: LazyLock<Anchor> =
    LazyLock::new(|| builtin(Field::HitPoints, "Hit_Points", LABEL_VALUE));
pub static MOVEMENT: LazyLock<Anchor> =
    LazyLock::new(|| builtin(Field::Speed, "Movement", LABEL_VALUE));
pub static STRENGTH: LazyLock<Anchor> =
    LazyLock::new(|| builtin(Field::Abilities, "Strength", ROW_BELOW));

static HEADLINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.mw-headline").expect("static selector"));
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("static selector"));
static ITALIC: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("i").expect("static selector"));

const NATURAL_ARMOUR: &str = "natural armour"; // site spelling
const UNIT_SUFFIX: &str = " ft.\n";

fn number<T: std::str::FromStr>(field: Field, token: &str) -> Result<T, ExtractError> {
    token.trim().parse().map_err(|_| ExtractError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

/* ---------------- Name ---------------- */

/// Text of the first headline span, as-is.
pub fn extract_name(doc: &CreatureDocument) -> Result<String, ExtractError> {
    doc.first(&HEADLINE)
        .map(|span| span.text().collect())
        .ok_or(ExtractError::FieldNotFound { field: Field::Name })
}

/* ---------------- Size / type / alignment ---------------- */

/// "Large beast, unaligned" → ("Large", "beast", "unaligned").
/// Multi-word sizes or types ("Medium humanoid (elf), chaotic good") are rejected.
pub fn parse_descriptors(text: &str) -> Result<Descriptors, ExtractError> {
    let malformed = || ExtractError::MalformedDescriptor { text: text.to_string() };

    let parts: Vec<&str> = text.trim().split(' ').collect();
    let [size, body_type, alignment] = parts[..] else {
        return Err(malformed());
    };
    if size.is_empty() || body_type.is_empty() || alignment.is_empty() {
        return Err(malformed());
    }

    Ok(Descriptors {
        size: s!(size),
        body_type: s!(body_type.trim_end_matches(',')),
        alignment: s!(alignment),
    })
}

/// First italic run of the first table.
pub fn extract_descriptors(doc: &CreatureDocument) -> Result<Descriptors, ExtractError> {
    let text: String = doc
        .first(&TABLE)
        .and_then(|table| table.select(&ITALIC).next())
        .map(|i| i.text().collect())
        .ok_or(ExtractError::FieldNotFound { field: Field::Descriptors })?;
    parse_descriptors(&text)
}

/* ---------------- Armor class ---------------- */

/// "15 (natural armour)" → (15, true); "17" → (17, false).
pub fn parse_armor_class(text: &str) -> Result<ArmorClass, ExtractError> {
    let text = text.trim();
    if text.contains(NATURAL_ARMOUR) {
        let ac = text.split_once(' ').map_or(text, |(head, _)| head);
        Ok(ArmorClass { ac: number(Field::ArmorClass, ac)?, natural_armor: true })
    } else {
        Ok(ArmorClass { ac: number(Field::ArmorClass, text)?, natural_armor: false })
    }
}

pub fn extract_armor_class(doc: &CreatureDocument) -> Result<ArmorClass, ExtractError> {
    parse_armor_class(&locate(doc, &ARMOR_CLASS)?)
}

/* ---------------- Hit points ---------------- */

/// "136 (16d10 + 48)" → (136, 16, 10). Modifier terms after " + " are dropped.
pub fn parse_hit_points(text: &str) -> Result<HitPoints, ExtractError> {
    let malformed = || ExtractError::MalformedHitDiceExpression { text: text.to_string() };
    let int = |tok: &str| tok.trim().parse::<u32>().map_err(|_| malformed());

    let (hp, calc) = text.trim().split_once(' ').ok_or_else(malformed)?;
    let dice = calc
        .trim_matches(|c| c == '(' || c == ')')
        .split(" + ")
        .next()
        .unwrap_or_default();
    let (count, face) = dice.split_once('d').ok_or_else(malformed)?;

    Ok(HitPoints {
        hit_points: int(hp)?,
        hit_dice_count: int(count)?,
        hit_dice: int(face)?,
    })
}

pub fn extract_hit_points(doc: &CreatureDocument) -> Result<HitPoints, ExtractError> {
    parse_hit_points(&locate(doc, &HIT_POINTS)?)
}

/* ---------------- Speeds ---------------- */

/// How the entries after the ground speed are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeedMode {
    /// Same columns as the legacy monster table: every classified entry rewrites both
    /// fly and swim, an entry with neither keyword zeroes both, and an entry with
    /// both keywords cannot be split (it fails as `InvalidNumber`).
    #[default]
    Legacy,
    /// Each entry only sets the modes it names; "swim 20 ft. or fly 40 ft." yields
    /// both numbers; climb/burrow entries are ignored.
    Corrected,
}

/// "30 ft., swim 40 ft." → ground 30, fly 0, swim 40.
pub fn parse_speeds(text: &str, mode: SpeedMode) -> Result<Speeds, ExtractError> {
    let mut entries = text.trim().split(',');
    let ground = rtrim_set(entries.next().unwrap_or_default(), UNIT_SUFFIX);

    // Only the first two extra modes are looked at.
    let extra = entries.take(2);

    match mode {
        SpeedMode::Legacy => legacy_speeds(ground, extra),
        SpeedMode::Corrected => {
            let mut speeds = Speeds {
                ground_ft: number(Field::Speed, ground)?,
                ..Speeds::default()
            };
            for entry in extra {
                corrected_entry(entry, &mut speeds)?;
            }
            Ok(speeds)
        }
    }
}

/// Entry text with the keyword's characters stripped from the left and the unit
/// from the right.
fn strip_mode<'a>(entry: &'a str, keyword: &str) -> &'a str {
    rtrim_set(ltrim_set(entry, keyword), UNIT_SUFFIX)
}

/// Fly and swim stay text until every entry has been read, so a later entry can
/// replace one that would not parse.
fn legacy_speeds<'a>(
    ground: &str,
    entries: impl Iterator<Item = &'a str>,
) -> Result<Speeds, ExtractError> {
    let (mut fly, mut swim) = ("0", "0");

    for entry in entries {
        (fly, swim) = match (entry.contains("fly"), entry.contains("swim")) {
            (false, true) => ("0", strip_mode(entry, "swim ")),
            (true, false) => (strip_mode(entry, "fly "), "0"),
            // Both strips run over the same text; neither can isolate its number.
            (true, true) => (strip_mode(entry, "fly "), strip_mode(entry, "swim ")),
            (false, false) => ("0", "0"),
        };
    }

    Ok(Speeds {
        ground_ft: number(Field::Speed, ground)?,
        fly_ft: number(Field::Speed, fly)?,
        swim_ft: number(Field::Speed, swim)?,
    })
}

fn corrected_entry(entry: &str, speeds: &mut Speeds) -> Result<(), ExtractError> {
    if let Some(ft) = speed_after(entry, "fly")? {
        speeds.fly_ft = ft;
    }
    if let Some(ft) = speed_after(entry, "swim")? {
        speeds.swim_ft = ft;
    }
    Ok(())
}

/// Number following the `keyword` token, if the keyword is present.
fn speed_after(entry: &str, keyword: &str) -> Result<Option<u32>, ExtractError> {
    let mut tokens = entry.split_whitespace();
    if tokens.by_ref().find(|t| *t == keyword).is_none() {
        return Ok(None);
    }
    let token = tokens.next().unwrap_or_default();
    number(Field::Speed, token).map(Some)
}

pub fn extract_speeds(doc: &CreatureDocument, mode: SpeedMode) -> Result<Speeds, ExtractError> {
    parse_speeds(&locate(doc, &MOVEMENT)?, mode)
}

/* ---------------- Ability scores ---------------- */

/// "19 (+4)\n13 (+1)\n…" → six scores in STR, DEX, CON, INT, WIS, CHA order.
/// The parenthesised modifiers in the text are discarded and recomputed.
pub fn parse_abilities(text: &str) -> Result<AbilityScores, ExtractError> {
    let cleaned = blank_enclosed(text, '(', ')');
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(ExtractError::MalformedAbilityBlock {
            found: tokens.len(),
            text: text.to_string(),
        });
    }

    let mut scores = [0i32; 6];
    for (slot, token) in scores.iter_mut().zip(&tokens) {
        *slot = number(Field::Abilities, token)?;
    }
    Ok(AbilityScores::new(scores))
}

pub fn extract_abilities(doc: &CreatureDocument) -> Result<AbilityScores, ExtractError> {
    parse_abilities(&locate(doc, &STRENGTH)?)
}
