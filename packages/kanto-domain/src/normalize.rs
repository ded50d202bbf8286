use std::collections::BTreeMap;

use crate::{
	payload::{CreaturePayload, SpeciesPayload},
	record::Record,
};

pub const FALLBACK_DESCRIPTION: &str = "No description available.";

const UNIT_DIVISOR: f64 = 10.0;

/// Merge the two upstream payloads for one identifier into a [`Record`].
///
/// Pure and deterministic: no I/O, and fixed inputs always produce an
/// identical record. Malformed payloads are rejected at deserialization,
/// before this function runs.
pub fn normalize(creature: &CreaturePayload, species: &SpeciesPayload, language: &str) -> Record {
	let mut stats = BTreeMap::new();

	// Last-wins when the source repeats a stat name.
	for slot in &creature.stats {
		stats.insert(slot.stat.name.clone(), slot.base_stat);
	}

	let total = Some(stats.values().sum());

	Record {
		id: creature.id,
		name: creature.name.clone(),
		types: creature.types.iter().map(|slot| slot.kind.name.clone()).collect(),
		height_m: creature.height as f64 / UNIT_DIVISOR,
		weight_kg: creature.weight as f64 / UNIT_DIVISOR,
		abilities: creature.abilities.iter().map(|slot| slot.ability.name.clone()).collect(),
		stats,
		total,
		artwork_url: select_artwork(creature),
		description: select_description(species, language),
	}
}

fn select_artwork(creature: &CreaturePayload) -> Option<String> {
	creature
		.sprites
		.other
		.as_ref()
		.and_then(|other| other.official_artwork.as_ref())
		.and_then(|artwork| artwork.front_default.clone())
		.or_else(|| creature.sprites.front_default.clone())
}

fn select_description(species: &SpeciesPayload, language: &str) -> String {
	species
		.flavor_text_entries
		.iter()
		.find(|entry| entry.language.name == language)
		.map(|entry| clean_flavor_text(&entry.flavor_text))
		.unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

/// The upstream flavor text embeds layout control characters (newlines, form
/// feeds); each becomes a single space.
fn clean_flavor_text(raw: &str) -> String {
	raw.chars().map(|ch| if ch.is_control() { ' ' } else { ch }).collect()
}
