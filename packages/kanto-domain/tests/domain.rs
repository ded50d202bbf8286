use kanto_domain::{CreaturePayload, FALLBACK_DESCRIPTION, SpeciesPayload, normalize};

fn creature_json() -> serde_json::Value {
	serde_json::json!({
		"id": 7,
		"name": "squirtle",
		"height": 5,
		"weight": 90,
		"types": [
			{ "slot": 1, "type": { "name": "water", "url": "https://example/type/11" } }
		],
		"abilities": [
			{ "ability": { "name": "torrent" }, "is_hidden": false },
			{ "ability": { "name": "rain-dish" }, "is_hidden": true }
		],
		"stats": [
			{ "base_stat": 44, "effort": 0, "stat": { "name": "hp" } },
			{ "base_stat": 48, "effort": 0, "stat": { "name": "attack" } },
			{ "base_stat": 65, "effort": 1, "stat": { "name": "defense" } },
			{ "base_stat": 50, "effort": 0, "stat": { "name": "special-attack" } },
			{ "base_stat": 64, "effort": 0, "stat": { "name": "special-defense" } },
			{ "base_stat": 43, "effort": 0, "stat": { "name": "speed" } }
		],
		"sprites": {
			"front_default": "https://example/sprite/7.png",
			"back_default": "https://example/sprite/back/7.png",
			"other": {
				"official-artwork": { "front_default": "https://example/art/7.png" },
				"dream_world": { "front_default": null }
			}
		}
	})
}

fn species_json() -> serde_json::Value {
	serde_json::json!({
		"id": 7,
		"flavor_text_entries": [
			{
				"flavor_text": "After birth, its\nback swells and\u{c}hardens into a shell.",
				"language": { "name": "en", "url": "https://example/language/9" },
				"version": { "name": "red" }
			}
		]
	})
}

#[test]
fn normalizes_parsed_upstream_payload_pair() {
	let creature: CreaturePayload =
		serde_json::from_value(creature_json()).expect("Failed to parse creature fixture.");
	let species: SpeciesPayload =
		serde_json::from_value(species_json()).expect("Failed to parse species fixture.");
	let record = normalize(&creature, &species, "en");

	assert_eq!(record.id, 7);
	assert_eq!(record.name, "squirtle");
	assert_eq!(record.types, vec!["water".to_string()]);
	assert_eq!(record.height_m, 0.5);
	assert_eq!(record.weight_kg, 9.0);
	assert_eq!(record.abilities, vec!["torrent".to_string(), "rain-dish".to_string()]);
	assert_eq!(record.total, Some(314));
	assert_eq!(record.artwork_url.as_deref(), Some("https://example/art/7.png"));
	assert_eq!(record.description, "After birth, its back swells and hardens into a shell.");
}

#[test]
fn missing_language_entry_yields_sentinel_not_error() {
	let creature: CreaturePayload =
		serde_json::from_value(creature_json()).expect("Failed to parse creature fixture.");
	let species: SpeciesPayload = serde_json::from_value(serde_json::json!({
		"flavor_text_entries": []
	}))
	.expect("Failed to parse species fixture.");
	let record = normalize(&creature, &species, "en");

	assert_eq!(record.description, FALLBACK_DESCRIPTION);
}
