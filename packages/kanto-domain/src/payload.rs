//! Wire shapes of the two upstream resources, as served per identifier.
//!
//! Only the fields the normalizer consumes are modeled; everything else the
//! upstream sends is ignored on deserialization.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreaturePayload {
	pub id: u32,
	pub name: String,
	/// Decimetres.
	pub height: u32,
	/// Hectograms.
	pub weight: u32,
	pub types: Vec<TypeSlot>,
	pub abilities: Vec<AbilitySlot>,
	pub stats: Vec<StatSlot>,
	pub sprites: Sprites,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TypeSlot {
	#[serde(rename = "type")]
	pub kind: Named,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AbilitySlot {
	pub ability: Named,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatSlot {
	pub base_stat: i64,
	pub stat: Named,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Sprites {
	pub front_default: Option<String>,
	#[serde(default)]
	pub other: Option<OtherSprites>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OtherSprites {
	#[serde(rename = "official-artwork")]
	pub official_artwork: Option<Artwork>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Artwork {
	pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Named {
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SpeciesPayload {
	pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FlavorTextEntry {
	pub flavor_text: String,
	pub language: Named,
}
