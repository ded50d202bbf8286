use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One normalized creature. Immutable once built; only the containing
/// collection's membership and ordering change during acquisition.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Record {
	pub id: u32,
	pub name: String,
	/// 1-2 entries; source order is preserved for display.
	pub types: Vec<String>,
	pub height_m: f64,
	pub weight_kg: f64,
	pub abilities: Vec<String>,
	pub stats: BTreeMap<String, i64>,
	/// Sum of `stats` at normalization time; never recomputed afterward.
	pub total: Option<i64>,
	pub artwork_url: Option<String>,
	pub description: String,
}
impl Record {
	pub fn has_tag(&self, tag: &str) -> bool {
		self.types.iter().any(|value| value == tag)
	}
}
