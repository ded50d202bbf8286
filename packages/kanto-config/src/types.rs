use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub upstream: Upstream,
	pub acquire: Acquire,
	#[serde(default)]
	pub query: Query,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Upstream {
	pub api_base: String,
	#[serde(default = "default_creature_path")]
	pub creature_path: String,
	#[serde(default = "default_species_path")]
	pub species_path: String,
	pub timeout_ms: u64,
	/// Language tag used to select the descriptive flavor-text entry.
	#[serde(default = "default_language")]
	pub language: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Acquire {
	#[serde(default = "default_total")]
	pub total: u32,
	#[serde(default = "default_batch_size")]
	pub batch_size: u32,
	#[serde(default = "default_chunk_delay_ms")]
	pub chunk_delay_ms: u64,
	/// Comparison mode: one lookup pair at a time, no inter-chunk delay.
	#[serde(default)]
	pub sequential: bool,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Query {
	pub debounce_ms: u64,
}
impl Default for Query {
	fn default() -> Self {
		Self { debounce_ms: default_debounce_ms() }
	}
}

fn default_creature_path() -> String {
	"/pokemon".to_string()
}

fn default_species_path() -> String {
	"/pokemon-species".to_string()
}

fn default_language() -> String {
	"en".to_string()
}

fn default_total() -> u32 {
	151
}

fn default_batch_size() -> u32 {
	10
}

fn default_chunk_delay_ms() -> u64 {
	100
}

fn default_debounce_ms() -> u64 {
	300
}
