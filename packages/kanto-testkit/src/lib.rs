//! Disposable mock of the upstream REST service for acceptance tests.
//!
//! Serves the primary and descriptive resources for identifiers
//! `1..=max_id` on a loopback port, with a scriptable set of identifiers
//! that answer 500 so per-identifier failure isolation can be exercised.

mod error;

pub use error::{Error, Result};

use std::{collections::HashSet, net::SocketAddr, sync::Arc};

use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use tokio::{net::TcpListener, task::JoinHandle};

use kanto_domain::payload::{
	AbilitySlot, Artwork, CreaturePayload, FlavorTextEntry, Named, OtherSprites, SpeciesPayload,
	Sprites, StatSlot, TypeSlot,
};

const TYPE_POOL: [&str; 6] = ["grass", "fire", "water", "electric", "psychic", "rock"];

#[derive(Clone, Debug)]
pub struct MockSpec {
	pub max_id: u32,
	pub failing: HashSet<u32>,
}
impl MockSpec {
	pub fn new(max_id: u32) -> Self {
		Self { max_id, failing: HashSet::new() }
	}

	pub fn with_failing<I>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = u32>,
	{
		self.failing.extend(ids);

		self
	}
}

pub struct MockUpstream {
	addr: SocketAddr,
	handle: JoinHandle<()>,
}
impl MockUpstream {
	pub async fn start(spec: MockSpec) -> Result<Self> {
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let app = router(spec);
		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, app).await {
				eprintln!("Mock upstream stopped: {err}.");
			}
		});

		Ok(Self { addr, handle })
	}

	pub fn api_base(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn upstream_config(&self, timeout_ms: u64) -> kanto_config::Upstream {
		kanto_config::Upstream {
			api_base: self.api_base(),
			creature_path: "/pokemon".to_string(),
			species_path: "/pokemon-species".to_string(),
			timeout_ms,
			language: "en".to_string(),
		}
	}
}
impl Drop for MockUpstream {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

fn router(spec: MockSpec) -> Router {
	Router::new()
		.route("/pokemon/{id}", get(creature))
		.route("/pokemon-species/{id}", get(species))
		.with_state(Arc::new(spec))
}

async fn creature(State(spec): State<Arc<MockSpec>>, Path(id): Path<u32>) -> Response {
	match lookup(&spec, id) {
		Ok(()) => Json(creature_payload(id)).into_response(),
		Err(status) => status.into_response(),
	}
}

async fn species(State(spec): State<Arc<MockSpec>>, Path(id): Path<u32>) -> Response {
	match lookup(&spec, id) {
		Ok(()) => Json(species_payload(id)).into_response(),
		Err(status) => status.into_response(),
	}
}

fn lookup(spec: &MockSpec, id: u32) -> Result<(), StatusCode> {
	if spec.failing.contains(&id) {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	}
	if id == 0 || id > spec.max_id {
		return Err(StatusCode::NOT_FOUND);
	}

	Ok(())
}

/// Deterministic primary payload for one identifier.
pub fn creature_payload(id: u32) -> CreaturePayload {
	let index = id as usize % TYPE_POOL.len();
	let mut types = vec![named_slot(TYPE_POOL[index])];

	// Every third creature carries a second tag.
	if id % 3 == 0 {
		types.push(named_slot(TYPE_POOL[(index + 1) % TYPE_POOL.len()]));
	}

	let base = i64::from(id);

	CreaturePayload {
		id,
		name: format!("creature-{id:03}"),
		height: 3 + id % 20,
		weight: 50 + id * 10 % 900,
		types,
		abilities: vec![AbilitySlot { ability: Named { name: format!("ability-{}", id % 5) } }],
		stats: vec![
			stat_slot("hp", 30 + base % 50),
			stat_slot("attack", 40 + base % 60),
			stat_slot("defense", 35 + base % 55),
			stat_slot("special-attack", 45 + base % 45),
			stat_slot("special-defense", 45 + base % 40),
			stat_slot("speed", 50 + base % 70),
		],
		sprites: Sprites {
			front_default: Some(format!("https://mock.invalid/sprite/{id}.png")),
			other: Some(OtherSprites {
				official_artwork: Some(Artwork {
					front_default: Some(format!("https://mock.invalid/art/{id}.png")),
				}),
			}),
		},
	}
}

/// Deterministic descriptive payload for one identifier. The English entry
/// comes second and embeds the control characters the normalizer cleans.
pub fn species_payload(id: u32) -> SpeciesPayload {
	SpeciesPayload {
		flavor_text_entries: vec![
			FlavorTextEntry {
				flavor_text: format!("Testwesen Nummer {id}."),
				language: Named { name: "de".to_string() },
			},
			FlavorTextEntry {
				flavor_text: format!("Mock creature number {id}.\nIt lives in\u{c}test networks."),
				language: Named { name: "en".to_string() },
			},
		],
	}
}

fn named_slot(name: &str) -> TypeSlot {
	TypeSlot { kind: Named { name: name.to_string() } }
}

fn stat_slot(name: &str, value: i64) -> StatSlot {
	StatSlot { base_stat: value, stat: Named { name: name.to_string() } }
}
