use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use kanto_domain::{CreaturePayload, SpeciesPayload};

use crate::{Error, Result};

/// HTTP client for the two upstream resources keyed by identifier.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
	client: Client,
	cfg: kanto_config::Upstream,
}
impl UpstreamClient {
	pub fn new(cfg: &kanto_config::Upstream) -> Result<Self> {
		let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self { client, cfg: cfg.clone() })
	}

	pub async fn fetch_creature(&self, id: u32) -> Result<CreaturePayload> {
		self.get_json(&self.cfg.creature_path, id).await
	}

	pub async fn fetch_species(&self, id: u32) -> Result<SpeciesPayload> {
		self.get_json(&self.cfg.species_path, id).await
	}

	/// Both payloads for one identifier, fetched concurrently. Either side
	/// failing fails the pair; the caller decides whether that is isolated.
	pub async fn fetch_pair(&self, id: u32) -> Result<(CreaturePayload, SpeciesPayload)> {
		tokio::try_join!(self.fetch_creature(id), self.fetch_species(id))
	}

	async fn get_json<T>(&self, path: &str, id: u32) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = format!("{}{path}/{id}", self.cfg.api_base);
		let res = self.client.get(url).send().await?;
		let status = res.status();

		if !status.is_success() {
			return Err(Error::Status { id, status: status.as_u16() });
		}

		Ok(res.json().await?)
	}
}
