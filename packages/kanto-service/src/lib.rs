pub mod acquire;
pub mod debounce;
pub mod query;
pub mod time_serde;
pub mod view;

mod error;

use std::{future::Future, pin::Pin};

pub use acquire::{AcquireOptions, Acquisition, AcquisitionStatus, acquire, chunk_ids};
pub use debounce::QueryDebouncer;
pub use error::{Error, Result};
pub use query::{apply_filter, distinct_tags};
pub use view::DexView;

use kanto_domain::{CreaturePayload, SpeciesPayload};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of the two payloads for one identifier.
/// [`kanto_providers::UpstreamClient`] is the production impl; tests
/// substitute stubs.
pub trait CreatureSource
where
	Self: Send + Sync,
{
	fn fetch_pair(
		&self,
		id: u32,
	) -> BoxFuture<'_, kanto_providers::Result<(CreaturePayload, SpeciesPayload)>>;
}

impl CreatureSource for kanto_providers::UpstreamClient {
	fn fetch_pair(
		&self,
		id: u32,
	) -> BoxFuture<'_, kanto_providers::Result<(CreaturePayload, SpeciesPayload)>> {
		Box::pin(kanto_providers::UpstreamClient::fetch_pair(self, id))
	}
}

/// Observer of acquisition progress, called once per settled chunk with
/// `(completed, total)`.
pub trait ProgressSink
where
	Self: Send + Sync,
{
	fn on_progress(&self, completed: u32, total: u32);
}

/// Progress sink that only logs. The API app installs one that also updates
/// its shared status.
pub struct LogProgress;

impl ProgressSink for LogProgress {
	fn on_progress(&self, completed: u32, total: u32) {
		tracing::info!(completed, total, "Acquisition progress.");
	}
}
