use std::{sync::Arc, time::Duration};

use time::OffsetDateTime;
use tokio::{task::JoinSet, time as tokio_time};

use kanto_domain::normalize;
use kanto_domain::record::Record;

use crate::{CreatureSource, Error, ProgressSink, Result};

#[derive(Clone, Copy, Debug)]
pub struct AcquireOptions {
	pub total: u32,
	pub batch_size: u32,
	/// Fixed throttle between chunks. Deliberately non-adaptive: no backoff
	/// on failure, no speed-up on success.
	pub chunk_delay: Duration,
}
impl AcquireOptions {
	pub fn batched(total: u32, batch_size: u32, chunk_delay: Duration) -> Self {
		Self { total, batch_size, chunk_delay }
	}

	/// Comparison mode: one lookup pair at a time, no inter-chunk delay.
	pub fn sequential(total: u32) -> Self {
		Self { total, batch_size: 1, chunk_delay: Duration::ZERO }
	}

	pub fn from_config(cfg: &kanto_config::Acquire) -> Self {
		if cfg.sequential {
			Self::sequential(cfg.total)
		} else {
			Self::batched(cfg.total, cfg.batch_size, Duration::from_millis(cfg.chunk_delay_ms))
		}
	}
}

/// Outcome of one completed acquisition run.
#[derive(Clone, Debug)]
pub struct Acquisition {
	/// Sorted ascending by identifier; one record per successful lookup.
	pub records: Vec<Record>,
	/// Count of attempted lookups, successful or not.
	pub attempted: u32,
	/// Identifiers whose lookup pair failed, sorted ascending.
	pub failed: Vec<u32>,
	pub finished_at: OffsetDateTime,
}
impl Acquisition {
	pub fn status(&self) -> AcquisitionStatus {
		AcquisitionStatus::Ready {
			count: self.records.len(),
			attempted: self.attempted,
			finished_at: self.finished_at,
		}
	}
}

/// Acquisition state as reported to the rendering surface.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AcquisitionStatus {
	Running {
		completed: u32,
		total: u32,
	},
	Ready {
		count: usize,
		attempted: u32,
		#[serde(with = "crate::time_serde")]
		finished_at: OffsetDateTime,
	},
	Failed {
		message: String,
	},
}

/// Partition `[1, total]` into contiguous chunks of `batch_size`; the last
/// chunk may be shorter.
pub fn chunk_ids(total: u32, batch_size: u32) -> Vec<Vec<u32>> {
	if batch_size == 0 {
		return Vec::new();
	}

	(1..=total).collect::<Vec<_>>().chunks(batch_size as usize).map(<[u32]>::to_vec).collect()
}

/// Fetch and normalize every identifier in `[1, total]`.
///
/// Chunks run strictly in order with the configured delay between them;
/// lookups within a chunk run concurrently and each settles independently. A
/// failed lookup drops only its own identifier. A panicked lookup escapes
/// per-identifier isolation and aborts the whole run with no partial result.
pub async fn acquire(
	source: Arc<dyn CreatureSource>,
	language: &str,
	opts: AcquireOptions,
	progress: &dyn ProgressSink,
) -> Result<Acquisition> {
	if opts.batch_size == 0 {
		return Err(Error::InvalidRequest {
			message: "batch_size must be greater than zero.".to_string(),
		});
	}

	let chunks = chunk_ids(opts.total, opts.batch_size);
	let last_index = chunks.len().saturating_sub(1);
	let mut records = Vec::with_capacity(opts.total as usize);
	let mut failed = Vec::new();
	let mut completed = 0_u32;

	for (index, chunk) in chunks.iter().enumerate() {
		let mut lookups = JoinSet::new();

		for &id in chunk {
			let source = source.clone();
			let language = language.to_string();

			lookups.spawn(async move {
				let pair = source.fetch_pair(id).await;

				(id, pair.map(|(creature, species)| normalize(&creature, &species, &language)))
			});
		}

		while let Some(settled) = lookups.join_next().await {
			match settled {
				Ok((_, Ok(record))) => records.push(record),
				Ok((id, Err(err))) => {
					tracing::warn!(id, error = %err, "Lookup failed. Dropping identifier.");
					failed.push(id);
				},
				Err(err) => return Err(Error::Aborted { message: err.to_string() }),
			}
		}

		completed += chunk.len() as u32;
		progress.on_progress(completed, opts.total);

		if index < last_index && !opts.chunk_delay.is_zero() {
			tokio_time::sleep(opts.chunk_delay).await;
		}
	}

	records.sort_by_key(|record| record.id);
	failed.sort_unstable();

	Ok(Acquisition { records, attempted: completed, failed, finished_at: OffsetDateTime::now_utc() })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partitions_151_into_16_ordered_chunks() {
		let chunks = chunk_ids(151, 10);

		assert_eq!(chunks.len(), 16);
		assert!(chunks[..15].iter().all(|chunk| chunk.len() == 10));
		assert_eq!(chunks[15], vec![151]);

		let flat: Vec<u32> = chunks.into_iter().flatten().collect();

		assert_eq!(flat, (1..=151).collect::<Vec<u32>>());
	}

	#[test]
	fn partitions_by_one_for_the_sequential_variant() {
		let chunks = chunk_ids(5, 1);

		assert_eq!(chunks.len(), 5);
		assert!(chunks.iter().all(|chunk| chunk.len() == 1));
	}

	#[test]
	fn status_serializes_with_a_state_tag() {
		let status = AcquisitionStatus::Running { completed: 30, total: 151 };
		let json = serde_json::to_value(&status).expect("Failed to serialize status.");

		assert_eq!(json["state"], "running");
		assert_eq!(json["completed"], 30);
		assert_eq!(json["total"], 151);
	}
}
