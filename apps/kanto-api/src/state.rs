use std::{
	sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
	time::Duration,
};

use time::OffsetDateTime;

use kanto_domain::record::Record;
use kanto_providers::UpstreamClient;
use kanto_service::{AcquireOptions, AcquisitionStatus, DexView, ProgressSink, acquire};

/// Lifecycle of the one-shot acquisition, shared between the background task
/// and the request handlers.
#[derive(Debug)]
pub enum DexState {
	Running {
		completed: u32,
		total: u32,
	},
	Ready {
		view: DexView,
		attempted: u32,
		finished_at: OffsetDateTime,
	},
	/// Terminal: no partial collection is exposed; recovery is a restart.
	Failed {
		message: String,
	},
}

#[derive(Clone)]
pub struct AppState {
	inner: Arc<RwLock<DexState>>,
}
impl AppState {
	/// Start the acquisition task and return immediately; the state flips to
	/// `Ready` or `Failed` when the run settles.
	pub fn new(config: &kanto_config::Config) -> color_eyre::Result<Self> {
		let client = Arc::new(UpstreamClient::new(&config.upstream)?);
		let opts = AcquireOptions::from_config(&config.acquire);
		let debounce = Duration::from_millis(config.query.debounce_ms);
		let language = config.upstream.language.clone();
		let state = Self::with_state(DexState::Running { completed: 0, total: opts.total });
		let inner = state.inner.clone();

		tokio::spawn(async move {
			let progress = StateProgress { inner: inner.clone() };

			match acquire(client, &language, opts, &progress).await {
				Ok(acquisition) => {
					tracing::info!(
						count = acquisition.records.len(),
						attempted = acquisition.attempted,
						failed = acquisition.failed.len(),
						"Acquisition finished."
					);

					*write(&inner) = DexState::Ready {
						attempted: acquisition.attempted,
						finished_at: acquisition.finished_at,
						view: DexView::new(acquisition.records, debounce),
					};
				},
				Err(err) => {
					tracing::error!(error = %err, "Acquisition aborted.");

					*write(&inner) = DexState::Failed { message: err.to_string() };
				},
			}
		});

		Ok(state)
	}

	pub fn with_state(state: DexState) -> Self {
		Self { inner: Arc::new(RwLock::new(state)) }
	}

	/// Ready-made state for tests and tools that inject a collection
	/// directly.
	pub fn ready(records: Vec<Record>, debounce: Duration) -> Self {
		let attempted = records.len() as u32;

		Self::with_state(DexState::Ready {
			view: DexView::new(records, debounce),
			attempted,
			finished_at: OffsetDateTime::now_utc(),
		})
	}

	pub fn status(&self) -> AcquisitionStatus {
		match &*self.read() {
			DexState::Running { completed, total } =>
				AcquisitionStatus::Running { completed: *completed, total: *total },
			DexState::Ready { view, attempted, finished_at } => AcquisitionStatus::Ready {
				count: view.records().len(),
				attempted: *attempted,
				finished_at: *finished_at,
			},
			DexState::Failed { message } =>
				AcquisitionStatus::Failed { message: message.clone() },
		}
	}

	/// Run `f` against the acquired view, or report the current status when
	/// the collection is not available.
	pub fn try_with_view<T>(&self, f: impl FnOnce(&DexView) -> T) -> Result<T, AcquisitionStatus> {
		match &*self.read() {
			DexState::Ready { view, .. } => Ok(f(view)),
			DexState::Running { completed, total } =>
				Err(AcquisitionStatus::Running { completed: *completed, total: *total }),
			DexState::Failed { message } =>
				Err(AcquisitionStatus::Failed { message: message.clone() }),
		}
	}

	pub fn try_with_view_mut<T>(
		&self,
		f: impl FnOnce(&mut DexView) -> T,
	) -> Result<T, AcquisitionStatus> {
		let mut guard = write(&self.inner);

		match &mut *guard {
			DexState::Ready { view, .. } => Ok(f(view)),
			DexState::Running { completed, total } =>
				Err(AcquisitionStatus::Running { completed: *completed, total: *total }),
			DexState::Failed { message } =>
				Err(AcquisitionStatus::Failed { message: message.clone() }),
		}
	}

	fn read(&self) -> RwLockReadGuard<'_, DexState> {
		self.inner.read().unwrap_or_else(|err| err.into_inner())
	}
}

struct StateProgress {
	inner: Arc<RwLock<DexState>>,
}
impl ProgressSink for StateProgress {
	fn on_progress(&self, completed: u32, total: u32) {
		tracing::info!(completed, total, "Acquisition progress.");

		if let DexState::Running { completed: done, total: expected } = &mut *write(&self.inner) {
			*done = completed;
			*expected = total;
		}
	}
}

fn write(inner: &Arc<RwLock<DexState>>) -> RwLockWriteGuard<'_, DexState> {
	inner.write().unwrap_or_else(|err| err.into_inner())
}
