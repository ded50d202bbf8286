use std::time::Duration;

use tokio::time::Instant;

/// Coalesces text-query changes: a submitted query becomes active only once
/// the quiet period elapses with no newer submission. Instants are passed in
/// explicitly, so settling is deterministic under paused test time and the
/// settled output for a given query is independent of intermediate
/// keystrokes.
#[derive(Debug)]
pub struct QueryDebouncer {
	delay: Duration,
	active: String,
	pending: Option<(String, Instant)>,
}
impl QueryDebouncer {
	pub fn new(delay: Duration) -> Self {
		Self { delay, active: String::new(), pending: None }
	}

	/// Record a keystroke; restarts the quiet period.
	pub fn submit(&mut self, query: String, now: Instant) {
		self.pending = Some((query, now));
	}

	/// Promote the pending query if its quiet period has elapsed. Returns
	/// whether the active query changed.
	pub fn settle(&mut self, now: Instant) -> bool {
		let Some((query, at)) = self.pending.take() else {
			return false;
		};

		if now.duration_since(at) < self.delay {
			self.pending = Some((query, at));

			return false;
		}

		let changed = query != self.active;

		self.active = query;

		changed
	}

	pub fn active(&self) -> &str {
		&self.active
	}

	pub fn pending(&self) -> Option<&str> {
		self.pending.as_ref().map(|(query, _)| query.as_str())
	}
}

#[cfg(test)]
mod tests {
	use tokio::time::{self, Duration};

	use super::*;

	const DELAY: Duration = Duration::from_millis(300);

	#[tokio::test(start_paused = true)]
	async fn query_settles_after_quiet_period() {
		let mut debouncer = QueryDebouncer::new(DELAY);

		debouncer.submit("pika".to_string(), Instant::now());

		assert!(!debouncer.settle(Instant::now()));
		assert_eq!(debouncer.active(), "");

		time::advance(DELAY).await;

		assert!(debouncer.settle(Instant::now()));
		assert_eq!(debouncer.active(), "pika");
	}

	#[tokio::test(start_paused = true)]
	async fn newer_keystroke_supersedes_pending_query() {
		let mut debouncer = QueryDebouncer::new(DELAY);

		debouncer.submit("p".to_string(), Instant::now());

		time::advance(Duration::from_millis(200)).await;

		debouncer.submit("pi".to_string(), Instant::now());

		// The first keystroke's window has passed, but it was superseded.
		time::advance(Duration::from_millis(200)).await;

		assert!(!debouncer.settle(Instant::now()));
		assert_eq!(debouncer.active(), "");

		time::advance(Duration::from_millis(100)).await;

		assert!(debouncer.settle(Instant::now()));
		assert_eq!(debouncer.active(), "pi");
	}

	#[tokio::test(start_paused = true)]
	async fn settling_the_same_query_reports_no_change() {
		let mut debouncer = QueryDebouncer::new(DELAY);

		debouncer.submit("pika".to_string(), Instant::now());

		time::advance(DELAY).await;

		assert!(debouncer.settle(Instant::now()));

		debouncer.submit("pika".to_string(), Instant::now());

		time::advance(DELAY).await;

		assert!(!debouncer.settle(Instant::now()));
		assert_eq!(debouncer.active(), "pika");
	}

	#[tokio::test(start_paused = true)]
	async fn zero_delay_settles_immediately() {
		let mut debouncer = QueryDebouncer::new(Duration::ZERO);

		debouncer.submit("pika".to_string(), Instant::now());

		assert!(debouncer.settle(Instant::now()));
		assert_eq!(debouncer.active(), "pika");
	}
}
