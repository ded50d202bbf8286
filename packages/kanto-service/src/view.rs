use std::time::Duration;

use tokio::time::Instant;

use kanto_domain::{Command, TagFilter, record::Record};

use crate::{Error, QueryDebouncer, Result, query};

/// Explicit view state over the immutable acquired collection, driven by
/// [`Command`] intents; replaces the ambient singletons of a browser runtime.
#[derive(Debug)]
pub struct DexView {
	records: Vec<Record>,
	debouncer: QueryDebouncer,
	tag_filter: TagFilter,
	selected: Option<u32>,
}
impl DexView {
	pub fn new(mut records: Vec<Record>, debounce: Duration) -> Self {
		records.sort_by_key(|record| record.id);

		Self {
			records,
			debouncer: QueryDebouncer::new(debounce),
			tag_filter: TagFilter::All,
			selected: None,
		}
	}

	pub fn apply(&mut self, command: Command, now: Instant) -> Result<()> {
		match command {
			Command::SetQuery { query } => self.debouncer.submit(query, now),
			Command::SetTagFilter { tag } => self.tag_filter = tag,
			Command::SelectRecord { id } => {
				if self.record(id).is_none() {
					return Err(Error::NotFound {
						message: format!("No record with identifier {id}."),
					});
				}

				self.selected = Some(id);
			},
			Command::Dismiss => self.selected = None,
		}

		Ok(())
	}

	/// Promote a pending query whose quiet period has elapsed.
	pub fn settle(&mut self, now: Instant) {
		self.debouncer.settle(now);
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn record(&self, id: u32) -> Option<&Record> {
		self.records
			.binary_search_by_key(&id, |record| record.id)
			.ok()
			.map(|index| &self.records[index])
	}

	/// The subset matching the settled query and the tag filter, in
	/// collection order.
	pub fn filtered(&self) -> Vec<&Record> {
		query::apply_filter(&self.records, self.debouncer.active(), &self.tag_filter)
	}

	pub fn tags(&self) -> Vec<String> {
		query::distinct_tags(&self.records)
	}

	pub fn active_query(&self) -> &str {
		self.debouncer.active()
	}

	/// A query submitted but not yet past its quiet period.
	pub fn pending_query(&self) -> Option<&str> {
		self.debouncer.pending()
	}

	pub fn tag_filter(&self) -> &TagFilter {
		&self.tag_filter
	}

	pub fn selected(&self) -> Option<&Record> {
		self.selected.and_then(|id| self.record(id))
	}
}
