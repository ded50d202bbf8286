use std::{collections::BTreeMap, time::Duration};

use tokio::time::{self, Instant};

use kanto_domain::{Command, TagFilter, record::Record};
use kanto_service::{DexView, Error};

const DEBOUNCE: Duration = Duration::from_millis(300);

fn record(id: u32, name: &str, types: &[&str], total: i64) -> Record {
	Record {
		id,
		name: name.to_string(),
		types: types.iter().map(|tag| tag.to_string()).collect(),
		height_m: 0.4,
		weight_kg: 6.0,
		abilities: Vec::new(),
		stats: BTreeMap::new(),
		total: Some(total),
		artwork_url: None,
		description: String::new(),
	}
}

fn view() -> DexView {
	DexView::new(
		vec![
			record(26, "raichu", &["electric"], 485),
			record(1, "bulbasaur", &["grass", "poison"], 318),
			record(25, "pikachu", &["electric"], 320),
		],
		DEBOUNCE,
	)
}

#[tokio::test(start_paused = true)]
async fn collection_is_sorted_on_construction() {
	let view = view();
	let ids: Vec<u32> = view.records().iter().map(|record| record.id).collect();

	assert_eq!(ids, vec![1, 25, 26]);
	assert_eq!(view.record(25).map(|record| record.name.as_str()), Some("pikachu"));
	assert_eq!(view.tags(), vec!["electric", "grass", "poison"]);
}

#[tokio::test(start_paused = true)]
async fn query_filters_only_after_the_quiet_period() {
	let mut view = view();

	view.apply(Command::SetQuery { query: "pika".to_string() }, Instant::now())
		.expect("Failed to apply command.");
	view.settle(Instant::now());

	// Still within the quiet period; the full grid remains visible.
	assert_eq!(view.filtered().len(), 3);

	time::advance(DEBOUNCE).await;
	view.settle(Instant::now());

	let hits = view.filtered();

	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].name, "pikachu");
	assert_eq!(view.active_query(), "pika");
}

#[tokio::test(start_paused = true)]
async fn superseded_keystrokes_never_become_active() {
	let mut view = view();

	view.apply(Command::SetQuery { query: "rai".to_string() }, Instant::now())
		.expect("Failed to apply command.");

	time::advance(Duration::from_millis(200)).await;

	view.apply(Command::SetQuery { query: "bulba".to_string() }, Instant::now())
		.expect("Failed to apply command.");

	time::advance(DEBOUNCE).await;
	view.settle(Instant::now());

	let hits = view.filtered();

	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].name, "bulbasaur");
}

#[tokio::test(start_paused = true)]
async fn tag_filter_applies_immediately() {
	let mut view = view();

	view.apply(
		Command::SetTagFilter { tag: TagFilter::Tag("electric".to_string()) },
		Instant::now(),
	)
	.expect("Failed to apply command.");

	let names: Vec<&str> = view.filtered().iter().map(|record| record.name.as_str()).collect();

	assert_eq!(names, vec!["pikachu", "raichu"]);

	view.apply(Command::SetTagFilter { tag: TagFilter::All }, Instant::now())
		.expect("Failed to apply command.");

	assert_eq!(view.filtered().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn selection_and_dismissal_round_trip() {
	let mut view = view();

	view.apply(Command::SelectRecord { id: 25 }, Instant::now())
		.expect("Failed to apply command.");

	assert_eq!(view.selected().map(|record| record.name.as_str()), Some("pikachu"));

	view.apply(Command::Dismiss, Instant::now()).expect("Failed to apply command.");

	assert!(view.selected().is_none());
}

#[tokio::test(start_paused = true)]
async fn selecting_an_unknown_identifier_is_rejected() {
	let mut view = view();
	let err = view
		.apply(Command::SelectRecord { id: 999 }, Instant::now())
		.expect_err("Expected a not-found error.");

	assert!(matches!(err, Error::NotFound { .. }));
	assert!(view.selected().is_none());
}
