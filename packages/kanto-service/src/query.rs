use kanto_domain::{TagFilter, record::Record};

/// Pure filter over the acquired collection. A record matches the text query
/// if its lowercased name contains the lowercased query, or its identifier's
/// decimal string contains the query, or its aggregate total's decimal string
/// contains the query; it matches the tag filter if the filter is the
/// wildcard or the tag is in its type list. The result keeps the
/// collection's existing order.
pub fn apply_filter<'a>(records: &'a [Record], query: &str, tag: &TagFilter) -> Vec<&'a Record> {
	let needle = query.to_lowercase();

	records
		.iter()
		.filter(|record| matches_query(record, &needle) && matches_tag(record, tag))
		.collect()
}

/// Distinct sorted tag set, for populating the filter control.
pub fn distinct_tags(records: &[Record]) -> Vec<String> {
	let mut tags: Vec<String> =
		records.iter().flat_map(|record| record.types.iter().cloned()).collect();

	tags.sort_unstable();
	tags.dedup();

	tags
}

fn matches_query(record: &Record, needle: &str) -> bool {
	if needle.is_empty() {
		return true;
	}
	if record.name.to_lowercase().contains(needle) {
		return true;
	}
	if record.id.to_string().contains(needle) {
		return true;
	}

	record.total.is_some_and(|total| total.to_string().contains(needle))
}

fn matches_tag(record: &Record, tag: &TagFilter) -> bool {
	match tag {
		TagFilter::All => true,
		TagFilter::Tag(tag) => record.has_tag(tag),
	}
}
