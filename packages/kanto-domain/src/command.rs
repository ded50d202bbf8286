use serde::{Deserialize, Serialize};

/// User intents against the view state. The query layer consumes these; how
/// they are produced (keystrokes, clicks, HTTP) is a caller concern.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
	SetQuery { query: String },
	SetTagFilter { tag: TagFilter },
	SelectRecord { id: u32 },
	Dismiss,
}

/// Tag-filter control value: the wildcard, or one exact tag.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TagFilter {
	All,
	Tag(String),
}
impl TagFilter {
	pub const WILDCARD: &'static str = "all";

	pub fn parse(raw: &str) -> Self {
		let trimmed = raw.trim();

		if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::WILDCARD) {
			Self::All
		} else {
			Self::Tag(trimmed.to_string())
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::All => Self::WILDCARD,
			Self::Tag(tag) => tag,
		}
	}
}

impl From<String> for TagFilter {
	fn from(raw: String) -> Self {
		Self::parse(&raw)
	}
}

impl From<TagFilter> for String {
	fn from(filter: TagFilter) -> Self {
		filter.as_str().to_string()
	}
}
