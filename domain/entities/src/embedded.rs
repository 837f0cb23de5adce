use serde::Deserialize;

/// An embedded relation as returned by the store.
///
/// A to-one relation can come back as a list of zero or one rows when the
/// store models the join as to-many. Both shapes decode into this type and
/// collapse to the same `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Embedded<T> {
	Many(Vec<T>),
	One(Option<T>),
}

impl<T> Embedded<T> {
	/// First row of a list, or the single value as-is.
	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Many(rows) => rows.into_iter().next(),
			Self::One(row) => row,
		}
	}
}

impl<T> Default for Embedded<T> {
	fn default() -> Self {
		Self::One(None)
	}
}

impl<T> From<Option<T>> for Embedded<T> {
	fn from(value: Option<T>) -> Self {
		Self::One(value)
	}
}

impl<T> From<Vec<T>> for Embedded<T> {
	fn from(value: Vec<T>) -> Self {
		Self::Many(value)
	}
}
