use axum::http::Uri;
use indexmap::IndexMap;
use serde::Deserialize;
use std::{fmt, ops};

/// A zero based page index that reads and prints as one based (`?page=2` is
/// index 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageNumber(u64);

impl PageNumber {
	pub fn index(&self) -> u64 {
		self.0
	}

	pub fn display(&self) -> u64 {
		self.0.saturating_add(1)
	}

	/// Link to the page after this one, keeping the rest of `uri`'s query.
	pub fn next_href(self, uri: &Uri) -> String {
		let mut query: IndexMap<String, String> =
			serde_urlencoded::from_str(uri.query().unwrap_or_default()).unwrap_or_default();

		query.insert("page".to_owned(), (self + 1).to_string());
		let query = serde_urlencoded::to_string(query).unwrap_or_default();
		format!("{}?{query}", uri.path())
	}
}

impl PartialEq<u64> for PageNumber {
	fn eq(&self, other: &u64) -> bool {
		self.index() == *other
	}
}

impl ops::Add<u64> for PageNumber {
	type Output = Self;

	fn add(self, rhs: u64) -> Self::Output {
		Self(self.0.saturating_add(rhs))
	}
}

impl fmt::Display for PageNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.display())
	}
}

impl<'de> Deserialize<'de> for PageNumber {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let v: Option<u64> = Option::deserialize(deserializer)?;
		match v {
			None | Some(0) => Ok(Self(0)),
			Some(v) => Ok(Self(v - 1)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Deserialize)]
	struct PageQuery {
		#[serde(default)]
		page: PageNumber,
	}

	fn page(query: &str) -> PageNumber {
		serde_urlencoded::from_str::<PageQuery>(query).unwrap().page
	}

	#[test]
	fn page_numbers_are_one_based_in_urls() {
		assert_eq!(page(""), 0);
		assert_eq!(page("page=0"), 0);
		assert_eq!(page("page=1"), 0);
		assert_eq!(page("page=3"), 2);
	}

	#[test]
	fn next_href_keeps_other_parameters() {
		let uri: Uri = "/?category=movies&page=2".parse().unwrap();
		assert_eq!(page("page=2").next_href(&uri), "/?category=movies&page=3");
	}

	#[test]
	fn largest_page_number_stays_in_range() {
		let last = page("page=18446744073709551615");
		assert_eq!(last, u64::MAX - 1);
		assert_eq!(last.to_string(), "18446744073709551615");
		assert_eq!((last + 1).to_string(), "18446744073709551615");
	}

	#[test]
	fn next_href_from_first_page() {
		let uri: Uri = "/".parse().unwrap();
		assert_eq!(PageNumber::default().next_href(&uri), "/?page=2");
	}
}
