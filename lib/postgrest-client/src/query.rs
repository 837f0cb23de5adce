use itertools::Itertools;
use std::{borrow::Cow, fmt};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
	Ascending,
	Descending,
}

impl Order {
	fn as_str(self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
	Eq,
	Neq,
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Eq => f.write_str("eq"),
			Self::Neq => f.write_str("neq"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
	column: Cow<'static, str>,
	operator: Operator,
	value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderBy {
	column: Cow<'static, str>,
	order: Order,
}

/// A read request against a single table (or view) of a PostgREST endpoint.
///
/// Queries are plain data; [`crate::PostgrestClient`] turns them into HTTP
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	table: Cow<'static, str>,
	select: Option<Cow<'static, str>>,
	filters: Vec<Filter>,
	order: Vec<OrderBy>,
	limit: Option<usize>,
	offset: Option<usize>,
	single: bool,
}

impl Query {
	pub fn new(table: impl Into<Cow<'static, str>>) -> Self {
		Self {
			table: table.into(),
			select: None,
			filters: Vec::new(),
			order: Vec::new(),
			limit: None,
			offset: None,
			single: false,
		}
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	/// Column selection, including embedded resources (`video:videos(id,title)`).
	pub fn select(mut self, columns: impl Into<Cow<'static, str>>) -> Self {
		self.select = Some(columns.into());
		self
	}

	pub fn eq(self, column: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
		self.filter(column, Operator::Eq, value)
	}

	pub fn neq(self, column: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
		self.filter(column, Operator::Neq, value)
	}

	fn filter(
		mut self,
		column: impl Into<Cow<'static, str>>,
		operator: Operator,
		value: impl fmt::Display,
	) -> Self {
		self.filters.push(Filter {
			column: column.into(),
			operator,
			value: value.to_string(),
		});
		self
	}

	/// Adds an ordering term. Terms apply in the order they are added.
	pub fn order(mut self, column: impl Into<Cow<'static, str>>, order: Order) -> Self {
		self.order.push(OrderBy {
			column: column.into(),
			order,
		});
		self
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn offset(mut self, offset: usize) -> Self {
		self.offset = Some(offset);
		self
	}

	/// Requests exactly one row. The server rejects the request if zero or
	/// several rows match.
	pub fn single(mut self) -> Self {
		self.single = true;
		self
	}

	pub fn is_single(&self) -> bool {
		self.single
	}

	/// Builds the request url relative to the REST root (`.../rest/v1/`).
	pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
		let mut url = base.join(&self.table)?;

		{
			let mut pairs = url.query_pairs_mut();
			if let Some(select) = &self.select {
				pairs.append_pair("select", select);
			}

			for filter in &self.filters {
				pairs.append_pair(
					&filter.column,
					&format!("{}.{}", filter.operator, filter.value),
				);
			}

			if !self.order.is_empty() {
				let order = self
					.order
					.iter()
					.map(|o| format!("{}.{}", o.column, o.order.as_str()))
					.join(",");
				pairs.append_pair("order", &order);
			}

			if let Some(limit) = self.limit {
				pairs.append_pair("limit", &limit.to_string());
			}

			if let Some(offset) = self.offset {
				pairs.append_pair("offset", &offset.to_string());
			}
		}

		if url.query() == Some("") {
			url.set_query(None);
		}

		Ok(url)
	}
}
