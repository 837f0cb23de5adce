use crate::FetchError;
use std::future::Future;

/// Lifecycle of one catalog read as seen by a page.
///
/// `Idle` means the read's precondition is not met (nothing to fetch yet),
/// `Loading` means it was deferred to a follow-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
	Idle,
	Loading,
	Success(T),
	Error(FetchError),
}

impl<T> QueryState<T> {
	pub fn from_result(result: Result<T, FetchError>) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(e) => Self::Error(e),
		}
	}

	/// Runs `fetch` only when its key is available; stays `Idle` otherwise.
	pub async fn run_if<K, F, Fut>(key: Option<K>, fetch: F) -> Self
	where
		F: FnOnce(K) -> Fut,
		Fut: Future<Output = Result<T, FetchError>>,
	{
		match key {
			None => Self::Idle,
			Some(key) => Self::from_result(fetch(key).await),
		}
	}

	pub fn data(&self) -> Option<&T> {
		match self {
			Self::Success(value) => Some(value),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<&FetchError> {
		match self {
			Self::Error(e) => Some(e),
			_ => None,
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
		match self {
			Self::Idle => QueryState::Idle,
			Self::Loading => QueryState::Loading,
			Self::Success(value) => QueryState::Success(f(value)),
			Self::Error(e) => QueryState::Error(e),
		}
	}
}

impl<T> From<Result<T, FetchError>> for QueryState<T> {
	fn from(value: Result<T, FetchError>) -> Self {
		Self::from_result(value)
	}
}
