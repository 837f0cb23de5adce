use postgrest_client::PostgrestError;
use thiserror::Error;

/// The single failure kind of every catalog read. Not-found, transport and
/// decoding failures all map to it; only the underlying message is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed: {message}")]
pub struct FetchError {
	message: String,
}

impl FetchError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl From<PostgrestError> for FetchError {
	fn from(value: PostgrestError) -> Self {
		Self::new(value.to_string())
	}
}
