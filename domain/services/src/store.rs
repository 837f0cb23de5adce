use crate::FetchError;
use async_trait::async_trait;
use reacthub_entities::{episode, season, show, video};
use uuid::Uuid;

#[cfg(any(test, feature = "memory"))]
pub mod memory;
mod postgrest;

/// Which videos a listing is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoScope {
	All,
	Show(Uuid),
	Episode(Uuid),
}

impl VideoScope {
	/// Narrowest available scope: the episode if known, else the show.
	pub fn narrowest(episode: Option<Uuid>, show: Option<Uuid>) -> Self {
		match (episode, show) {
			(Some(episode), _) => Self::Episode(episode),
			(None, Some(show)) => Self::Show(show),
			(None, None) => Self::All,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOrder {
	/// `created_at` descending
	Newest,
	/// `views_count` descending
	MostViewed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
	pub scope: VideoScope,
	pub exclude: Option<Uuid>,
	pub order: VideoOrder,
	pub limit: Option<usize>,
	pub offset: usize,
}

impl VideoQuery {
	pub fn new(scope: VideoScope, order: VideoOrder) -> Self {
		Self {
			scope,
			exclude: None,
			order,
			limit: None,
			offset: 0,
		}
	}

	pub fn excluding(mut self, id: Uuid) -> Self {
		self.exclude = Some(id);
		self
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn offset(mut self, offset: usize) -> Self {
		self.offset = offset;
		self
	}
}

/// Read access to the catalog. Single-row reads fail when zero or several
/// rows match.
#[async_trait]
pub trait CatalogStore: Send + Sync {
	async fn show(&self, id: Uuid) -> Result<show::Model, FetchError>;

	/// Every show flagged as a top show, by title.
	async fn top_shows(&self) -> Result<Vec<show::Model>, FetchError>;

	/// Seasons of a show by ascending season number.
	async fn seasons(&self, show_id: Uuid) -> Result<Vec<season::Model>, FetchError>;

	/// Episodes of a season by ascending episode number, video embedded.
	async fn episodes(&self, season_id: Uuid) -> Result<Vec<episode::WithVideo>, FetchError>;

	async fn episode(&self, id: Uuid) -> Result<episode::Details, FetchError>;

	async fn videos(&self, query: &VideoQuery) -> Result<Vec<video::Card>, FetchError>;

	async fn video(&self, id: Uuid) -> Result<video::Details, FetchError>;

	async fn ping(&self) -> Result<(), FetchError>;
}
