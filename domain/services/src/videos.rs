use crate::{
	macros::define_service, CatalogStore, FetchError, VideoOrder, VideoQuery, VideoScope,
};
use reacthub_entities::video;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

pub const RELATED_LIMIT: usize = 8;
pub const FEED_PAGE_SIZE: usize = 24;

define_service! {
	pub struct VideoService {
		store: Arc<dyn CatalogStore>,
	}
}

/// One page of the home feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
	pub videos: Vec<video::Card>,
	pub has_more: bool,
}

/// Where the "back" link of a video page leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
	Episode(Uuid),
	Show(Uuid),
	Home,
}

impl BackTarget {
	pub fn href(&self) -> String {
		match self {
			Self::Episode(id) => format!("/episode/{id}"),
			Self::Show(id) => format!("/show/{id}"),
			Self::Home => "/".to_owned(),
		}
	}
}

/// A video page: the video plus everything derived from its ancestry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
	video: video::Details,
}

impl VideoDetails {
	pub fn new(video: video::Details) -> Self {
		Self { video }
	}

	pub fn id(&self) -> Uuid {
		self.video.id
	}

	pub fn title(&self) -> &str {
		&self.video.title
	}

	pub fn description(&self) -> Option<&str> {
		self.video
			.description
			.as_deref()
			.filter(|d| !d.trim().is_empty())
	}

	pub fn views_count(&self) -> u64 {
		self.video.views_count
	}

	pub fn created_at(&self) -> OffsetDateTime {
		self.video.created_at
	}

	pub fn youtube_video_id(&self) -> &str {
		&self.video.youtube_video_id
	}

	pub fn embed_url(&self) -> String {
		format!(
			"https://www.youtube.com/embed/{}?rel=0&modestbranding=1",
			self.video.youtube_video_id
		)
	}

	pub fn watch_url(&self) -> String {
		format!(
			"https://www.youtube.com/watch?v={}",
			self.video.youtube_video_id
		)
	}

	pub fn episode_id(&self) -> Option<Uuid> {
		self.video.episode.as_ref().map(|e| e.id)
	}

	pub fn show_id(&self) -> Option<Uuid> {
		self.video.show.as_ref().map(|s| s.id)
	}

	/// The show reached through the episode wins over the direct reference.
	pub fn show_title(&self) -> Option<&str> {
		self.video
			.episode
			.as_ref()
			.map(|e| e.season.show.title.as_str())
			.or_else(|| self.video.show.as_ref().map(|s| s.title.as_str()))
	}

	pub fn back_target(&self) -> BackTarget {
		match (&self.video.episode, &self.video.show) {
			(Some(episode), _) => BackTarget::Episode(episode.id),
			(None, Some(show)) => BackTarget::Show(show.id),
			(None, None) => BackTarget::Home,
		}
	}

	/// `Season 5, Episode 14: Ozymandias`
	pub fn episode_label(&self) -> Option<String> {
		self.video.episode.as_ref().map(|e| {
			format!(
				"Season {}, Episode {}: {}",
				e.season.season_number, e.episode_number, e.title
			)
		})
	}
}

impl VideoService {
	#[instrument(skip(self))]
	pub async fn details(&self, id: Uuid) -> Result<VideoDetails, FetchError> {
		self.store.video(id).await.map(VideoDetails::new)
	}

	/// Newest videos across the whole catalog. `page` is zero based; pages
	/// whose offset does not fit a `usize` are empty.
	#[instrument(skip(self))]
	pub async fn feed(&self, page: u64) -> Result<FeedPage, FetchError> {
		let Some(offset) = usize::try_from(page)
			.ok()
			.and_then(|page| page.checked_mul(FEED_PAGE_SIZE))
		else {
			return Ok(FeedPage {
				videos: Vec::new(),
				has_more: false,
			});
		};

		let query = VideoQuery::new(VideoScope::All, VideoOrder::Newest)
			.offset(offset)
			.limit(FEED_PAGE_SIZE + 1);

		let mut videos = self.store.videos(&query).await?;
		let has_more = videos.len() > FEED_PAGE_SIZE;
		videos.truncate(FEED_PAGE_SIZE);

		Ok(FeedPage { videos, has_more })
	}

	/// Every reaction linked to a show, newest first.
	#[instrument(skip(self))]
	pub async fn show_videos(&self, show_id: Uuid) -> Result<Vec<video::Card>, FetchError> {
		let query = VideoQuery::new(VideoScope::Show(show_id), VideoOrder::Newest);
		self.store.videos(&query).await
	}

	/// The most viewed other videos of the same episode, else of the same
	/// show, else of the whole catalog.
	#[instrument(skip(self))]
	pub async fn related(
		&self,
		id: Uuid,
		episode_id: Option<Uuid>,
		show_id: Option<Uuid>,
	) -> Result<Vec<video::Card>, FetchError> {
		let query = related_query(id, episode_id, show_id);
		let mut videos = self.store.videos(&query).await?;
		videos.retain(|v| v.id != id);
		videos.truncate(RELATED_LIMIT);
		Ok(videos)
	}
}

pub fn related_query(id: Uuid, episode_id: Option<Uuid>, show_id: Option<Uuid>) -> VideoQuery {
	VideoQuery::new(
		VideoScope::narrowest(episode_id, show_id),
		VideoOrder::MostViewed,
	)
	.excluding(id)
	.limit(RELATED_LIMIT)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{store::memory::MemoryStore, testing};
	use async_trait::async_trait;
	use reacthub_entities::{episode, season, show};

	#[test]
	fn episode_scope_wins_over_show() {
		let (id, episode, show) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

		let query = related_query(id, Some(episode), Some(show));
		assert_eq!(query.scope, VideoScope::Episode(episode));
		assert_eq!(query.exclude, Some(id));
		assert_eq!(query.order, VideoOrder::MostViewed);
		assert_eq!(query.limit, Some(RELATED_LIMIT));

		assert_eq!(
			related_query(id, None, Some(show)).scope,
			VideoScope::Show(show)
		);
		assert_eq!(related_query(id, None, None).scope, VideoScope::All);
	}

	#[tokio::test]
	async fn related_videos_are_most_viewed_of_the_show_without_self() {
		let show = testing::show("Dark", None);
		let mut current = testing::video("current", 1_000_000, 0);
		current.show_id = Some(show.id);

		let mut store = MemoryStore::new().with_show(show.clone()).with_video(current.clone());
		for i in 0..12u64 {
			let mut video = testing::video(&format!("v{i}"), i * 10, i as i64);
			video.show_id = Some(show.id);
			store = store.with_video(video);
		}
		store = store.with_video(testing::video("elsewhere", 5_000_000, 0));
		let service = VideoService::new(Arc::new(store));

		let related = service.related(current.id, None, Some(show.id)).await.unwrap();

		assert_eq!(related.len(), RELATED_LIMIT);
		assert!(related.iter().all(|v| v.id != current.id));
		assert!(related.iter().all(|v| v.title != "elsewhere"));
		assert!(related
			.windows(2)
			.all(|w| w[0].views_count >= w[1].views_count));
		assert_eq!(related[0].title, "v11");
	}

	#[tokio::test]
	async fn unscoped_related_videos_still_exclude_self() {
		let current = testing::video("current", 100, 0);
		let store = MemoryStore::new()
			.with_video(current.clone())
			.with_video(testing::video("other", 1, 0));
		let service = VideoService::new(Arc::new(store));

		let related = service.related(current.id, None, None).await.unwrap();
		assert_eq!(related.len(), 1);
		assert_eq!(related[0].title, "other");
	}

	struct SloppyStore(Vec<video::Model>);

	#[async_trait]
	impl CatalogStore for SloppyStore {
		async fn show(&self, _: Uuid) -> Result<show::Model, FetchError> {
			Err(FetchError::new("unused"))
		}

		async fn top_shows(&self) -> Result<Vec<show::Model>, FetchError> {
			Ok(Vec::new())
		}

		async fn seasons(&self, _: Uuid) -> Result<Vec<season::Model>, FetchError> {
			Ok(Vec::new())
		}

		async fn episodes(&self, _: Uuid) -> Result<Vec<episode::WithVideo>, FetchError> {
			Ok(Vec::new())
		}

		async fn episode(&self, _: Uuid) -> Result<episode::Details, FetchError> {
			Err(FetchError::new("unused"))
		}

		async fn videos(&self, _: &VideoQuery) -> Result<Vec<video::Card>, FetchError> {
			Ok(self.0.iter().map(video::Model::card).collect())
		}

		async fn video(&self, _: Uuid) -> Result<video::Details, FetchError> {
			Err(FetchError::new("unused"))
		}

		async fn ping(&self) -> Result<(), FetchError> {
			Ok(())
		}
	}

	#[tokio::test]
	async fn related_limits_hold_even_if_the_store_ignores_them() {
		let current = testing::video("current", 0, 0);
		let mut videos = vec![current.clone()];
		videos.extend((0..20).map(|i| testing::video(&format!("v{i}"), i, 0)));
		let service = VideoService::new(Arc::new(SloppyStore(videos)));

		let related = service.related(current.id, None, None).await.unwrap();
		assert_eq!(related.len(), RELATED_LIMIT);
		assert!(related.iter().all(|v| v.id != current.id));
	}

	#[tokio::test]
	async fn feed_pages_report_more() {
		let mut store = MemoryStore::new();
		for i in 0..(FEED_PAGE_SIZE + 3) {
			store = store.with_video(testing::video(&format!("v{i}"), 0, i as i64));
		}
		let service = VideoService::new(Arc::new(store));

		let first = service.feed(0).await.unwrap();
		assert_eq!(first.videos.len(), FEED_PAGE_SIZE);
		assert!(first.has_more);
		assert_eq!(first.videos[0].title, "v0");

		let second = service.feed(1).await.unwrap();
		assert_eq!(second.videos.len(), 3);
		assert!(!second.has_more);
	}

	#[tokio::test]
	async fn feed_pages_beyond_any_offset_are_empty() {
		let store = MemoryStore::new().with_video(testing::video("only", 0, 0));
		let service = VideoService::new(Arc::new(store));

		for page in [u64::MAX - 1, u64::MAX] {
			let feed = service.feed(page).await.unwrap();
			assert!(feed.videos.is_empty());
			assert!(!feed.has_more);
		}
	}

	fn details(show: Option<show::Ref>, episode: Option<episode::Details>) -> VideoDetails {
		VideoDetails::new(video::Details {
			id: Uuid::new_v4(),
			title: "Reaction".to_owned(),
			description: Some("  ".to_owned()),
			youtube_video_id: "dQw4w9WgXcQ".to_owned(),
			views_count: 42,
			created_at: time::macros::datetime!(2024-01-05 00:00 UTC),
			show,
			episode,
		})
	}

	fn show_ref(title: &str) -> show::Ref {
		testing::show(title, None).to_ref()
	}

	fn ancestry(show: show::Ref) -> episode::Details {
		episode::Details {
			id: Uuid::new_v4(),
			title: "Ozymandias".to_owned(),
			episode_number: 14,
			season: season::Ancestry {
				season_number: 5,
				show,
			},
		}
	}

	#[test]
	fn back_link_prefers_episode_then_show() {
		let show = show_ref("Breaking Bad");
		let episode = ancestry(show.clone());

		let video = details(Some(show.clone()), Some(episode.clone()));
		assert_eq!(video.back_target(), BackTarget::Episode(episode.id));
		assert_eq!(video.back_target().href(), format!("/episode/{}", episode.id));

		let video = details(Some(show.clone()), None);
		assert_eq!(video.back_target(), BackTarget::Show(show.id));

		let video = details(None, None);
		assert_eq!(video.back_target(), BackTarget::Home);
		assert_eq!(video.back_target().href(), "/");
	}

	#[test]
	fn show_title_prefers_episode_ancestry() {
		let video = details(
			Some(show_ref("Direct")),
			Some(ancestry(show_ref("Through episode"))),
		);
		assert_eq!(video.show_title(), Some("Through episode"));

		let video = details(Some(show_ref("Direct")), None);
		assert_eq!(video.show_title(), Some("Direct"));

		assert_eq!(details(None, None).show_title(), None);
	}

	#[test]
	fn episode_label_and_player_urls() {
		let video = details(None, Some(ancestry(show_ref("Breaking Bad"))));
		assert_eq!(
			video.episode_label().as_deref(),
			Some("Season 5, Episode 14: Ozymandias")
		);
		assert_eq!(
			video.embed_url(),
			"https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
		);
		assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
		assert_eq!(video.description(), None);
	}

	#[tokio::test]
	async fn unknown_video_is_a_fetch_failure() {
		let service = VideoService::new(Arc::new(MemoryStore::new()));
		let error = service.details(Uuid::new_v4()).await.unwrap_err();
		assert!(error.to_string().starts_with("fetch failed"));
	}
}
