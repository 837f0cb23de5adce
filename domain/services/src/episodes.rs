use crate::{
	macros::define_service, CatalogStore, FetchError, VideoOrder, VideoQuery, VideoScope,
};
use reacthub_entities::{episode, video};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

define_service! {
	pub struct EpisodeService {
		store: Arc<dyn CatalogStore>,
	}
}

/// An episode card: the episode and, if one exists, its reaction video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
	pub id: Uuid,
	pub title: String,
	pub episode_number: i32,
	pub video: Option<video::Thumbnail>,
}

impl From<episode::WithVideo> for Episode {
	fn from(row: episode::WithVideo) -> Self {
		Self {
			id: row.id,
			title: row.title,
			episode_number: row.episode_number,
			video: row.video.into_option(),
		}
	}
}

/// Collapses each episode's embedded video to at most one, keeping the
/// episodes in the order they were fetched.
pub fn collapse_videos(rows: Vec<episode::WithVideo>) -> Vec<Episode> {
	rows.into_iter().map(Episode::from).collect()
}

impl EpisodeService {
	#[instrument(skip(self))]
	pub async fn episodes(&self, season_id: Uuid) -> Result<Vec<Episode>, FetchError> {
		self.store.episodes(season_id).await.map(collapse_videos)
	}

	#[instrument(skip(self))]
	pub async fn episode(&self, id: Uuid) -> Result<episode::Details, FetchError> {
		self.store.episode(id).await
	}

	/// Every reaction to an episode, newest first.
	#[instrument(skip(self))]
	pub async fn videos(&self, episode_id: Uuid) -> Result<Vec<video::Card>, FetchError> {
		let query = VideoQuery::new(VideoScope::Episode(episode_id), VideoOrder::Newest);
		self.store.videos(&query).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{store::memory::MemoryStore, testing};
	use reacthub_entities::Embedded;

	fn row(number: i32, video: Embedded<video::Thumbnail>) -> episode::WithVideo {
		episode::WithVideo {
			id: Uuid::new_v4(),
			title: format!("Episode {number}"),
			episode_number: number,
			video,
		}
	}

	fn thumbnail(views: u64) -> video::Thumbnail {
		testing::video("clip", views, 0).thumbnail()
	}

	#[test]
	fn collapse_is_total_and_keeps_order() {
		let rows = vec![
			row(3, Embedded::Many(vec![thumbnail(1)])),
			row(1, Embedded::Many(vec![])),
			row(2, Embedded::Many(vec![thumbnail(2), thumbnail(3)])),
		];
		let ids: Vec<_> = rows.iter().map(|r| r.id).collect();

		let episodes = collapse_videos(rows);

		assert_eq!(episodes.len(), 3);
		assert_eq!(episodes.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
		assert_eq!(episodes[0].video.as_ref().map(|v| v.views_count), Some(1));
		assert_eq!(episodes[1].video, None);
		assert_eq!(episodes[2].video.as_ref().map(|v| v.views_count), Some(2));
	}

	#[test]
	fn collapse_accepts_already_collapsed_rows() {
		let video = thumbnail(7);
		let rows = vec![
			row(1, Embedded::One(Some(video.clone()))),
			row(2, Embedded::One(None)),
		];

		let episodes = collapse_videos(rows);
		assert_eq!(episodes[0].video, Some(video));
		assert_eq!(episodes[1].video, None);
	}

	#[tokio::test]
	async fn episodes_come_back_in_episode_order_with_their_video() {
		let show = testing::show("Dark", None);
		let season = testing::season(show.id, 1);
		let first = testing::episode(season.id, 1);
		let second = testing::episode(season.id, 2);
		let mut reaction = testing::video("reaction", 10, 0);
		reaction.episode_id = Some(second.id);

		let store = MemoryStore::new()
			.with_show(show)
			.with_season(season.clone())
			.with_episode(second.clone())
			.with_episode(first.clone())
			.with_video(reaction.clone());
		let service = EpisodeService::new(Arc::new(store));

		let episodes = service.episodes(season.id).await.unwrap();
		assert_eq!(
			episodes.iter().map(|e| e.id).collect::<Vec<_>>(),
			[first.id, second.id]
		);
		assert_eq!(episodes[0].video, None);
		assert_eq!(episodes[1].video, Some(reaction.thumbnail()));
	}

	#[tokio::test]
	async fn episode_details_resolve_show() {
		let show = testing::show("Dark", None);
		let season = testing::season(show.id, 2);
		let episode = testing::episode(season.id, 5);

		let store = MemoryStore::new()
			.with_show(show.clone())
			.with_season(season)
			.with_episode(episode.clone());
		let service = EpisodeService::new(Arc::new(store));

		let details = service.episode(episode.id).await.unwrap();
		assert_eq!(details.episode_number, 5);
		assert_eq!(details.season.season_number, 2);
		assert_eq!(details.season.show, show.to_ref());
	}
}
