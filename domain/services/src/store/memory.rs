//! An in-process catalog, for tests and local development without a data
//! store. Reads follow the same rules as the remote store: listings are
//! ordered the same way, single-row reads fail on zero or several matches,
//! and an episode's video comes back in list shape.

use super::{CatalogStore, VideoOrder, VideoQuery, VideoScope};
use crate::FetchError;
use async_trait::async_trait;
use reacthub_entities::{episode, season, show, video, Embedded};
use std::cmp::Reverse;
use uuid::Uuid;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	shows: Vec<show::Model>,
	seasons: Vec<season::Model>,
	episodes: Vec<episode::Model>,
	videos: Vec<video::Model>,
	outage: Option<String>,
}

fn single<T>(mut rows: Vec<T>) -> Result<T, FetchError> {
	match rows.len() {
		1 => Ok(rows.remove(0)),
		n => Err(FetchError::new(format!(
			"JSON object requested, multiple (or no) rows returned: the result contains {n} rows"
		))),
	}
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_show(mut self, show: show::Model) -> Self {
		self.shows.push(show);
		self
	}

	pub fn with_season(mut self, season: season::Model) -> Self {
		self.seasons.push(season);
		self
	}

	pub fn with_episode(mut self, episode: episode::Model) -> Self {
		self.episodes.push(episode);
		self
	}

	pub fn with_video(mut self, video: video::Model) -> Self {
		self.videos.push(video);
		self
	}

	/// Makes every read fail with the given message.
	pub fn unavailable(mut self, message: impl Into<String>) -> Self {
		self.outage = Some(message.into());
		self
	}

	fn check(&self) -> Result<(), FetchError> {
		match &self.outage {
			None => Ok(()),
			Some(message) => Err(FetchError::new(message.clone())),
		}
	}

	fn show_ref(&self, id: Uuid) -> Result<show::Ref, FetchError> {
		single(
			self.shows
				.iter()
				.filter(|s| s.id == id)
				.map(show::Model::to_ref)
				.collect(),
		)
	}

	fn episode_details(&self, id: Uuid) -> Result<episode::Details, FetchError> {
		let episode = single(self.episodes.iter().filter(|e| e.id == id).collect())?;
		let season = single(
			self.seasons
				.iter()
				.filter(|s| s.id == episode.season_id)
				.collect(),
		)?;

		Ok(episode::Details {
			id: episode.id,
			title: episode.title.clone(),
			episode_number: episode.episode_number,
			season: season::Ancestry {
				season_number: season.season_number,
				show: self.show_ref(season.show_id)?,
			},
		})
	}
}

#[async_trait]
impl CatalogStore for MemoryStore {
	async fn show(&self, id: Uuid) -> Result<show::Model, FetchError> {
		self.check()?;
		single(self.shows.iter().filter(|s| s.id == id).cloned().collect())
	}

	async fn top_shows(&self) -> Result<Vec<show::Model>, FetchError> {
		self.check()?;
		let mut shows: Vec<_> = self
			.shows
			.iter()
			.filter(|s| s.is_top_show())
			.cloned()
			.collect();
		shows.sort_by(|a, b| a.title.cmp(&b.title));
		Ok(shows)
	}

	async fn seasons(&self, show_id: Uuid) -> Result<Vec<season::Model>, FetchError> {
		self.check()?;
		let mut seasons: Vec<_> = self
			.seasons
			.iter()
			.filter(|s| s.show_id == show_id)
			.cloned()
			.collect();
		seasons.sort_by_key(|s| s.season_number);
		Ok(seasons)
	}

	async fn episodes(&self, season_id: Uuid) -> Result<Vec<episode::WithVideo>, FetchError> {
		self.check()?;
		let mut episodes: Vec<_> = self
			.episodes
			.iter()
			.filter(|e| e.season_id == season_id)
			.map(|e| episode::WithVideo {
				id: e.id,
				title: e.title.clone(),
				episode_number: e.episode_number,
				video: Embedded::Many(
					self.videos
						.iter()
						.filter(|v| v.episode_id == Some(e.id))
						.map(video::Model::thumbnail)
						.collect(),
				),
			})
			.collect();
		episodes.sort_by_key(|e| e.episode_number);
		Ok(episodes)
	}

	async fn episode(&self, id: Uuid) -> Result<episode::Details, FetchError> {
		self.check()?;
		self.episode_details(id)
	}

	async fn videos(&self, query: &VideoQuery) -> Result<Vec<video::Card>, FetchError> {
		self.check()?;
		let mut videos: Vec<_> = self
			.videos
			.iter()
			.filter(|v| Some(v.id) != query.exclude)
			.filter(|v| match query.scope {
				VideoScope::All => true,
				VideoScope::Show(id) => v.show_id == Some(id),
				VideoScope::Episode(id) => v.episode_id == Some(id),
			})
			.collect();

		match query.order {
			VideoOrder::Newest => videos.sort_by_key(|v| Reverse(v.created_at)),
			VideoOrder::MostViewed => videos.sort_by_key(|v| Reverse(v.views_count)),
		}

		Ok(videos
			.into_iter()
			.skip(query.offset)
			.take(query.limit.unwrap_or(usize::MAX))
			.map(video::Model::card)
			.collect())
	}

	async fn video(&self, id: Uuid) -> Result<video::Details, FetchError> {
		self.check()?;
		let video = single(self.videos.iter().filter(|v| v.id == id).collect())?;

		Ok(video::Details {
			id: video.id,
			title: video.title.clone(),
			description: video.description.clone(),
			youtube_video_id: video.youtube_video_id.clone(),
			views_count: video.views_count,
			created_at: video.created_at,
			show: video.show_id.map(|id| self.show_ref(id)).transpose()?,
			episode: video
				.episode_id
				.map(|id| self.episode_details(id))
				.transpose()?,
		})
	}

	async fn ping(&self) -> Result<(), FetchError> {
		self.check()
	}
}
