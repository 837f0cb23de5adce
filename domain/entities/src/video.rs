use crate::{episode, show};
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

pub const TABLE: &str = "videos";

/// A full `videos` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
	pub id: Uuid,
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	pub thumbnail_url: String,
	pub youtube_video_id: String,
	pub views_count: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(default)]
	pub show_id: Option<Uuid>,
	#[serde(default)]
	pub episode_id: Option<Uuid>,
}

impl Model {
	pub fn thumbnail(&self) -> Thumbnail {
		Thumbnail {
			id: self.id,
			thumbnail_url: self.thumbnail_url.clone(),
			views_count: self.views_count,
			created_at: self.created_at,
		}
	}

	pub fn card(&self) -> Card {
		Card {
			id: self.id,
			title: self.title.clone(),
			thumbnail_url: self.thumbnail_url.clone(),
			views_count: self.views_count,
			created_at: self.created_at,
		}
	}
}

/// The video fields shown on an episode card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
	pub id: Uuid,
	pub thumbnail_url: String,
	pub views_count: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
	pub id: Uuid,
	pub title: String,
	pub thumbnail_url: String,
	pub views_count: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

impl Card {
	pub const SELECT: &'static str = "id,title,thumbnail_url,views_count,created_at";
}

/// A video with its show and episode ancestry resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Details {
	pub id: Uuid,
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	pub youtube_video_id: String,
	pub views_count: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(default)]
	pub show: Option<show::Ref>,
	#[serde(default)]
	pub episode: Option<episode::Ancestry>,
}

impl Details {
	pub const SELECT: &'static str = "id,title,description,youtube_video_id,views_count,created_at,\
		show:shows(id,title),\
		episode:episodes(id,title,episode_number,season:seasons(season_number,show:shows(id,title)))";
}
