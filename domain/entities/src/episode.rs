use crate::{season, video, Embedded};
use serde::Deserialize;
use uuid::Uuid;

pub const TABLE: &str = "episodes";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
	pub id: Uuid,
	pub title: String,
	pub episode_number: i32,
	pub season_id: Uuid,
}

/// An episode row with its reaction video embedded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WithVideo {
	pub id: Uuid,
	pub title: String,
	pub episode_number: i32,
	#[serde(default)]
	pub video: Embedded<video::Thumbnail>,
}

impl WithVideo {
	pub const SELECT: &'static str =
		"id,title,episode_number,video:videos(id,thumbnail_url,views_count,created_at)";
}

/// An episode with the season and show it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Details {
	pub id: Uuid,
	pub title: String,
	pub episode_number: i32,
	pub season: season::Ancestry,
}

impl Details {
	pub const SELECT: &'static str =
		"id,title,episode_number,season:seasons(season_number,show:shows(id,title))";
}

/// `episode:episodes(id,title,episode_number,season:seasons(...))`
pub type Ancestry = Details;
