use crate::show;
use serde::Deserialize;
use uuid::Uuid;

pub const TABLE: &str = "seasons";

pub const SELECT: &str = "id,title,season_number,show_id";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
	pub id: Uuid,
	pub title: String,
	pub season_number: i32,
	pub show_id: Uuid,
}

/// `season:seasons(season_number,show:shows(id,title))`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ancestry {
	pub season_number: i32,
	pub show: show::Ref,
}
