use serde::Deserialize;
use uuid::Uuid;

pub const TABLE: &str = "shows";

pub const SELECT: &str = "id,title,description,thumbnail_url,platform,is_top_show";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
	pub id: Uuid,
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub thumbnail_url: Option<String>,
	pub platform: String,
	#[serde(default)]
	pub is_top_show: Option<bool>,
}

impl Model {
	/// Several shows may carry the flag at once.
	pub fn is_top_show(&self) -> bool {
		self.is_top_show.unwrap_or(false)
	}

	pub fn to_ref(&self) -> Ref {
		Ref {
			id: self.id,
			title: self.title.clone(),
		}
	}
}

/// `show:shows(id,title)`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ref {
	pub id: Uuid,
	pub title: String,
}
