use reacthub_entities::{episode, season, show, video};
use time::{macros::datetime, Duration};
use uuid::Uuid;

pub fn show(title: &str, top: Option<bool>) -> show::Model {
	show::Model {
		id: Uuid::new_v4(),
		title: title.to_owned(),
		description: None,
		thumbnail_url: None,
		platform: "Netflix".to_owned(),
		is_top_show: top,
	}
}

pub fn season(show_id: Uuid, number: i32) -> season::Model {
	season::Model {
		id: Uuid::new_v4(),
		title: format!("Season {number}"),
		season_number: number,
		show_id,
	}
}

pub fn episode(season_id: Uuid, number: i32) -> episode::Model {
	episode::Model {
		id: Uuid::new_v4(),
		title: format!("Episode {number}"),
		episode_number: number,
		season_id,
	}
}

/// A video created `age_days` before a fixed reference date.
pub fn video(title: &str, views_count: u64, age_days: i64) -> video::Model {
	video::Model {
		id: Uuid::new_v4(),
		title: title.to_owned(),
		description: None,
		thumbnail_url: format!("https://img.example/{title}.jpg"),
		youtube_video_id: format!("yt-{title}"),
		views_count,
		created_at: datetime!(2024-06-01 12:00 UTC) - Duration::days(age_days),
		show_id: None,
		episode_id: None,
	}
}
