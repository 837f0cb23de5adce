use super::{notification::Notifications, section::VideoSection, Template};
use axum::response::IntoResponse;
use reacthub_entities::{episode, video};
use reacthub_services::QueryState;
use rstml_component::{write_html, HtmlComponent, HtmlContent, HtmlFormatter};
use rstml_component_axum::Html;
use std::fmt;

#[derive(HtmlComponent)]
pub(super) struct BackLink<'a> {
	pub href: String,
	pub label: &'a str,
}

impl<'a> HtmlContent for BackLink<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<div class="flex items-center gap-4">
				<a class="gap-1 btn btn-ghost btn-sm" href=self.href>
					<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-4 h-4">
						<path d="m15 18-6-6 6-6"></path>
					</svg>
					"Back to "{self.label}
				</a>
			</div>
		)
	}
}

pub struct EpisodePage<'a> {
	notifications: &'a Notifications,
	episode: episode::Details,
	videos: QueryState<Vec<video::Card>>,
}

impl<'a> EpisodePage<'a> {
	pub fn new(
		notifications: &'a Notifications,
		episode: episode::Details,
		videos: QueryState<Vec<video::Card>>,
	) -> Self {
		Self {
			notifications,
			episode,
			videos,
		}
	}
}

impl<'a> HtmlContent for EpisodePage<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let episode = &self.episode;
		let show = &episode.season.show;
		let title = format!("Episode {}: {}", episode.episode_number, episode.title);

		write_html!(f,
			<Template title=&*title notifications=self.notifications>
				<div class="p-8 space-y-8">
					<BackLink href=format!("/show/{}", show.id) label=&*show.title />

					<h1 class="mb-2 text-3xl font-bold" hx-disable>{&*title}</h1>

					{VideoSection::episode_videos(&self.videos)}
				</div>
			</Template>
		)
	}
}

impl<'a> IntoResponse for EpisodePage<'a> {
	fn into_response(self) -> axum::response::Response {
		Html(self).into_response()
	}
}
