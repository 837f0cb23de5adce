use super::{
	episode::BackLink,
	notification::Notifications,
	section::VideoSection,
	Template,
};
use axum::response::IntoResponse;
use reacthub_entities::video;
use reacthub_services::{videos::VideoDetails, QueryState};
use reacthub_utils::{format_date, format_views};
use rstml_component::{write_html, HtmlComponent, HtmlContent, HtmlFormatter};
use rstml_component_axum::Html;
use std::fmt;

const PLAYER_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

#[derive(HtmlComponent)]
struct VideoPlayer<'a> {
	video: &'a VideoDetails,
}

impl<'a> HtmlContent for VideoPlayer<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<div class="w-full overflow-hidden rounded-lg aspect-video bg-base-300">
				<iframe
					src=self.video.embed_url()
					title=self.video.title()
					width="100%"
					height="100%"
					frameborder="0"
					allow=PLAYER_ALLOW
					allowfullscreen
					class="w-full h-full"
				></iframe>
			</div>
		)
	}
}

pub struct VideoPage<'a> {
	notifications: &'a Notifications,
	video: VideoDetails,
	related_src: String,
}

impl<'a> VideoPage<'a> {
	pub fn new(notifications: &'a Notifications, video: VideoDetails, related_src: String) -> Self {
		Self {
			notifications,
			video,
			related_src,
		}
	}
}

impl<'a> HtmlContent for VideoPage<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let video = &self.video;
		let related: QueryState<Vec<video::Card>> = QueryState::Loading;

		let description = video.description().map(|description| {
			move |f: &mut HtmlFormatter| {
				write_html!(f,
					<p class="whitespace-pre-wrap text-base-content/70" hx-disable>{description}</p>
				)
			}
		});

		let episode_info = video.episode_label().map(|label| {
			move |f: &mut HtmlFormatter| {
				write_html!(f,
					<section>
						<h2 class="mb-2 text-xl font-semibold">"Episode Information"</h2>
						<p hx-disable>{label}</p>
					</section>
				)
			}
		});

		write_html!(f,
			<Template title=video.title() notifications=self.notifications>
				<div class="p-8 mx-auto space-y-8 max-w-7xl">
					<BackLink href=video.back_target().href() label=video.show_title().unwrap_or("Home") />

					<VideoPlayer video=video />

					<div class="space-y-4">
						<h1 class="text-3xl font-bold" hx-disable>{video.title()}</h1>
						<div class="flex items-center text-sm text-base-content/70">
							<span>{format_views(video.views_count())}</span>
							<span class="mx-2">"•"</span>
							<span>{format_date(video.created_at())}</span>
							<span class="mx-2">"•"</span>
							<a
								href=video.watch_url()
								target="_blank"
								rel="noopener noreferrer"
								class="inline-flex items-center gap-1 link link-hover"
								hx-boost="false"
							>"Watch on YouTube"</a>
						</div>
						{description}
					</div>

					{episode_info}

					{VideoSection::related(&related, Some(&*self.related_src))}
				</div>
			</Template>
		)
	}
}

impl<'a> IntoResponse for VideoPage<'a> {
	fn into_response(self) -> axum::response::Response {
		Html(self).into_response()
	}
}
