use super::Attrs;
use reacthub_entities::{show, video};
use reacthub_services::episodes::Episode;
use reacthub_utils::{format_date, format_view_count};
use rstml_component::{write_html, For, HtmlComponent, HtmlContent, HtmlFormatter};
use std::fmt;
use time::OffsetDateTime;

#[derive(HtmlComponent)]
struct VideoStats {
	views_count: u64,
	created_at: OffsetDateTime,
}

impl HtmlContent for VideoStats {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<p class="mt-2 text-sm text-base-content/70">
				{format_view_count(self.views_count)}" views • "{format_date(self.created_at)}
			</p>
		)
	}
}

/// A video in a grid. The card carrying `next_page` loads the following page
/// of the grid when it scrolls into view.
#[derive(HtmlComponent)]
pub struct VideoCard<'a> {
	pub video: &'a video::Card,
	pub next_page: Option<&'a str>,
}

impl<'a> HtmlContent for VideoCard<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let next_page_attr = self.next_page.map(|next_page| {
			Attrs([
				("hx-get", next_page),
				("hx-trigger", "revealed"),
				("hx-swap", "afterend"),
			])
		});

		let id = self.video.id.to_string();
		write_html!(f,
			<li
				id=("video-card-", &*id)
				class="overflow-hidden transition-colors shadow-xl card bg-base-100 hover:bg-base-200"
				{next_page_attr}
			>
				<a class="contents" href=("/video/", &*id)>
					<figure class="aspect-video bg-base-300">
						<img
							src=&*self.video.thumbnail_url
							alt=&*self.video.title
							class="object-cover w-full h-full"
							loading="lazy"
							referrerpolicy="no-referrer" />
					</figure>
					<div class="p-4">
						<h3 class="font-medium line-clamp-2" hx-disable>{&*self.video.title}</h3>
						<VideoStats views_count=self.video.views_count created_at=self.video.created_at />
					</div>
				</a>
			</li>
		)
	}
}

#[derive(HtmlComponent)]
pub struct VideoGrid<'a> {
	pub videos: &'a [video::Card],
}

impl<'a> HtmlContent for VideoGrid<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<ul class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
				{For {
					items: self.videos,
					children: |f, video| VideoCard { video, next_page: None }.fmt(f),
				}}
			</ul>
		)
	}
}

#[derive(HtmlComponent)]
pub struct EpisodeCard<'a> {
	pub episode: &'a Episode,
}

impl<'a> HtmlContent for EpisodeCard<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let episode = self.episode;
		let id = episode.id.to_string();
		let heading = format!("{}. {}", episode.episode_number, episode.title);

		let body = |f: &mut HtmlFormatter| match &episode.video {
			Some(video) => write_html!(f,
				<figure class="aspect-video bg-base-300">
					<img
						src=&*video.thumbnail_url
						alt=&*episode.title
						class="object-cover w-full h-full"
						loading="lazy"
						referrerpolicy="no-referrer" />
				</figure>
				<div class="p-4">
					<h3 class="font-medium line-clamp-2" hx-disable>{&*heading}</h3>
					<VideoStats views_count=video.views_count created_at=video.created_at />
				</div>
			),
			None => write_html!(f,
				<div class="p-4">
					<h3 class="font-medium" hx-disable>{&*heading}</h3>
					<p class="mt-2 text-sm text-base-content/70">"No video available"</p>
				</div>
			),
		};

		write_html!(f,
			<li
				id=("episode-card-", &*id)
				class="overflow-hidden transition-colors shadow-xl card bg-base-100 hover:bg-base-200"
			>
				<a class="contents" href=("/episode/", &*id)>
					{body}
				</a>
			</li>
		)
	}
}

#[derive(HtmlComponent)]
pub struct ShowCard<'a> {
	pub show: &'a show::Model,
}

impl<'a> HtmlContent for ShowCard<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let id = self.show.id.to_string();
		write_html!(f,
			<li id=("show-card-", &*id) class="flex-none w-40">
				<a class="flex flex-col gap-2" href=("/show/", &*id)>
					<picture class="overflow-hidden aspect-[2/3] rounded-box bg-base-300">
						<img
							src=self.show.thumbnail_url.as_deref()
							alt=&*self.show.title
							class="object-cover w-full h-full"
							referrerpolicy="no-referrer" />
					</picture>
					<span class="text-sm font-medium line-clamp-2" hx-disable>{&*self.show.title}</span>
				</a>
			</li>
		)
	}
}
