use super::{
	cards::EpisodeCard,
	notification::Notifications,
	section::{EmptyState, ErrorFallback, SkeletonGrid, VideoSection, NO_RESULTS},
	Template,
};
use axum::response::IntoResponse;
use reacthub_entities::{season, show, video};
use reacthub_services::{episodes::Episode, QueryState};
use rstml_component::{write_html, For, HtmlComponent, HtmlContent, HtmlFormatter};
use rstml_component_axum::Html;
use std::fmt;
use uuid::Uuid;

#[derive(HtmlComponent)]
struct ShowHeader<'a> {
	show: &'a show::Model,
}

impl<'a> HtmlContent for ShowHeader<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let show = self.show;
		let backdrop = |f: &mut HtmlFormatter| match show.thumbnail_url.as_deref() {
			None => Ok(()),
			Some(thumbnail_url) => write_html!(f,
				<div class="absolute inset-0">
					<img src=thumbnail_url alt=&*show.title class="object-cover w-full h-full" referrerpolicy="no-referrer" />
					<div class="absolute inset-0 bg-gradient-to-t from-base-100 to-base-100/20"></div>
				</div>
			),
		};

		write_html!(f,
			<div class="relative h-[300px] mb-8">
				{backdrop}
				<div class="absolute bottom-0 left-0 p-8">
					<h1 class="mb-2 text-4xl font-bold" hx-disable>{&*show.title}</h1>
					<p class="max-w-2xl text-lg text-base-content/70" hx-disable>{show.description.as_deref()}</p>
					<p class="mt-2 text-sm text-base-content/70">"Watch on "{&*show.platform}</p>
				</div>
			</div>
		)
	}
}

#[derive(HtmlComponent)]
struct SeasonPicker<'a> {
	show_id: Uuid,
	seasons: &'a [season::Model],
	selected: Option<Uuid>,
}

impl<'a> HtmlContent for SeasonPicker<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let show_id = self.show_id.to_string();
		let selected = self.selected;

		write_html!(f,
			<form method="get" action=("/show/", &*show_id) class="contents">
				<select
					name="season"
					class="w-48 select select-bordered select-sm"
					aria-label="Select season"
					hx-get=("/show/", &*show_id, "/episodes")
					hx-trigger="change"
					hx-target="#episodes"
					hx-swap="outerHTML"
				>
					{For {
						items: self.seasons,
						children: |f, season| {
							let selected_attribute = (selected == Some(season.id)).then_some(("selected", ()));
							write_html!(f,
								<option value=season.id.to_string() {selected_attribute}>
									"Season "{season.season_number.to_string()}
								</option>
							)
						},
					}}
				</select>
				<noscript><button class="btn btn-sm">"Show"</button></noscript>
			</form>
		)
	}
}

/// The episode grid of the selected season. Also the response to switching
/// seasons, which replaces it in place.
#[derive(HtmlComponent)]
pub struct EpisodesSection<'a> {
	pub episodes: &'a QueryState<Vec<Episode>>,
}

impl<'a> HtmlContent for EpisodesSection<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let episodes = self.episodes;
		let body = |f: &mut HtmlFormatter| match episodes {
			QueryState::Idle => Ok(()),
			QueryState::Loading => write_html!(f, <SkeletonGrid cards=4 />),
			QueryState::Error(_) => write_html!(f, <ErrorFallback what="episodes" />),
			QueryState::Success(episodes) if episodes.is_empty() => {
				write_html!(f, <EmptyState message=NO_RESULTS />)
			}
			QueryState::Success(episodes) => write_html!(f,
				<ul class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
					{For {
						items: episodes,
						children: |f, episode| EpisodeCard { episode }.fmt(f),
					}}
				</ul>
			),
		};

		write_html!(f,
			<div id="episodes">
				{body}
			</div>
		)
	}
}

pub struct ShowPage<'a> {
	notifications: &'a Notifications,
	show: show::Model,
	seasons: QueryState<Vec<season::Model>>,
	selected: Option<Uuid>,
	episodes: QueryState<Vec<Episode>>,
}

impl<'a> ShowPage<'a> {
	pub fn new(
		notifications: &'a Notifications,
		show: show::Model,
		seasons: QueryState<Vec<season::Model>>,
		selected: Option<Uuid>,
		episodes: QueryState<Vec<Episode>>,
	) -> Self {
		Self {
			notifications,
			show,
			seasons,
			selected,
			episodes,
		}
	}
}

impl<'a> HtmlContent for ShowPage<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let show_id = self.show.id;
		let selected = self.selected;
		let seasons = self.seasons;
		let episodes = self.episodes;
		let videos_src = format!("/show/{show_id}/videos");
		let videos: QueryState<Vec<video::Card>> = QueryState::Loading;

		let seasons_section = move |f: &mut HtmlFormatter| match &seasons {
			QueryState::Idle | QueryState::Loading => Ok(()),
			QueryState::Error(_) => write_html!(f,
				<h2 class="text-2xl font-semibold">"Episodes"</h2>
				<ErrorFallback what="seasons" />
			),
			QueryState::Success(seasons) if seasons.is_empty() => write_html!(f,
				<h2 class="text-2xl font-semibold">"Episodes"</h2>
				<EmptyState message=NO_RESULTS />
			),
			QueryState::Success(seasons) => write_html!(f,
				<div class="flex items-center gap-4">
					<h2 class="text-2xl font-semibold">"Episodes"</h2>
					<SeasonPicker show_id=show_id seasons=seasons.as_slice() selected=selected />
				</div>
				<EpisodesSection episodes=&episodes />
			),
		};

		write_html!(f,
			<Template title=&*self.show.title notifications=self.notifications>
				<ShowHeader show=&self.show />
				<div class="p-8 space-y-8">
					<section id="seasons" class="space-y-6">
						{seasons_section}
					</section>
					{VideoSection::show_videos(&videos, Some(&*videos_src))}
				</div>
			</Template>
		)
	}
}

impl<'a> IntoResponse for ShowPage<'a> {
	fn into_response(self) -> axum::response::Response {
		Html(self).into_response()
	}
}
