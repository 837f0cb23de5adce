use super::{
	cards::{ShowCard, VideoCard},
	notification::Notifications,
	section::{EmptyState, ErrorFallback, NO_RESULTS},
	template::CategoryFilters,
	Template,
};
use axum::response::IntoResponse;
use reacthub_entities::{show, video};
use reacthub_services::QueryState;
use rstml_component::{write_html, For, HtmlContent, HtmlFormatter};
use rstml_component_axum::Html;
use std::fmt;

/// One page worth of feed cards, as list items. The last card links to the
/// next page when there is one.
pub struct FeedItems {
	videos: QueryState<Vec<video::Card>>,
	next_page: Option<String>,
}

impl FeedItems {
	pub fn new(videos: QueryState<Vec<video::Card>>, next_page: Option<String>) -> Self {
		Self { videos, next_page }
	}
}

impl HtmlContent for FeedItems {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		match &self.videos {
			QueryState::Idle => Ok(()),
			QueryState::Loading => Ok(()),
			QueryState::Error(_) => write_html!(f,
				<li class="col-span-full"><ErrorFallback what="videos" /></li>
			),
			QueryState::Success(videos) if videos.is_empty() => write_html!(f,
				<li class="col-span-full"><EmptyState message=NO_RESULTS /></li>
			),
			QueryState::Success(videos) => {
				let last = videos.len() - 1;
				let next_page = self.next_page.as_deref();
				For {
					items: videos.iter().enumerate(),
					children: |f, item| {
						let (i, video) = item;
						let next_page = if i == last { next_page } else { None };
						VideoCard { video, next_page }.fmt(f)
					},
				}
				.fmt(f)
			}
		}
	}
}

pub struct IndexPage<'a> {
	notifications: &'a Notifications,
	top_shows: QueryState<Vec<show::Model>>,
	feed: FeedItems,
}

impl<'a> IndexPage<'a> {
	pub fn new(
		notifications: &'a Notifications,
		top_shows: QueryState<Vec<show::Model>>,
		feed: FeedItems,
	) -> Self {
		Self {
			notifications,
			top_shows,
			feed,
		}
	}

	/// Only the feed cards, for the infinite scroll.
	pub fn into_items_fragment_response(self) -> axum::response::Response {
		super::fragment_response(self.feed, self.notifications)
	}
}

impl<'a> HtmlContent for IndexPage<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let top_shows = self.top_shows;
		let top_shows = move |f: &mut HtmlFormatter| match &top_shows {
			QueryState::Idle | QueryState::Loading => Ok(()),
			QueryState::Error(_) => write_html!(f, <ErrorFallback what="top shows" />),
			QueryState::Success(shows) if shows.is_empty() => {
				write_html!(f, <EmptyState message=NO_RESULTS />)
			}
			QueryState::Success(shows) => write_html!(f,
				<ul class="flex gap-4 pb-2 overflow-x-auto">
					{For {
						items: shows,
						children: |f, show| ShowCard { show }.fmt(f),
					}}
				</ul>
			),
		};

		write_html!(f,
			<Template title="Home" notifications=self.notifications>
				<div class="px-4 pb-8 space-y-6">
					<CategoryFilters />

					<section id="top-shows" class="space-y-4">
						<h2 class="text-2xl font-semibold">"Top Shows"</h2>
						{top_shows}
					</section>

					<section id="feed" class="space-y-4">
						<h2 class="text-2xl font-semibold">"Latest Reactions"</h2>
						<ul
							class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4"
							hx-indicator=".htmx-indicator">
							{self.feed}
						</ul>
						<center>
							<img class="htmx-indicator" width="60" src="/public/img/bars.svg" alt="" />
						</center>
					</section>
				</div>
			</Template>
		)
	}
}

impl<'a> IntoResponse for IndexPage<'a> {
	fn into_response(self) -> axum::response::Response {
		Html(self).into_response()
	}
}
