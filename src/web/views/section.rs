use super::cards::VideoGrid;
use reacthub_entities::video;
use reacthub_services::QueryState;
use rstml_component::{write_html, For, HtmlComponent, HtmlContent, HtmlFormatter};
use std::fmt;

pub const NO_RESULTS: &str = "No results found.";

#[derive(HtmlComponent)]
pub struct ErrorFallback {
	pub what: &'static str,
}

impl HtmlContent for ErrorFallback {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<div class="py-8 text-center text-error" role="alert">
				<p>"Error loading "{self.what}". Please try again later."</p>
			</div>
		)
	}
}

#[derive(HtmlComponent)]
pub struct EmptyState<'a> {
	pub message: &'a str,
}

impl<'a> HtmlContent for EmptyState<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<p class="py-8 text-center text-base-content/60">{self.message}</p>
		)
	}
}

/// Placeholder cards shown while a section is on its way.
#[derive(HtmlComponent)]
pub struct SkeletonGrid {
	pub cards: usize,
}

impl HtmlContent for SkeletonGrid {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<ul class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4" aria-busy="true">
				{For {
					items: 0..self.cards,
					children: |f, _| write_html!(f,
						<li class="overflow-hidden card bg-base-200 animate-pulse">
							<div class="aspect-video bg-base-300"></div>
							<div class="p-4 space-y-2">
								<div class="h-4 rounded bg-base-300"></div>
								<div class="w-1/2 h-3 rounded bg-base-300"></div>
							</div>
						</li>
					),
				}}
			</ul>
		)
	}
}

/// A headed grid of video cards in any state of loading. A `Loading` section
/// fetches itself from `src` once it is on the page, and is replaced by the
/// response.
#[derive(HtmlComponent)]
pub struct VideoSection<'a> {
	pub id: &'static str,
	pub heading: &'static str,
	pub empty: &'static str,
	pub state: &'a QueryState<Vec<video::Card>>,
	pub src: Option<&'a str>,
}

impl<'a> VideoSection<'a> {
	pub fn show_videos(state: &'a QueryState<Vec<video::Card>>, src: Option<&'a str>) -> Self {
		Self {
			id: "show-videos",
			heading: "All Videos",
			empty: NO_RESULTS,
			state,
			src,
		}
	}

	pub fn episode_videos(state: &'a QueryState<Vec<video::Card>>) -> Self {
		Self {
			id: "episode-videos",
			heading: "Videos",
			empty: "No videos available for this episode.",
			state,
			src: None,
		}
	}

	pub fn related(state: &'a QueryState<Vec<video::Card>>, src: Option<&'a str>) -> Self {
		Self {
			id: "related-videos",
			heading: "More Reactions",
			empty: NO_RESULTS,
			state,
			src,
		}
	}
}

impl<'a> HtmlContent for VideoSection<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		let state = self.state;
		let body = |f: &mut HtmlFormatter| match state {
			QueryState::Idle => Ok(()),
			QueryState::Loading => write_html!(f, <SkeletonGrid cards=4 />),
			QueryState::Error(_) => write_html!(f, <ErrorFallback what="videos" />),
			QueryState::Success(videos) if videos.is_empty() => {
				write_html!(f, <EmptyState message=self.empty />)
			}
			QueryState::Success(videos) => write_html!(f, <VideoGrid videos=videos.as_slice() />),
		};

		let lazy = match (state, self.src) {
			(QueryState::Loading, Some(src)) => Some(super::Attrs([
				("hx-get", src),
				("hx-trigger", "load"),
				("hx-swap", "outerHTML"),
			])),
			_ => None,
		};

		write_html!(f,
			<section id=self.id class="space-y-6" {lazy}>
				<h2 class="text-2xl font-semibold">{self.heading}</h2>
				{body}
			</section>
		)
	}
}
