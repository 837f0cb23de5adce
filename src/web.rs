mod pagination;
mod views;

use self::{
	pagination::PageNumber,
	views::{
		fragment_response, EpisodePage, EpisodesSection, ErrorPage, FeedItems, IndexPage,
		NotFoundPage, Notification, Notifications, ShowPage, VideoPage, VideoSection,
	},
};
use crate::AppState;
use axum::{
	extract::{OriginalUri, Path, Query},
	http::Uri,
	response::{IntoResponse, Response},
	routing::get,
	Router,
};
use reacthub_htmx::extractors::HxRequestInfo;
use reacthub_services::{
	episodes::EpisodeService,
	shows::{SeasonSelection, ShowService},
	videos::{FeedPage, VideoService},
	FetchError, QueryState,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

#[derive(Error, Debug)]
enum WebError {
	#[error("Page not found")]
	NotFound,

	#[error("Error loading {what}: {source}")]
	Fetch {
		what: &'static str,
		source: FetchError,
	},
}

impl WebError {
	fn fetch(what: &'static str) -> impl FnOnce(FetchError) -> Self {
		move |source| Self::Fetch { what, source }
	}
}

impl IntoResponse for WebError {
	fn into_response(self) -> Response {
		warn!("{}", self);
		let mut notifications = Notifications::new();
		match self {
			Self::NotFound => NotFoundPage::new(&notifications).into_response(),

			Self::Fetch { what, .. } => {
				notifications.push(Notification::fetch_failed(what));
				ErrorPage::new(&notifications, what).into_response()
			}
		}
	}
}

#[derive(Deserialize)]
struct FeedQuery {
	#[serde(default)]
	page: PageNumber,
}

fn feed_items(
	notifications: &mut Notifications,
	feed: QueryState<FeedPage>,
	page: PageNumber,
	uri: &Uri,
) -> Result<FeedItems, WebError> {
	notifications.track("videos", &feed);
	if page.index() > 0 && feed.data().is_some_and(|feed| feed.videos.is_empty()) {
		return Err(WebError::NotFound);
	}

	let next_page = feed
		.data()
		.filter(|feed| feed.has_more)
		.map(|_| page.next_href(uri));

	Ok(FeedItems::new(feed.map(|feed| feed.videos), next_page))
}

async fn index(
	shows: ShowService,
	videos: VideoService,
	Query(query): Query<FeedQuery>,
	OriginalUri(uri): OriginalUri,
	HxRequestInfo(hx): HxRequestInfo,
) -> Result<Response, WebError> {
	let page = query.page;
	let mut notifications = Notifications::new();

	match hx {
		Some(hx) if hx.wants_fragment() => {
			let feed = QueryState::from_result(videos.feed(page.index()).await);
			let items = feed_items(&mut notifications, feed, page, &uri)?;

			Ok(IndexPage::new(&notifications, QueryState::Idle, items).into_items_fragment_response())
		}

		_ => {
			let (top_shows, feed) = futures::join!(shows.top_shows(), videos.feed(page.index()));
			let top_shows = QueryState::from_result(top_shows);
			notifications.track("top shows", &top_shows);
			let items = feed_items(
				&mut notifications,
				QueryState::from_result(feed),
				page,
				&uri,
			)?;

			Ok(IndexPage::new(&notifications, top_shows, items).into_response())
		}
	}
}

#[derive(Deserialize)]
struct SeasonQuery {
	#[serde(default)]
	season: Option<Uuid>,
}

async fn show(
	Path(show_id): Path<Uuid>,
	Query(query): Query<SeasonQuery>,
	shows: ShowService,
	episodes: EpisodeService,
) -> Result<Response, WebError> {
	let mut selection = SeasonSelection::new(query.season);

	let (show, seasons, requested) = match query.season {
		// episodes of the requested season load alongside the show
		Some(season) => {
			let (show, seasons, listed) = futures::join!(
				shows.show(show_id),
				shows.seasons(show_id),
				episodes.episodes(season)
			);

			let show = show.map_err(WebError::fetch("show"))?;
			(show, seasons, Some((season, listed)))
		}

		None => {
			let (show, seasons) = futures::join!(shows.show(show_id), shows.seasons(show_id));
			let show = show.map_err(WebError::fetch("show"))?;
			(show, seasons, None)
		}
	};

	let season = seasons
		.as_ref()
		.ok()
		.and_then(|seasons| selection.resolve(seasons));

	let listed = match requested {
		Some((requested, listed)) if season == Some(requested) => QueryState::from_result(listed),
		_ => QueryState::run_if(season, |season| episodes.episodes(season)).await,
	};

	let seasons = QueryState::from_result(seasons);
	let mut notifications = Notifications::new();
	notifications.track("seasons", &seasons);
	notifications.track("episodes", &listed);

	Ok(ShowPage::new(&notifications, show, seasons, season, listed).into_response())
}

async fn show_episodes(
	Path(show_id): Path<Uuid>,
	Query(query): Query<SeasonQuery>,
	shows: ShowService,
	episodes: EpisodeService,
) -> Response {
	let mut selection = SeasonSelection::new(query.season);
	let listed = match shows.seasons(show_id).await {
		Ok(seasons) => {
			let season = selection.resolve(&seasons);
			QueryState::run_if(season, |season| episodes.episodes(season)).await
		}
		Err(e) => QueryState::Error(e),
	};

	let mut notifications = Notifications::new();
	notifications.track("episodes", &listed);
	fragment_response(EpisodesSection { episodes: &listed }, &notifications)
}

async fn show_videos(Path(show_id): Path<Uuid>, videos: VideoService) -> Response {
	let listed = QueryState::from_result(videos.show_videos(show_id).await);

	let mut notifications = Notifications::new();
	notifications.track("videos", &listed);
	fragment_response(VideoSection::show_videos(&listed, None), &notifications)
}

async fn episode(
	Path(episode_id): Path<Uuid>,
	episodes: EpisodeService,
) -> Result<Response, WebError> {
	let (episode, videos) = futures::join!(episodes.episode(episode_id), episodes.videos(episode_id));
	let episode = episode.map_err(WebError::fetch("episode"))?;
	let videos = QueryState::from_result(videos);

	let mut notifications = Notifications::new();
	notifications.track("videos", &videos);

	Ok(EpisodePage::new(&notifications, episode, videos).into_response())
}

/// Scope of a video page's related videos, passed on to the lazy section.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct RelatedQuery {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	episode: Option<Uuid>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	show: Option<Uuid>,
}

impl RelatedQuery {
	fn href(&self, video_id: Uuid) -> String {
		match serde_urlencoded::to_string(self) {
			Ok(query) if !query.is_empty() => format!("/video/{video_id}/related?{query}"),
			_ => format!("/video/{video_id}/related"),
		}
	}
}

async fn video(Path(video_id): Path<Uuid>, videos: VideoService) -> Result<Response, WebError> {
	let video = videos
		.details(video_id)
		.await
		.map_err(WebError::fetch("video"))?;

	let related = RelatedQuery {
		episode: video.episode_id(),
		show: video.show_id(),
	}
	.href(video.id());

	let notifications = Notifications::new();
	Ok(VideoPage::new(&notifications, video, related).into_response())
}

async fn related_videos(
	Path(video_id): Path<Uuid>,
	Query(query): Query<RelatedQuery>,
	videos: VideoService,
) -> Response {
	let related = QueryState::from_result(videos.related(video_id, query.episode, query.show).await);

	let mut notifications = Notifications::new();
	notifications.track("related videos", &related);
	fragment_response(VideoSection::related(&related, None), &notifications)
}

async fn not_found() -> Response {
	WebError::NotFound.into_response()
}

pub fn router() -> Router<AppState> {
	Router::new()
		.route("/", get(index))
		.route("/show/:id", get(show))
		.route("/show/:id/episodes", get(show_episodes))
		.route("/show/:id/videos", get(show_videos))
		.route("/episode/:id", get(episode))
		.route("/video/:id", get(video))
		.route("/video/:id/related", get(related_videos))
		.fallback(not_found)
}
