mod cards;
mod episode;
mod index;
mod notification;
mod section;
mod show;
mod status;
mod template;
mod video;

pub use episode::EpisodePage;
pub use index::{FeedItems, IndexPage};
pub use notification::{Notification, Notifications};
pub use section::VideoSection;
pub use show::{EpisodesSection, ShowPage};
pub use status::{ErrorPage, NotFoundPage};
use template::Template;
pub use video::VideoPage;

use axum::response::IntoResponse;
use notification::OutOfBandNotifications;
use rstml_component::{HtmlAttributes, HtmlAttributesFormatter, HtmlContent, HtmlFormatter};
use rstml_component_axum::Html;
use std::fmt;

/// Responds with a fragment for htmx to swap in, followed by the toasts
/// raised while rendering it.
pub fn fragment_response(
	content: impl HtmlContent,
	notifications: &Notifications,
) -> axum::response::Response {
	Html(move |f: &mut HtmlFormatter| {
		content.fmt(f)?;
		OutOfBandNotifications { notifications }.fmt(f)
	})
	.into_response()
}

// temp - move to rstml_component
pub(crate) struct Attrs<I>(pub I)
where
	I: IntoIterator,
	<I as IntoIterator>::Item: HtmlAttributes;

impl<I> HtmlAttributes for Attrs<I>
where
	I: IntoIterator,
	<I as IntoIterator>::Item: HtmlAttributes,
{
	fn fmt(self, formatter: &mut HtmlAttributesFormatter) -> fmt::Result {
		for attr in self.0 {
			attr.fmt(formatter)?;
		}

		Ok(())
	}
}
