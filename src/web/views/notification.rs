use reacthub_services::QueryState;
use rstml_component::{write_html, For, HtmlComponent, HtmlContent, HtmlFormatter};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Error,
}

impl Severity {
	fn class(self) -> &'static str {
		match self {
			Severity::Error => "alert alert-error",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub severity: Severity,
	pub title: String,
	pub description: String,
}

impl Notification {
	pub fn fetch_failed(what: &str) -> Self {
		Self {
			severity: Severity::Error,
			title: format!("Error loading {what}"),
			description: "Please try again later.".to_owned(),
		}
	}
}

/// Toasts raised while handling a request.
#[derive(Debug, Default)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, notification: Notification) {
		self.0.push(notification);
	}

	/// Raises an error toast if `state` is a failed read of `what`.
	pub fn track<T>(&mut self, what: &str, state: &QueryState<T>) {
		if let Some(error) = state.error() {
			warn!(what, %error, "section failed to load");
			self.push(Notification::fetch_failed(what));
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
		self.0.iter()
	}
}

#[derive(HtmlComponent)]
struct Toast<'a> {
	notification: &'a Notification,
}

impl<'a> HtmlContent for Toast<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<div class=self.notification.severity.class() role="alert">
				<div>
					<h3 class="font-bold">{&*self.notification.title}</h3>
					<div class="text-xs">{&*self.notification.description}</div>
				</div>
			</div>
		)
	}
}

/// The page's toast container.
#[derive(HtmlComponent)]
pub struct NotificationRegion<'a> {
	pub notifications: &'a Notifications,
}

impl<'a> HtmlContent for NotificationRegion<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<div id="notifications" class="z-50 toast toast-end" aria-live="polite">
				{For {
					items: self.notifications.iter(),
					children: |f, notification| Toast { notification }.fmt(f),
				}}
			</div>
		)
	}
}

/// Toasts appended to the page's container from a fragment response.
#[derive(HtmlComponent)]
pub struct OutOfBandNotifications<'a> {
	pub notifications: &'a Notifications,
}

impl<'a> HtmlContent for OutOfBandNotifications<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		if self.notifications.is_empty() {
			return Ok(());
		}

		write_html!(f,
			<div hx-swap-oob="beforeend:#notifications">
				{For {
					items: self.notifications.iter(),
					children: |f, notification| Toast { notification }.fmt(f),
				}}
			</div>
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reacthub_services::FetchError;

	#[test]
	fn only_failed_reads_raise_toasts() {
		let mut notifications = Notifications::new();
		notifications.track("shows", &QueryState::Success(vec![1, 2]));
		notifications.track("seasons", &QueryState::<()>::Idle);
		notifications.track("videos", &QueryState::<()>::Error(FetchError::new("timeout")));

		let raised: Vec<_> = notifications.iter().collect();
		assert_eq!(raised, vec![&Notification::fetch_failed("videos")]);
		assert_eq!(raised[0].title, "Error loading videos");
		assert_eq!(raised[0].severity, Severity::Error);
	}
}
