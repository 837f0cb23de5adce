use super::{notification::Notifications, section::ErrorFallback, Template};
use axum::{http::StatusCode, response::IntoResponse};
use rstml_component::{write_html, HtmlContent, HtmlFormatter};
use rstml_component_axum::Html;
use std::fmt;

/// Stands in for a page whose main read failed.
pub struct ErrorPage<'a> {
	notifications: &'a Notifications,
	what: &'static str,
}

impl<'a> ErrorPage<'a> {
	pub fn new(notifications: &'a Notifications, what: &'static str) -> Self {
		Self {
			notifications,
			what,
		}
	}
}

impl<'a> HtmlContent for ErrorPage<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<Template title="Error" notifications=self.notifications>
				<div class="p-8">
					<ErrorFallback what=self.what />
				</div>
			</Template>
		)
	}
}

pub struct NotFoundPage<'a> {
	notifications: &'a Notifications,
}

impl<'a> NotFoundPage<'a> {
	pub fn new(notifications: &'a Notifications) -> Self {
		Self { notifications }
	}
}

impl<'a> IntoResponse for ErrorPage<'a> {
	fn into_response(self) -> axum::response::Response {
		Html(self).into_response()
	}
}

impl<'a> HtmlContent for NotFoundPage<'a> {
	fn fmt(self, f: &mut HtmlFormatter) -> fmt::Result {
		write_html!(f,
			<Template title="Page not found" notifications=self.notifications>
				<div class="p-8 space-y-4 text-center">
					<h1 class="text-4xl font-bold">"Page not found"</h1>
					<p class="text-base-content/70">"There is nothing at this address."</p>
					<a class="btn btn-primary" href="/">"Go home"</a>
				</div>
			</Template>
		)
	}
}

impl<'a> IntoResponse for NotFoundPage<'a> {
	fn into_response(self) -> axum::response::Response {
		(StatusCode::NOT_FOUND, Html(self)).into_response()
	}
}
