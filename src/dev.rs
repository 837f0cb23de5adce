use axum::{body::Body, http::Request, Router};
use reacthub_htmx::headers::request::HX_REQUEST;
use tower_livereload::{predicate::Predicate, LiveReloadLayer};

/// Only full page loads get the reload script; htmx fragments would inject it
/// again on every swap.
#[derive(Clone, Copy)]
struct FullPageRequest;

impl Predicate<Request<Body>> for FullPageRequest {
	fn check(&mut self, request: &Request<Body>) -> bool {
		!request.headers().contains_key(&HX_REQUEST)
	}
}

pub fn configure<S: Clone + Send + Sync + 'static>(router: Router<S, Body>) -> Router<S, Body> {
	router.layer(LiveReloadLayer::new().request_predicate(FullPageRequest))
}
