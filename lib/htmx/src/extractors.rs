use crate::headers::request::{
	HxBoosted, HxCurrentUrl, HxHistoryRestoreRequest, HxRequest, HxTarget, HxTrigger,
};
use axum::{
	async_trait,
	extract::FromRequestParts,
	headers::HeaderMapExt,
	http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;

/// What htmx told us about a request it issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmxRequestInfo {
	pub boosted: bool,
	pub history_restore: bool,
	pub target: Option<String>,
	pub trigger: Option<String>,
	pub current_url: Option<String>,
}

impl HtmxRequestInfo {
	/// `None` unless the request carries `HX-Request: true`.
	pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
		headers.typed_get::<HxRequest>()?;

		Some(Self {
			boosted: headers.typed_get::<HxBoosted>().is_some(),
			history_restore: headers.typed_get::<HxHistoryRestoreRequest>().is_some(),
			target: headers
				.typed_get::<HxTarget>()
				.map(|v| v.as_str().to_owned()),
			trigger: headers
				.typed_get::<HxTrigger>()
				.map(|v| v.as_str().to_owned()),
			current_url: headers
				.typed_get::<HxCurrentUrl>()
				.map(|v| v.as_str().to_owned()),
		})
	}

	/// A request that only wants a fragment swapped into the current page.
	/// Boosted navigations and history restores want the full page.
	pub fn wants_fragment(&self) -> bool {
		!self.boosted && !self.history_restore
	}
}

pub struct HxRequestInfo(pub Option<HtmxRequestInfo>);

#[async_trait]
impl<S> FromRequestParts<S> for HxRequestInfo
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(Self(HtmxRequestInfo::from_headers(&parts.headers)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::HeaderValue;

	fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
		let mut map = HeaderMap::new();
		for (name, value) in pairs {
			map.insert(*name, HeaderValue::from_static(value));
		}
		map
	}

	#[test]
	fn plain_requests_are_not_htmx() {
		assert_eq!(HtmxRequestInfo::from_headers(&headers(&[])), None);
		assert_eq!(
			HtmxRequestInfo::from_headers(&headers(&[("hx-request", "false")])),
			None
		);
	}

	#[test]
	fn fragment_requests() {
		let info = HtmxRequestInfo::from_headers(&headers(&[
			("hx-request", "true"),
			("hx-target", "episodes"),
		]))
		.unwrap();

		assert!(!info.boosted);
		assert_eq!(info.target.as_deref(), Some("episodes"));
		assert!(info.wants_fragment());
	}

	#[test]
	fn boosted_navigation_wants_full_page() {
		let info = HtmxRequestInfo::from_headers(&headers(&[
			("hx-request", "true"),
			("hx-boosted", "true"),
		]))
		.unwrap();

		assert!(info.boosted);
		assert!(!info.wants_fragment());
	}

	#[test]
	fn history_restore_wants_full_page() {
		let info = HtmxRequestInfo::from_headers(&headers(&[
			("hx-request", "true"),
			("hx-history-restore-request", "true"),
			("hx-trigger", "season"),
			("hx-current-url", "http://localhost/show/1"),
		]))
		.unwrap();

		assert!(info.history_restore);
		assert!(!info.wants_fragment());
		assert_eq!(info.trigger.as_deref(), Some("season"));
		assert_eq!(info.current_url.as_deref(), Some("http://localhost/show/1"));
	}
}
