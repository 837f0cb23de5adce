use async_trait::async_trait;
use reqwest::{
	header::{self, HeaderName, HeaderValue, InvalidHeaderValue},
	Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Attaches the project api key to every request, both as the `apikey`
/// header and as a bearer token.
pub(crate) struct ApiKeyMiddleware {
	api_key: HeaderValue,
	bearer: HeaderValue,
}

impl ApiKeyMiddleware {
	pub(crate) fn new(api_key: &str) -> Result<Self, InvalidHeaderValue> {
		let mut key = HeaderValue::from_str(api_key)?;
		let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
		key.set_sensitive(true);
		bearer.set_sensitive(true);

		Ok(Self {
			api_key: key,
			bearer,
		})
	}
}

#[async_trait]
impl Middleware for ApiKeyMiddleware {
	async fn handle(
		&self,
		mut req: Request,
		extensions: &mut Extensions,
		next: Next<'_>,
	) -> reqwest_middleware::Result<Response> {
		let headers = req.headers_mut();
		headers.insert(HeaderName::from_static("apikey"), self.api_key.clone());
		if !headers.contains_key(header::AUTHORIZATION) {
			headers.insert(header::AUTHORIZATION, self.bearer.clone());
		}

		next.run(req, extensions).await
	}
}
