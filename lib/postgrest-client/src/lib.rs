use async_trait::async_trait;
use reqwest::{
	header::{self, HeaderMap, HeaderValue, InvalidHeaderValue},
	Client, Request, Response, StatusCode, Url,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Instant;
use task_local_extensions::Extensions;
use thiserror::Error;
use tracing::{error, info, info_span, instrument, Instrument};

mod auth;
mod query;

pub use query::{Order, Query};

pub static PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

static SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Error, Debug)]
pub enum PostgrestError {
	#[error("Request error: {0}")]
	RequestError(#[from] reqwest_middleware::Error),

	#[error("{message} (status {status})")]
	Api {
		status: StatusCode,
		code: Option<String>,
		message: String,
	},

	#[error("Invalid url: {0}")]
	Url(#[from] url::ParseError),

	#[error("Invalid api key: {0}")]
	ApiKey(#[from] InvalidHeaderValue),

	#[error("Invalid response body: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for PostgrestError {
	fn from(value: reqwest::Error) -> Self {
		Self::RequestError(value.into())
	}
}

#[derive(Deserialize, Default)]
struct ApiErrorDto {
	#[serde(default)]
	code: Option<String>,
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	details: Option<String>,
}

impl ApiErrorDto {
	fn into_error(self, status: StatusCode) -> PostgrestError {
		let message = match (self.message, self.details) {
			(Some(message), Some(details)) => format!("{message}: {details}"),
			(Some(message), None) => message,
			(None, Some(details)) => details,
			(None, None) => status
				.canonical_reason()
				.unwrap_or("unexpected response")
				.to_owned(),
		};

		PostgrestError::Api {
			status,
			code: self.code,
			message,
		}
	}
}

/// Read-only client for a PostgREST endpoint (such as a Supabase project).
pub struct PostgrestClient {
	client: ClientWithMiddleware,
	rest_url: Url,
}

impl PostgrestClient {
	/// `project_url` is the project root; requests go to `{project_url}/rest/v1/`.
	pub fn new(project_url: &Url, api_key: &str) -> Result<Self, PostgrestError> {
		let mut headers = HeaderMap::new();
		headers.insert(
			header::ACCEPT,
			header::HeaderValue::from_static("application/json"),
		);

		Ok(Self {
			client: ClientBuilder::new(
				Client::builder()
					.user_agent(APP_USER_AGENT)
					.pool_idle_timeout(std::time::Duration::from_secs(5))
					.pool_max_idle_per_host(2)
					.default_headers(headers)
					.build()?,
			)
			.with(auth::ApiKeyMiddleware::new(api_key)?)
			.with(TracingMiddleware)
			.build(),
			rest_url: project_url.join("rest/v1/")?,
		})
	}

	pub fn rest_url(&self) -> &Url {
		&self.rest_url
	}

	/// Runs a query and decodes every returned row.
	#[instrument(skip_all, fields(table = query.table()))]
	pub async fn fetch<T>(&self, query: Query) -> Result<Vec<T>, PostgrestError>
	where
		T: DeserializeOwned,
	{
		self.execute(&query).await
	}

	/// Runs a query in single-row mode. Zero or multiple matching rows is an
	/// error.
	#[instrument(skip_all, fields(table = query.table()))]
	pub async fn fetch_single<T>(&self, query: Query) -> Result<T, PostgrestError>
	where
		T: DeserializeOwned,
	{
		self.execute(&query.single()).await
	}

	/// Checks that the endpoint is reachable and accepts the api key.
	pub async fn ping(&self) -> Result<(), PostgrestError> {
		let response = self.client.get(self.rest_url.clone()).send().await?;
		check_response_status(response).await.map(drop)
	}

	async fn execute<T>(&self, query: &Query) -> Result<T, PostgrestError>
	where
		T: DeserializeOwned,
	{
		let url = query.url(&self.rest_url)?;
		let mut request = self.client.get(url);
		if query.is_single() {
			request = request.header(header::ACCEPT, HeaderValue::from_static(SINGLE_OBJECT));
		}

		let response = check_response_status(request.send().await?).await?;
		let body = response.text().await?;
		serde_json::from_str::<T>(&body).map_err(|e| {
			error!(error = %e, table = query.table(), "failed to parse response");
			e.into()
		})
	}
}

async fn check_response_status(response: Response) -> Result<Response, PostgrestError> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	error!(status = %status, "error response: {body}");
	let dto = serde_json::from_str::<ApiErrorDto>(&body).unwrap_or_default();
	Err(dto.into_error(status))
}

struct TracingMiddleware;

#[async_trait]
impl Middleware for TracingMiddleware {
	async fn handle(
		&self,
		req: Request,
		extensions: &mut Extensions,
		next: Next<'_>,
	) -> reqwest_middleware::Result<Response> {
		let span = info_span!(
			"request",
			method = %req.method(),
			uri = %req.url(),
		);

		let started = Instant::now();
		let result = span
			.in_scope(|| {
				info!(
					method = %req.method(),
					uri = %req.url(),
					"sending request",
				);
				next.run(req, extensions)
			})
			.instrument(span.clone())
			.await;

		span.in_scope(|| match &result {
			Ok(response) => info!(
				status = %response.status(),
				elapsed_ms = started.elapsed().as_millis() as u64,
				"received response",
			),
			Err(e) => error!(error = %e, "request failed"),
		});

		result
	}
}
