mod assets;
mod config;
#[cfg(feature = "dev")]
mod dev;
mod health;
mod web;

use assets::BuiltAssets;
use axum::{
	extract::{FromRef, State},
	response::IntoResponse,
	routing::get,
	Router,
};
use clap::Parser;
use color_eyre::eyre::{Context, Result};
use config::Config;
use health::HealthReport;
use postgrest_client::PostgrestClient;
use reacthub_services::CatalogStore;
use std::{path::Path, sync::Arc};
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, metadata::LevelFilter, warn};
use tracing_forest::ForestLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

pub mod built_info {
	include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Clone)]
pub struct AppState {
	store: Arc<dyn CatalogStore>,
}

impl AppState {
	pub fn new(store: Arc<dyn CatalogStore>) -> Self {
		Self { store }
	}
}

impl FromRef<AppState> for Arc<dyn CatalogStore> {
	fn from_ref(input: &AppState) -> Self {
		input.store.clone()
	}
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	HealthReport::new(built_info::PKG_VERSION).check("store", state.store.ping().await)
}

fn app(state: AppState, public_folder: &Path) -> Router {
	Router::new()
		.route("/healthz", get(health_check))
		.merge(web::router())
		.with_state(state)
		.nest_service("/public", ServeDir::new(public_folder))
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();
	tracing_subscriber::registry()
		.with(ForestLayer::default())
		.with(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::INFO.into())
				.from_env_lossy(),
		)
		.init();

	_main(Config::parse()).await
}

async fn _main(config: Config) -> Result<()> {
	if let Err(e) = BuiltAssets::init(&config.public_folder).await {
		warn!(
			public_folder = %config.public_folder.display(),
			"no usable asset manifest, serving unbundled assets: {e}"
		);
	}

	let store = PostgrestClient::new(&config.store_url, &config.store_key)
		.wrap_err("failed to create store client")?;
	let state = AppState::new(Arc::new(store));

	let mut terminate = signal(SignalKind::terminate()).wrap_err("register for SIGTERM")?;
	let ct = CancellationToken::new();
	tokio::spawn({
		let ct = ct.clone();
		async move {
			tokio::select! {
				_ = terminate.recv() => {},
				_ = tokio::signal::ctrl_c() => {},
			}
			info!("shutting down");
			ct.cancel();
		}
	});

	let mut router = app(state, &config.public_folder);

	if config.live_reload {
		#[cfg(feature = "dev")]
		{
			router = dev::configure(router);
		}

		#[cfg(not(feature = "dev"))]
		warn!("live reload requested, but the dev feature is not enabled");
	}

	router = router
		.layer(CompressionLayer::new())
		.layer(TraceLayer::new_for_http());

	info!(
		version = built_info::PKG_VERSION,
		listen = %config.listen,
		"starting server"
	);

	axum::Server::bind(&config.listen)
		.serve(router.into_make_service())
		.with_graceful_shutdown(ct.cancelled())
		.await
		.wrap_err("server error")
}
