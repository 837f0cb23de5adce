use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};
use url::Url;

/// Browse reaction videos by show, season and episode
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
	/// Root url of the catalog's data store project
	#[arg(long, env = "SUPABASE_URL")]
	pub store_url: Url,

	/// Public (anonymous) api key for the data store
	#[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
	pub store_key: String,

	/// Address to listen on
	#[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
	pub listen: SocketAddr,

	/// Directory served under `/public`, containing the built assets
	#[arg(long, env = "PUBLIC_FOLDER", default_value = "public")]
	pub public_folder: PathBuf,

	/// Reload open pages when the server restarts (requires the `dev` feature)
	#[arg(long, env = "LIVE_RELOAD", default_value_t = false)]
	pub live_reload: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::try_parse_from([
			"reacthub",
			"--store-url",
			"https://abc.supabase.co",
			"--store-key",
			"anon",
		])
		.unwrap();

		assert_eq!(config.store_url.as_str(), "https://abc.supabase.co/");
		assert_eq!(config.listen, "0.0.0.0:8000".parse().unwrap());
		assert_eq!(config.public_folder, PathBuf::from("public"));
		assert!(!config.live_reload);
	}

	#[test]
	fn rejects_invalid_store_url() {
		let result = Config::try_parse_from([
			"reacthub",
			"--store-url",
			"not a url",
			"--store-key",
			"anon",
		]);

		assert!(result.is_err());
	}
}
