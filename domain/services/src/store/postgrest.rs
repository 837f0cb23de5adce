use super::{CatalogStore, VideoOrder, VideoQuery, VideoScope};
use crate::FetchError;
use async_trait::async_trait;
use postgrest_client::{Order, PostgrestClient, Query};
use reacthub_entities::{episode, season, show, video};
use uuid::Uuid;

fn video_query(query: &VideoQuery) -> Query {
	let mut q = Query::new(video::TABLE).select(video::Card::SELECT);

	if let Some(id) = query.exclude {
		q = q.neq("id", id);
	}

	q = match query.scope {
		VideoScope::All => q,
		VideoScope::Show(id) => q.eq("show_id", id),
		VideoScope::Episode(id) => q.eq("episode_id", id),
	};

	q = match query.order {
		VideoOrder::Newest => q.order("created_at", Order::Descending),
		VideoOrder::MostViewed => q.order("views_count", Order::Descending),
	};

	if let Some(limit) = query.limit {
		q = q.limit(limit);
	}

	if query.offset > 0 {
		q = q.offset(query.offset);
	}

	q
}

#[async_trait]
impl CatalogStore for PostgrestClient {
	async fn show(&self, id: Uuid) -> Result<show::Model, FetchError> {
		let query = Query::new(show::TABLE).select(show::SELECT).eq("id", id);
		Ok(self.fetch_single(query).await?)
	}

	async fn top_shows(&self) -> Result<Vec<show::Model>, FetchError> {
		let query = Query::new(show::TABLE)
			.select(show::SELECT)
			.eq("is_top_show", true)
			.order("title", Order::Ascending);
		Ok(self.fetch(query).await?)
	}

	async fn seasons(&self, show_id: Uuid) -> Result<Vec<season::Model>, FetchError> {
		let query = Query::new(season::TABLE)
			.select(season::SELECT)
			.eq("show_id", show_id)
			.order("season_number", Order::Ascending);
		Ok(self.fetch(query).await?)
	}

	async fn episodes(&self, season_id: Uuid) -> Result<Vec<episode::WithVideo>, FetchError> {
		let query = Query::new(episode::TABLE)
			.select(episode::WithVideo::SELECT)
			.eq("season_id", season_id)
			.order("episode_number", Order::Ascending);
		Ok(self.fetch(query).await?)
	}

	async fn episode(&self, id: Uuid) -> Result<episode::Details, FetchError> {
		let query = Query::new(episode::TABLE)
			.select(episode::Details::SELECT)
			.eq("id", id);
		Ok(self.fetch_single(query).await?)
	}

	async fn videos(&self, query: &VideoQuery) -> Result<Vec<video::Card>, FetchError> {
		Ok(self.fetch(video_query(query)).await?)
	}

	async fn video(&self, id: Uuid) -> Result<video::Details, FetchError> {
		let query = Query::new(video::TABLE)
			.select(video::Details::SELECT)
			.eq("id", id);
		Ok(self.fetch_single(query).await?)
	}

	async fn ping(&self) -> Result<(), FetchError> {
		Ok(PostgrestClient::ping(self).await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use url::Url;

	fn params(query: &VideoQuery) -> Vec<(String, String)> {
		let base = Url::parse("https://abc.supabase.co/rest/v1/").unwrap();
		video_query(query)
			.url(&base)
			.unwrap()
			.query_pairs()
			.filter(|(k, _)| k != "select")
			.map(|(k, v)| (k.into_owned(), v.into_owned()))
			.collect()
	}

	fn pair(k: &str, v: impl ToString) -> (String, String) {
		(k.to_owned(), v.to_string())
	}

	#[test]
	fn related_query_filters_scope_and_excludes_self() {
		let id = Uuid::new_v4();
		let episode = Uuid::new_v4();
		let query = VideoQuery::new(VideoScope::Episode(episode), VideoOrder::MostViewed)
			.excluding(id)
			.limit(8);

		assert_eq!(
			params(&query),
			vec![
				pair("id", format!("neq.{id}")),
				pair("episode_id", format!("eq.{episode}")),
				pair("order", "views_count.desc"),
				pair("limit", 8),
			]
		);
	}

	#[test]
	fn unscoped_listing_has_no_filters() {
		let query = VideoQuery::new(VideoScope::All, VideoOrder::Newest)
			.limit(25)
			.offset(50);

		assert_eq!(
			params(&query),
			vec![
				pair("order", "created_at.desc"),
				pair("limit", 25),
				pair("offset", 50),
			]
		);
	}

	#[test]
	fn show_listing_filters_by_show() {
		let show = Uuid::new_v4();
		let query = VideoQuery::new(VideoScope::Show(show), VideoOrder::Newest);

		assert_eq!(
			params(&query),
			vec![
				pair("show_id", format!("eq.{show}")),
				pair("order", "created_at.desc"),
			]
		);
	}
}
