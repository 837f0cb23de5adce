use crate::{macros::define_service, CatalogStore, FetchError};
use reacthub_entities::{season, show};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

define_service! {
	pub struct ShowService {
		store: Arc<dyn CatalogStore>,
	}
}

impl ShowService {
	#[instrument(skip(self))]
	pub async fn show(&self, id: Uuid) -> Result<show::Model, FetchError> {
		self.store.show(id).await
	}

	#[instrument(skip(self))]
	pub async fn seasons(&self, show_id: Uuid) -> Result<Vec<season::Model>, FetchError> {
		self.store.seasons(show_id).await
	}

	#[instrument(skip(self))]
	pub async fn top_shows(&self) -> Result<Vec<show::Model>, FetchError> {
		self.store.top_shows().await
	}
}

/// The season whose episodes a show page lists.
///
/// Starts from the user's choice, if any. The first time seasons are known a
/// requested season that is not one of them is dropped, and the first season
/// (lowest season number) is picked instead. From then on the selection is
/// kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonSelection {
	selected: Option<Uuid>,
	settled: bool,
}

impl SeasonSelection {
	pub fn new(requested: Option<Uuid>) -> Self {
		Self {
			selected: requested,
			settled: false,
		}
	}

	pub fn selected(&self) -> Option<Uuid> {
		self.selected
	}

	/// Picks one of the seasons already listed for the show.
	pub fn select(&mut self, season: Uuid) {
		self.selected = Some(season);
		self.settled = true;
	}

	pub fn resolve(&mut self, seasons: &[season::Model]) -> Option<Uuid> {
		if !self.settled {
			self.selected = self
				.selected
				.filter(|id| seasons.iter().any(|s| s.id == *id))
				.or_else(|| first_season(seasons).map(|s| s.id));
			self.settled = self.selected.is_some();
		}

		self.selected
	}
}

pub fn first_season(seasons: &[season::Model]) -> Option<&season::Model> {
	seasons.iter().min_by_key(|s| s.season_number)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{store::memory::MemoryStore, testing};

	fn seasons(numbers: &[i32]) -> Vec<season::Model> {
		let show = Uuid::new_v4();
		numbers
			.iter()
			.map(|&n| testing::season(show, n))
			.collect()
	}

	#[test]
	fn defaults_to_lowest_season_number() {
		let seasons = seasons(&[3, 1, 2]);
		let mut selection = SeasonSelection::new(None);

		assert_eq!(selection.resolve(&seasons), Some(seasons[1].id));
	}

	#[test]
	fn no_default_without_seasons() {
		let mut selection = SeasonSelection::default();
		assert_eq!(selection.resolve(&[]), None);
		assert_eq!(selection.selected(), None);
	}

	#[test]
	fn requested_season_is_never_overwritten() {
		let seasons = seasons(&[1, 2]);
		let mut selection = SeasonSelection::new(Some(seasons[1].id));

		assert_eq!(selection.resolve(&seasons), Some(seasons[1].id));
	}

	#[test]
	fn requested_season_of_another_show_falls_back_to_first() {
		let seasons = seasons(&[2, 1]);
		let mut selection = SeasonSelection::new(Some(Uuid::new_v4()));

		assert_eq!(selection.resolve(&seasons), Some(seasons[1].id));
		assert_eq!(selection.selected(), Some(seasons[1].id));
	}

	#[test]
	fn manual_selection_survives_later_resolves() {
		let seasons = seasons(&[1, 2]);
		let mut selection = SeasonSelection::new(None);
		assert_eq!(selection.resolve(&seasons), Some(seasons[0].id));

		selection.select(seasons[1].id);
		assert_eq!(selection.resolve(&seasons), Some(seasons[1].id));
	}

	#[test]
	fn default_is_kept_when_seasons_change() {
		let first = seasons(&[1, 2]);
		let mut selection = SeasonSelection::new(None);
		selection.resolve(&first);

		let other = seasons(&[0]);
		assert_eq!(selection.resolve(&other), Some(first[0].id));
	}

	#[tokio::test]
	async fn top_shows_allow_several_flags() {
		let store = MemoryStore::new()
			.with_show(testing::show("Severance", Some(true)))
			.with_show(testing::show("Andor", Some(true)))
			.with_show(testing::show("Dark", Some(false)))
			.with_show(testing::show("Lost", None));
		let service = ShowService::new(Arc::new(store));

		let titles: Vec<_> = service
			.top_shows()
			.await
			.unwrap()
			.into_iter()
			.map(|s| s.title)
			.collect();

		assert_eq!(titles, ["Andor", "Severance"]);
	}

	#[tokio::test]
	async fn missing_show_is_a_fetch_failure() {
		let service = ShowService::new(Arc::new(MemoryStore::new()));
		assert!(service.show(Uuid::new_v4()).await.is_err());
	}
}
