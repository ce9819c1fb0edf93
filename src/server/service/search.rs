use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PaginationDto,
        kos::{KosDto, MobileSearchQuery, SearchQuery, SearchResultDto},
    },
    server::{
        data::{
            gambar::GambarKosRepository,
            kos::{ActiveKosFilter, KosRepository},
        },
        error::{kos::KosError, Error},
        model::db::KosModel,
    },
};

/// Listings fetched before the web search filters run
pub const WEB_SEARCH_FETCH_LIMIT: u64 = 100;

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Parses an optional numeric filter, treating blank or malformed input as absent
fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.map(str::trim).and_then(|v| v.parse().ok())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Whether `needle` (already lowercased) occurs in any searchable text of the listing
fn matches_search(kos: &KosModel, needle: &str) -> bool {
    let optional = [
        kos.description.as_deref(),
        kos.fasilitas_kos.as_deref(),
        kos.fasilitas_kamar.as_deref(),
        kos.fasilitas_kamar_mandi.as_deref(),
        kos.fasilitas_parkir.as_deref(),
    ];

    [kos.name.as_str(), kos.address.as_str(), kos.city.as_str()]
        .into_iter()
        .chain(optional.into_iter().flatten())
        .any(|text| text.to_lowercase().contains(needle))
}

/// Applies the web search filters to already fetched listings, keeping their order
pub fn filter_listings(kos: Vec<KosModel>, query: &SearchQuery) -> Vec<KosModel> {
    let search = non_blank(query.search.as_deref()).map(str::to_lowercase);
    let city = non_blank(query.city.as_deref());
    let gender_type = non_blank(query.gender_type.as_deref());
    let min_price: Option<i64> = parse_number(query.min_price.as_deref());
    let max_price: Option<i64> = parse_number(query.max_price.as_deref());

    kos.into_iter()
        .filter(|k| search.as_deref().is_none_or(|needle| matches_search(k, needle)))
        .filter(|k| city.is_none_or(|city| k.city == city))
        .filter(|k| gender_type.is_none_or(|gender| k.gender_type == gender))
        .filter(|k| min_price.is_none_or(|min| k.monthly_price >= min))
        .filter(|k| max_price.is_none_or(|max| k.monthly_price <= max))
        .collect()
}

/// Distinct cities of the listings, sorted
pub fn distinct_cities(kos: &[KosModel]) -> Vec<String> {
    let mut cities: Vec<String> = kos.iter().map(|k| k.city.clone()).collect();
    cities.sort();
    cities.dedup();

    cities
}

/// Row window requested by a mobile listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Resolves `page`, `limit` and `offset`, where an explicit offset overrides the page
    pub fn from_query(query: &MobileSearchQuery) -> Self {
        let limit = parse_number::<u64>(query.limit.as_deref())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);

        let offset = match parse_number::<u64>(query.offset.as_deref()) {
            Some(offset) => offset,
            None => {
                let page = parse_number::<u64>(query.page.as_deref())
                    .filter(|page| *page > 0)
                    .unwrap_or(1);
                (page - 1).saturating_mul(limit)
            }
        };

        Self { offset, limit }
    }

    pub fn pagination(&self, total_records: u64) -> PaginationDto {
        let total_pages = total_records.div_ceil(self.limit);
        let current_page = self.offset / self.limit + 1;

        PaginationDto {
            total_records,
            total_pages,
            current_page,
            next_page: (current_page < total_pages).then_some(current_page + 1),
            prev_page: (current_page > 1).then_some(current_page - 1),
            limit: self.limit,
        }
    }
}

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of [`SearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Web search over the most recent listings of any status
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResultDto, Error> {
        let recent = KosRepository::new(self.db)
            .list_recent(WEB_SEARCH_FETCH_LIMIT)
            .await?;

        let cities = distinct_cities(&recent);
        let kos = filter_listings(recent, query);

        let ids: Vec<i32> = kos.iter().map(|k| k.id).collect();
        let images = GambarKosRepository::new(self.db)
            .list_by_kos_ids(&ids)
            .await?;

        Ok(SearchResultDto {
            kos: kos
                .into_iter()
                .map(|k| KosDto::from_model(k, &images))
                .collect(),
            cities,
        })
    }

    /// One page of active listings for the mobile app
    pub async fn mobile_search(
        &self,
        query: &MobileSearchQuery,
    ) -> Result<(Vec<KosDto>, PaginationDto), Error> {
        let window = PageWindow::from_query(query);
        let filter = ActiveKosFilter {
            search: non_blank(query.search.as_deref()).map(str::to_string),
            min_price: parse_number(query.min_price.as_deref()),
            max_price: parse_number(query.max_price.as_deref()),
        };

        let (kos, total) = KosRepository::new(self.db)
            .page_active(&filter, window.offset, window.limit)
            .await?;

        let ids: Vec<i32> = kos.iter().map(|k| k.id).collect();
        let images = GambarKosRepository::new(self.db)
            .list_by_kos_ids(&ids)
            .await?;

        let kos = kos
            .into_iter()
            .map(|k| KosDto::from_model(k, &images))
            .collect();

        Ok((kos, window.pagination(total)))
    }

    /// Listing detail for the mobile app, counting the view
    ///
    /// A failed view count update is logged and does not fail the request.
    pub async fn mobile_detail(&self, kos_id: i32) -> Result<KosDto, Error> {
        let kos_repository = KosRepository::new(self.db);

        let Some(kos) = kos_repository.get(kos_id).await? else {
            return Err(KosError::NotFound(kos_id).into());
        };
        let images = GambarKosRepository::new(self.db).list_by_kos(kos.id).await?;

        if let Err(e) = kos_repository.increment_view_count(kos.id).await {
            tracing::warn!("Failed to increment view count of kos ID {}: {}", kos.id, e);
        }

        Ok(KosDto::from_model(kos, &images))
    }
}
