/// Business logic services layer
use crate::analytics::{
    filter_by_date_range, filter_by_rockets, filter_satellites, group_by_time, homepage_stats,
    mass_distribution, payloads_for_launches, rocket_ids_from_launches, success_rate,
    HomepageStats, MassBucket, SatelliteFilter, SuccessStats, SuccessTier, TimeBucket,
    TimeGrouping, DEFAULT_BUCKET_WIDTH_KG,
};
use crate::cache::{Cache, CacheState, Fetcher};
use crate::domain::{FromResource, Launch, Payload, Position, ResourceKey, Rocket, Starlink};
use crate::errors::{ErrorDetail, FetchError};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::sync::Arc;

fn error_detail<S: Serializer>(err: &Option<Arc<FetchError>>, s: S) -> Result<S::Ok, S::Error> {
    err.as_deref().map(ErrorDetail::from).serialize(s)
}

fn collection_of<T: FromResource>(state: &CacheState) -> Option<&[T]> {
    state.data.as_deref().and_then(T::collection)
}

/// A cached collection as the presentation layer sees it
#[derive(Debug, Clone, Serialize)]
pub struct CollectionView<T> {
    /// Empty until the first successful fetch
    pub data: Vec<T>,
    pub is_loading: bool,
    #[serde(serialize_with = "error_detail")]
    pub is_error: Option<Arc<FetchError>>,
}

impl<T: FromResource> CollectionView<T> {
    pub fn from_state(state: &CacheState) -> Self {
        Self {
            data: collection_of(state).map(<[T]>::to_vec).unwrap_or_default(),
            is_loading: state.is_loading,
            is_error: state.error.clone(),
        }
    }
}

/// A cached single record as the presentation layer sees it
#[derive(Debug, Clone, Serialize)]
pub struct ItemView<T> {
    pub item: Option<T>,
    pub is_loading: bool,
    #[serde(serialize_with = "error_detail")]
    pub is_error: Option<Arc<FetchError>>,
}

impl<T: FromResource> ItemView<T> {
    pub fn from_state(state: &CacheState) -> Self {
        Self {
            item: state.data.as_deref().and_then(T::item).cloned(),
            is_loading: state.is_loading,
            is_error: state.error.clone(),
        }
    }
}

/// Report derived from one or more cached collections.
///
/// `report` is present once every input has data, even when some input
/// also carries an error from its latest refresh.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView<T> {
    pub report: Option<T>,
    pub is_loading: bool,
    #[serde(serialize_with = "error_detail")]
    pub is_error: Option<Arc<FetchError>>,
}

impl<T> ReportView<T> {
    fn from_states(states: &[&CacheState], report: Option<T>) -> Self {
        Self {
            report,
            is_loading: states.iter().any(|s| s.is_loading),
            is_error: states.iter().find_map(|s| s.error.clone()),
        }
    }
}

/// Analytics view parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Rocket ids to keep; empty keeps all
    pub rockets: Vec<String>,
    pub grouping: TimeGrouping,
    pub bucket_width_kg: f64,
}

impl Default for AnalyticsFilter {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            rockets: Vec::new(),
            grouping: TimeGrouping::Month,
            bucket_width_kg: DEFAULT_BUCKET_WIDTH_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub overview: HomepageStats,
    pub success: SuccessStats,
    pub tier: SuccessTier,
    pub timeline: Vec<TimeBucket>,
    pub mass_distribution: Vec<MassBucket>,
    /// Launches left after date and rocket filters
    pub launch_count: usize,
    /// Every rocket id seen in launches, for the rocket filter
    pub rocket_ids: Vec<String>,
}

/// Map pin for a satellite whose position is fully known
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub name: String,
    pub norad_id: i64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatelliteMapReport {
    pub satellites: Vec<Starlink>,
    pub markers: Vec<MapMarker>,
    pub shown: usize,
    pub total_count: usize,
    pub with_coordinates_count: usize,
}

/// Read access to the dashboard resources through the revalidating cache
pub struct DashboardService<F: Fetcher> {
    cache: Cache<F>,
}

impl<F: Fetcher> DashboardService<F> {
    pub fn new(cache: Cache<F>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Cache<F> {
        &self.cache
    }

    async fn collection<T: FromResource>(&self, key: ResourceKey) -> CollectionView<T> {
        CollectionView::from_state(&self.cache.get(&key).await)
    }

    async fn item<T: FromResource>(&self, key: ResourceKey) -> ItemView<T> {
        ItemView::from_state(&self.cache.get(&key).await)
    }

    pub async fn launches(&self) -> CollectionView<Launch> {
        self.collection(ResourceKey::Launches).await
    }

    pub async fn upcoming_launches(&self) -> CollectionView<Launch> {
        self.collection(ResourceKey::UpcomingLaunches).await
    }

    pub async fn past_launches(&self) -> CollectionView<Launch> {
        self.collection(ResourceKey::PastLaunches).await
    }

    pub async fn rockets(&self) -> CollectionView<Rocket> {
        self.collection(ResourceKey::Rockets).await
    }

    pub async fn payloads(&self) -> CollectionView<Payload> {
        self.collection(ResourceKey::Payloads).await
    }

    pub async fn starlinks(&self) -> CollectionView<Starlink> {
        self.collection(ResourceKey::Starlinks).await
    }

    pub async fn launch(&self, id: &str) -> ItemView<Launch> {
        self.item(ResourceKey::Launch(id.to_string())).await
    }

    pub async fn latest_launch(&self) -> ItemView<Launch> {
        self.item(ResourceKey::LatestLaunch).await
    }

    pub async fn next_launch(&self) -> ItemView<Launch> {
        self.item(ResourceKey::NextLaunch).await
    }

    pub async fn rocket(&self, id: &str) -> ItemView<Rocket> {
        self.item(ResourceKey::Rocket(id.to_string())).await
    }

    pub async fn payload(&self, id: &str) -> ItemView<Payload> {
        self.item(ResourceKey::Payload(id.to_string())).await
    }

    pub async fn starlink(&self, id: &str) -> ItemView<Starlink> {
        self.item(ResourceKey::Starlink(id.to_string())).await
    }

    /// User-triggered retry: force a re-fetch and wait for it
    pub async fn refresh(&self, key: &ResourceKey) -> CacheState {
        self.cache.revalidate(key).await
    }

    /// Success stats, timeline and mass histogram over filtered launches
    pub async fn analytics(&self, filter: &AnalyticsFilter) -> ReportView<AnalyticsReport> {
        let (launches, payloads, rockets) = tokio::join!(
            self.cache.get(&ResourceKey::Launches),
            self.cache.get(&ResourceKey::Payloads),
            self.cache.get(&ResourceKey::Rockets),
        );

        let report = match (
            collection_of::<Launch>(&launches),
            collection_of::<Payload>(&payloads),
            collection_of::<Rocket>(&rockets),
        ) {
            (Some(all_launches), Some(all_payloads), Some(all_rockets)) => {
                let in_range = filter_by_date_range(all_launches, filter.start, filter.end);
                let selected = filter_by_rockets(&in_range, &filter.rockets);
                let carried = payloads_for_launches(all_payloads, &selected);
                let success = success_rate(selected.iter().copied());

                Some(AnalyticsReport {
                    overview: homepage_stats(
                        selected.iter().copied(),
                        carried.iter().copied(),
                        all_rockets,
                    ),
                    tier: SuccessTier::from_rate(success.success_rate),
                    success,
                    timeline: group_by_time(selected.iter().copied(), filter.grouping),
                    mass_distribution: mass_distribution(
                        carried.iter().copied(),
                        filter.bucket_width_kg,
                    ),
                    launch_count: selected.len(),
                    rocket_ids: rocket_ids_from_launches(all_launches),
                })
            }
            _ => None,
        };

        ReportView::from_states(&[&launches, &payloads, &rockets], report)
    }

    /// Satellites to plot plus the "N of M shown, K located" counts
    pub async fn starlink_map(&self, filter: &SatelliteFilter) -> ReportView<SatelliteMapReport> {
        let state = self.cache.get(&ResourceKey::Starlinks).await;
        let report = collection_of::<Starlink>(&state).map(|satellites| {
            let selection = filter_satellites(satellites, filter);
            let markers = selection
                .filtered
                .iter()
                .filter_map(|sat| {
                    sat.position().map(|position| MapMarker {
                        id: sat.id.clone(),
                        name: sat.object_name().to_string(),
                        norad_id: sat.norad_id(),
                        position,
                    })
                })
                .collect();
            SatelliteMapReport {
                markers,
                shown: selection.filtered.len(),
                satellites: selection.filtered.into_iter().cloned().collect(),
                total_count: selection.total_count,
                with_coordinates_count: selection.with_coordinates_count,
            }
        });
        ReportView::from_states(&[&state], report)
    }

    /// Headline numbers over all launches, payloads and rockets
    pub async fn summary(&self) -> ReportView<HomepageStats> {
        let (launches, payloads, rockets) = tokio::join!(
            self.cache.get(&ResourceKey::Launches),
            self.cache.get(&ResourceKey::Payloads),
            self.cache.get(&ResourceKey::Rockets),
        );

        let report = match (
            collection_of::<Launch>(&launches),
            collection_of::<Payload>(&payloads),
            collection_of::<Rocket>(&rockets),
        ) {
            (Some(l), Some(p), Some(r)) => Some(homepage_stats(l, p, r)),
            _ => None,
        };

        ReportView::from_states(&[&launches, &payloads, &rockets], report)
    }
}
