/// HTTP request handlers
use crate::analytics::{HomepageStats, SatelliteFilter, SatelliteStatus, TimeGrouping};
use crate::clients::SpaceXClient;
use crate::domain::{Health, Launch, Payload, ResourceKey, Rocket, Starlink};
use crate::errors::{ApiError, ApiResult, ErrorDetail};
use crate::services::{
    AnalyticsFilter, AnalyticsReport, CollectionView, DashboardService, ItemView, ReportView,
    SatelliteMapReport,
};
use crate::utils::{csv_list, parse_timestamp};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

pub type Dashboard = DashboardService<SpaceXClient>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

type Reply<T> = ApiResult<Json<SuccessResponse<T>>>;

fn reply<T: Serialize>(data: T) -> Reply<T> {
    Ok(Json(SuccessResponse::new(data)))
}

/// Single records with nothing to show and a failed fetch become an error body
fn item_reply<T: Serialize>(view: ItemView<T>) -> Reply<ItemView<T>> {
    if view.item.is_none() {
        if let Some(err) = &view.is_error {
            return Err(ApiError::from(Arc::clone(err)));
        }
    }
    reply(view)
}

fn parse_param<T: FromStr>(params: &HashMap<String, String>, name: &str) -> ApiResult<Option<T>> {
    match params.get(name).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidInput(format!("{}: cannot parse '{}'", name, raw))),
        None => Ok(None),
    }
}

fn parse_date(params: &HashMap<String, String>, name: &str) -> ApiResult<Option<DateTime<Utc>>> {
    match params.get(name).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| ApiError::InvalidInput(format!("{}: not a date '{}'", name, raw))),
        None => Ok(None),
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

pub async fn list_launches(State(state): State<AppState>) -> Reply<CollectionView<Launch>> {
    reply(state.dashboard.launches().await)
}

pub async fn list_upcoming_launches(State(state): State<AppState>) -> Reply<CollectionView<Launch>> {
    reply(state.dashboard.upcoming_launches().await)
}

pub async fn list_past_launches(State(state): State<AppState>) -> Reply<CollectionView<Launch>> {
    reply(state.dashboard.past_launches().await)
}

pub async fn get_latest_launch(State(state): State<AppState>) -> Reply<ItemView<Launch>> {
    item_reply(state.dashboard.latest_launch().await)
}

pub async fn get_next_launch(State(state): State<AppState>) -> Reply<ItemView<Launch>> {
    item_reply(state.dashboard.next_launch().await)
}

pub async fn get_launch(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<ItemView<Launch>> {
    item_reply(state.dashboard.launch(&id).await)
}

pub async fn list_rockets(State(state): State<AppState>) -> Reply<CollectionView<Rocket>> {
    reply(state.dashboard.rockets().await)
}

pub async fn get_rocket(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<ItemView<Rocket>> {
    item_reply(state.dashboard.rocket(&id).await)
}

pub async fn list_payloads(State(state): State<AppState>) -> Reply<CollectionView<Payload>> {
    reply(state.dashboard.payloads().await)
}

pub async fn get_payload(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<ItemView<Payload>> {
    item_reply(state.dashboard.payload(&id).await)
}

pub async fn list_starlinks(State(state): State<AppState>) -> Reply<CollectionView<Starlink>> {
    reply(state.dashboard.starlinks().await)
}

pub async fn get_starlink(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<ItemView<Starlink>> {
    item_reply(state.dashboard.starlink(&id).await)
}

/// Analytics over launches filtered by `start`, `end` and `rockets`
/// (comma separated), bucketed by `grouping` and `bucket` kg
pub async fn get_analytics(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Reply<ReportView<AnalyticsReport>> {
    let defaults = AnalyticsFilter::default();
    let filter = AnalyticsFilter {
        start: parse_date(&params, "start")?,
        end: parse_date(&params, "end")?,
        rockets: params.get("rockets").map(|s| csv_list(s)).unwrap_or_default(),
        grouping: parse_param::<TimeGrouping>(&params, "grouping")?.unwrap_or(defaults.grouping),
        bucket_width_kg: parse_param::<f64>(&params, "bucket")?.unwrap_or(defaults.bucket_width_kg),
    };

    if !(filter.bucket_width_kg.is_finite() && filter.bucket_width_kg > 0.0) {
        return Err(ApiError::InvalidInput(
            "bucket: must be a positive number".to_string(),
        ));
    }

    reply(state.dashboard.analytics(&filter).await)
}

/// Satellite map filtered by `status`, `min_alt`, `max_alt` and `search`
pub async fn get_starlink_map(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Reply<ReportView<SatelliteMapReport>> {
    let defaults = SatelliteFilter::default();
    let filter = SatelliteFilter {
        status: parse_param::<SatelliteStatus>(&params, "status")?.unwrap_or(defaults.status),
        altitude_range: (
            parse_param::<f64>(&params, "min_alt")?.unwrap_or(defaults.altitude_range.0),
            parse_param::<f64>(&params, "max_alt")?.unwrap_or(defaults.altitude_range.1),
        ),
        search: params.get("search").cloned().unwrap_or_default(),
    };

    reply(state.dashboard.starlink_map(&filter).await)
}

pub async fn get_summary(State(state): State<AppState>) -> Reply<ReportView<HomepageStats>> {
    reply(state.dashboard.summary().await)
}

#[derive(Serialize)]
pub struct RefreshOutcome {
    pub resource: String,
    pub records: usize,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_error: Option<ErrorDetail>,
}

/// Force revalidation of one collection (`launches`, `upcoming`, `past`,
/// `rockets`, `payloads`, `starlink`)
pub async fn refresh_resource(
    Path(resource): Path<String>,
    State(state): State<AppState>,
) -> Reply<RefreshOutcome> {
    let key = ResourceKey::collection(&resource)
        .ok_or_else(|| ApiError::NotFound(format!("unknown resource '{}'", resource)))?;

    let cache_state = state.dashboard.refresh(&key).await;

    reply(RefreshOutcome {
        resource,
        records: cache_state.data.as_deref().map_or(0, |d| d.len()),
        updated_at: cache_state.updated_at,
        is_error: cache_state.error.as_deref().map(ErrorDetail::from),
    })
}

/// Consumer surface regained focus
pub async fn focus(State(state): State<AppState>) -> Reply<Value> {
    let revalidating = state.dashboard.cache().on_focus();
    reply(json!({ "revalidating": revalidating }))
}

/// Consumer network connectivity restored
pub async fn reconnect(State(state): State<AppState>) -> Reply<Value> {
    let revalidating = state.dashboard.cache().on_reconnect();
    reply(json!({ "revalidating": revalidating }))
}
