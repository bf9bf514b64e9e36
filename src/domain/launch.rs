use crate::schema::{self, Shape, Validated};
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How precisely `date_utc` is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Half,
    Quarter,
    Year,
    Month,
    Day,
    Hour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub flight_number: i64,
    pub name: String,
    pub date_utc: String,
    pub date_unix: i64,
    pub date_local: String,
    pub date_precision: DatePrecision,
    pub static_fire_date_utc: Option<String>,
    pub static_fire_date_unix: Option<i64>,
    pub net: Option<bool>,
    pub window: Option<f64>,
    pub upcoming: bool,
    /// `None` while the outcome is unknown
    pub success: Option<bool>,
    pub tbd: bool,
    pub auto_update: bool,
    pub details: Option<String>,
    pub rocket: String,
    pub launchpad: String,
    pub payloads: Vec<String>,
    pub capsules: Vec<String>,
    pub ships: Vec<String>,
    pub crew: Vec<String>,
    pub cores: Vec<LaunchCore>,
    pub failures: Vec<LaunchFailure>,
    pub fairings: Option<Fairings>,
    pub links: LaunchLinks,
    pub launch_library_id: Option<String>,
}

/// Per-booster usage on one launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchCore {
    pub core: Option<String>,
    pub flight: Option<i64>,
    pub gridfins: Option<bool>,
    pub legs: Option<bool>,
    pub reused: Option<bool>,
    pub landing_attempt: Option<bool>,
    pub landing_success: Option<bool>,
    pub landing_type: Option<String>,
    pub landpad: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchFailure {
    /// Seconds after liftoff
    pub time: i64,
    pub altitude: Option<f64>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fairings {
    pub reused: Option<bool>,
    pub recovery_attempt: Option<bool>,
    pub recovered: Option<bool>,
    pub ships: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    pub patch: Option<PatchLinks>,
    pub reddit: Option<RedditLinks>,
    pub flickr: Option<FlickrLinks>,
    pub presskit: Option<String>,
    pub webcast: Option<String>,
    pub youtube_id: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchLinks {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditLinks {
    pub campaign: Option<String>,
    pub launch: Option<String>,
    pub media: Option<String>,
    pub recovery: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlickrLinks {
    pub small: Vec<String>,
    pub original: Vec<String>,
}

impl Launch {
    /// Parsed `date_utc`, `None` when the upstream string is not a timestamp
    pub fn launched_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_utc)
    }
}

impl Validated for Launch {
    const NAME: &'static str = "launch";
    const SHAPE: &'static Shape = &schema::LAUNCH;
}
