/// Domain models for the application
mod launch;
mod payload;
mod rocket;
mod starlink;

#[cfg(test)]
pub(crate) mod fixtures;

pub use launch::{
    DatePrecision, Fairings, FlickrLinks, Launch, LaunchCore, LaunchFailure, LaunchLinks,
    PatchLinks, RedditLinks,
};
pub use payload::{Payload, PayloadDragon};
pub use rocket::{
    CompositeFairing, Engines, FirstStage, Isp, LandingLegs, Mass, Measurement, PayloadConfig,
    PayloadWeight, Rocket, SecondStage, Thrust,
};
pub use starlink::{Position, SpaceTrack, Starlink};

use crate::config::ResourceClass;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One upstream endpoint the dashboard reads
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Launches,
    UpcomingLaunches,
    PastLaunches,
    LatestLaunch,
    NextLaunch,
    Launch(String),
    Rockets,
    Rocket(String),
    Payloads,
    Payload(String),
    Starlinks,
    Starlink(String),
}

impl ResourceKey {
    /// Path relative to the versioned API base
    pub fn path(&self) -> String {
        match self {
            ResourceKey::Launches => "launches".to_string(),
            ResourceKey::UpcomingLaunches => "launches/upcoming".to_string(),
            ResourceKey::PastLaunches => "launches/past".to_string(),
            ResourceKey::LatestLaunch => "launches/latest".to_string(),
            ResourceKey::NextLaunch => "launches/next".to_string(),
            ResourceKey::Launch(id) => format!("launches/{}", id),
            ResourceKey::Rockets => "rockets".to_string(),
            ResourceKey::Rocket(id) => format!("rockets/{}", id),
            ResourceKey::Payloads => "payloads".to_string(),
            ResourceKey::Payload(id) => format!("payloads/{}", id),
            ResourceKey::Starlinks => "starlink".to_string(),
            ResourceKey::Starlink(id) => format!("starlink/{}", id),
        }
    }

    pub fn class(&self) -> ResourceClass {
        match self {
            ResourceKey::Launches
            | ResourceKey::UpcomingLaunches
            | ResourceKey::PastLaunches
            | ResourceKey::LatestLaunch
            | ResourceKey::NextLaunch
            | ResourceKey::Launch(_) => ResourceClass::Launches,
            ResourceKey::Rockets | ResourceKey::Rocket(_) => ResourceClass::Rockets,
            ResourceKey::Payloads | ResourceKey::Payload(_) => ResourceClass::Payloads,
            ResourceKey::Starlinks | ResourceKey::Starlink(_) => ResourceClass::Starlink,
        }
    }

    /// Collection key for a resource name used by the JSON surface
    pub fn collection(name: &str) -> Option<Self> {
        match name {
            "launches" => Some(ResourceKey::Launches),
            "upcoming" => Some(ResourceKey::UpcomingLaunches),
            "past" => Some(ResourceKey::PastLaunches),
            "rockets" => Some(ResourceKey::Rockets),
            "payloads" => Some(ResourceKey::Payloads),
            "starlink" => Some(ResourceKey::Starlinks),
            _ => None,
        }
    }
}

/// Validated payload of one endpoint, collection or single item
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Launches(Vec<Launch>),
    Launch(Box<Launch>),
    Rockets(Vec<Rocket>),
    Rocket(Box<Rocket>),
    Payloads(Vec<Payload>),
    Payload(Box<Payload>),
    Starlinks(Vec<Starlink>),
    Starlink(Box<Starlink>),
}

impl Resource {
    /// Number of records held
    pub fn len(&self) -> usize {
        match self {
            Resource::Launches(v) => v.len(),
            Resource::Rockets(v) => v.len(),
            Resource::Payloads(v) => v.len(),
            Resource::Starlinks(v) => v.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Typed access to the records held by a [`Resource`]
pub trait FromResource: Clone {
    fn collection(resource: &Resource) -> Option<&[Self]>;
    fn item(resource: &Resource) -> Option<&Self>;
}

macro_rules! impl_from_resource {
    ($ty:ty, $many:ident, $one:ident) => {
        impl FromResource for $ty {
            fn collection(resource: &Resource) -> Option<&[Self]> {
                match resource {
                    Resource::$many(items) => Some(items.as_slice()),
                    _ => None,
                }
            }

            fn item(resource: &Resource) -> Option<&Self> {
                match resource {
                    Resource::$one(item) => Some(&**item),
                    _ => None,
                }
            }
        }
    };
}

impl_from_resource!(Launch, Launches, Launch);
impl_from_resource!(Rocket, Rockets, Rocket);
impl_from_resource!(Payload, Payloads, Payload);
impl_from_resource!(Starlink, Starlinks, Starlink);

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
