use crate::schema::{self, Shape, Validated};
use serde::{Deserialize, Serialize};

/// Starlink satellite with its latest position and SpaceTrack record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starlink {
    pub id: String,
    pub version: String,
    pub launch: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub height_km: Option<f64>,
    pub velocity_kms: Option<f64>,
    #[serde(rename = "spaceTrack")]
    pub space_track: SpaceTrack,
}

/// Orbital mean elements as published by Space-Track.org
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SpaceTrack {
    pub ccsds_omm_vers: String,
    pub comment: String,
    pub creation_date: String,
    pub originator: String,
    pub object_name: String,
    pub object_id: String,
    pub object_type: String,
    pub center_name: String,
    pub ref_frame: String,
    pub time_system: String,
    pub mean_element_theory: String,
    pub epoch: String,
    pub mean_motion: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ra_of_asc_node: f64,
    pub arg_of_pericenter: f64,
    pub mean_anomaly: f64,
    pub ephemeris_type: i64,
    pub classification_type: String,
    pub norad_cat_id: i64,
    pub element_set_no: i64,
    pub rev_at_epoch: i64,
    pub bstar: f64,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub semimajor_axis: f64,
    pub period: f64,
    pub apoapsis: f64,
    pub periapsis: f64,
    pub country_code: String,
    pub launch_date: String,
    pub site: String,
    /// 0 in orbit, 1 re-entered
    pub decayed: i64,
    pub decay_date: Option<String>,
    pub rcs_size: Option<String>,
    pub file: i64,
    pub gp_id: i64,
    #[serde(rename = "TLE_LINE0")]
    pub tle_line0: String,
    #[serde(rename = "TLE_LINE1")]
    pub tle_line1: String,
    #[serde(rename = "TLE_LINE2")]
    pub tle_line2: String,
}

/// Current position; all four values are known together or not at all
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub height_km: f64,
    pub velocity_kms: f64,
}

impl Starlink {
    pub fn position(&self) -> Option<Position> {
        Some(Position {
            latitude: self.latitude?,
            longitude: self.longitude?,
            height_km: self.height_km?,
            velocity_kms: self.velocity_kms?,
        })
    }

    /// Latitude, longitude and height are all known
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some() && self.height_km.is_some()
    }

    pub fn is_decayed(&self) -> bool {
        self.space_track.decayed == 1
    }

    pub fn norad_id(&self) -> i64 {
        self.space_track.norad_cat_id
    }

    pub fn object_name(&self) -> &str {
        &self.space_track.object_name
    }
}

impl Validated for Starlink {
    const NAME: &'static str = "starlink";
    const SHAPE: &'static Shape = &schema::STARLINK;
}
