use crate::schema::{self, Shape, Validated};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub launch: String,
    pub reused: bool,
    pub customers: Vec<String>,
    pub nationalities: Vec<String>,
    pub manufacturers: Vec<String>,
    pub mass_kg: Option<f64>,
    pub mass_lbs: Option<f64>,
    pub norad_ids: Option<Vec<i64>>,
    pub orbit: Option<String>,
    pub reference_system: Option<String>,
    pub regime: Option<String>,
    pub longitude: Option<f64>,
    pub semi_major_axis_km: Option<f64>,
    pub eccentricity: Option<f64>,
    pub periapsis_km: Option<f64>,
    pub apoapsis_km: Option<f64>,
    pub inclination_deg: Option<f64>,
    pub period_min: Option<f64>,
    pub lifespan_years: Option<f64>,
    pub epoch: Option<String>,
    pub mean_motion: Option<f64>,
    pub raan: Option<f64>,
    pub arg_of_pericenter: Option<f64>,
    pub mean_anomaly: Option<f64>,
    /// Only populated for Dragon missions
    pub dragon: Option<PayloadDragon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadDragon {
    pub capsule: Option<String>,
    pub mass_returned_kg: Option<f64>,
    pub mass_returned_lbs: Option<f64>,
    pub flight_time_sec: Option<f64>,
    pub manifest: Option<String>,
    pub water_landing: Option<bool>,
    pub land_landing: Option<bool>,
}

impl Payload {
    /// Mass usable for distribution stats: known and strictly positive
    pub fn positive_mass_kg(&self) -> Option<f64> {
        self.mass_kg.filter(|m| *m > 0.0 && m.is_finite())
    }
}

impl Validated for Payload {
    const NAME: &'static str = "payload";
    const SHAPE: &'static Shape = &schema::PAYLOAD;
}
