use crate::schema::{self, Shape, Validated};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub active: bool,
    pub stages: i64,
    pub boosters: i64,
    pub cost_per_launch: f64,
    pub success_rate_pct: f64,
    pub first_flight: String,
    pub country: String,
    pub company: String,
    pub wikipedia: String,
    pub description: String,
    pub height: Measurement,
    pub diameter: Measurement,
    pub mass: Mass,
    pub first_stage: FirstStage,
    pub second_stage: SecondStage,
    pub engines: Engines,
    pub landing_legs: LandingLegs,
    /// Capacity per target orbit, in upstream order
    pub payload_weights: Vec<PayloadWeight>,
    pub flickr_images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub meters: Option<f64>,
    pub feet: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub kg: f64,
    pub lb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thrust {
    #[serde(rename = "kN")]
    pub kn: f64,
    pub lbf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isp {
    pub sea_level: f64,
    pub vacuum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstStage {
    pub thrust_sea_level: Thrust,
    pub thrust_vacuum: Thrust,
    pub reusable: bool,
    pub engines: i64,
    pub fuel_amount_tons: f64,
    pub burn_time_sec: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeFairing {
    pub height: Measurement,
    pub diameter: Measurement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadConfig {
    pub composite_fairing: CompositeFairing,
    pub option_1: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondStage {
    pub thrust: Thrust,
    pub payloads: PayloadConfig,
    pub reusable: bool,
    pub engines: i64,
    pub fuel_amount_tons: f64,
    pub burn_time_sec: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engines {
    pub isp: Isp,
    pub thrust_sea_level: Thrust,
    pub thrust_vacuum: Thrust,
    pub number: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub layout: Option<String>,
    pub engine_loss_max: Option<f64>,
    pub propellant_1: String,
    pub propellant_2: String,
    pub thrust_to_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingLegs {
    pub number: i64,
    pub material: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadWeight {
    /// Orbit key, e.g. `leo`
    pub id: String,
    pub name: String,
    pub kg: f64,
    pub lb: f64,
}

impl Validated for Rocket {
    const NAME: &'static str = "rocket";
    const SHAPE: &'static Shape = &schema::ROCKET;
}
