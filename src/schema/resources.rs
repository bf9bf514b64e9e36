/// Declared shapes of the upstream resources
use super::{Field, Shape};

const NULLABLE_STRING: Shape = Shape::Nullable(&Shape::String);
const NULLABLE_NUMBER: Shape = Shape::Nullable(&Shape::Number);
const NULLABLE_INTEGER: Shape = Shape::Nullable(&Shape::Integer);
const NULLABLE_BOOL: Shape = Shape::Nullable(&Shape::Bool);
const STRINGS: Shape = Shape::Array(&Shape::String);

// Launch

const LAUNCH_CORE: Shape = Shape::Object(&[
    Field("core", NULLABLE_STRING),
    Field("flight", NULLABLE_INTEGER),
    Field("gridfins", NULLABLE_BOOL),
    Field("legs", NULLABLE_BOOL),
    Field("reused", NULLABLE_BOOL),
    Field("landing_attempt", NULLABLE_BOOL),
    Field("landing_success", NULLABLE_BOOL),
    Field("landing_type", NULLABLE_STRING),
    Field("landpad", NULLABLE_STRING),
]);

const FAIRINGS: Shape = Shape::Object(&[
    Field("reused", NULLABLE_BOOL),
    Field("recovery_attempt", NULLABLE_BOOL),
    Field("recovered", NULLABLE_BOOL),
    Field("ships", STRINGS),
]);

const PATCH: Shape = Shape::Object(&[
    Field("small", NULLABLE_STRING),
    Field("large", NULLABLE_STRING),
]);

const REDDIT: Shape = Shape::Object(&[
    Field("campaign", NULLABLE_STRING),
    Field("launch", NULLABLE_STRING),
    Field("media", NULLABLE_STRING),
    Field("recovery", NULLABLE_STRING),
]);

const FLICKR: Shape = Shape::Object(&[
    Field("small", STRINGS),
    Field("original", STRINGS),
]);

const LINKS: Shape = Shape::Object(&[
    Field("patch", Shape::Nullable(&PATCH)),
    Field("reddit", Shape::Nullable(&REDDIT)),
    Field("flickr", Shape::Nullable(&FLICKR)),
    Field("presskit", NULLABLE_STRING),
    Field("webcast", NULLABLE_STRING),
    Field("youtube_id", NULLABLE_STRING),
    Field("article", NULLABLE_STRING),
    Field("wikipedia", NULLABLE_STRING),
]);

const FAILURE: Shape = Shape::Object(&[
    Field("time", Shape::Integer),
    Field("altitude", NULLABLE_NUMBER),
    Field("reason", Shape::String),
]);

pub const LAUNCH: Shape = Shape::Object(&[
    Field("fairings", Shape::Nullable(&FAIRINGS)),
    Field("links", LINKS),
    Field("static_fire_date_utc", NULLABLE_STRING),
    Field("static_fire_date_unix", NULLABLE_INTEGER),
    Field("net", NULLABLE_BOOL),
    Field("window", NULLABLE_NUMBER),
    Field("rocket", Shape::String),
    Field("success", NULLABLE_BOOL),
    Field("failures", Shape::Array(&FAILURE)),
    Field("details", NULLABLE_STRING),
    Field("crew", STRINGS),
    Field("ships", STRINGS),
    Field("capsules", STRINGS),
    Field("payloads", STRINGS),
    Field("launchpad", Shape::String),
    Field("flight_number", Shape::Integer),
    Field("name", Shape::String),
    Field("date_utc", Shape::String),
    Field("date_unix", Shape::Integer),
    Field("date_local", Shape::String),
    Field(
        "date_precision",
        Shape::Enum(&["half", "quarter", "year", "month", "day", "hour"]),
    ),
    Field("upcoming", Shape::Bool),
    Field("cores", Shape::Array(&LAUNCH_CORE)),
    Field("auto_update", Shape::Bool),
    Field("tbd", Shape::Bool),
    Field("launch_library_id", NULLABLE_STRING),
    Field("id", Shape::String),
]);

// Rocket

const MEASUREMENT: Shape = Shape::Object(&[
    Field("meters", NULLABLE_NUMBER),
    Field("feet", NULLABLE_NUMBER),
]);

const MASS: Shape = Shape::Object(&[Field("kg", Shape::Number), Field("lb", Shape::Number)]);

const THRUST: Shape = Shape::Object(&[Field("kN", Shape::Number), Field("lbf", Shape::Number)]);

const ISP: Shape = Shape::Object(&[
    Field("sea_level", Shape::Number),
    Field("vacuum", Shape::Number),
]);

const FIRST_STAGE: Shape = Shape::Object(&[
    Field("thrust_sea_level", THRUST),
    Field("thrust_vacuum", THRUST),
    Field("reusable", Shape::Bool),
    Field("engines", Shape::Integer),
    Field("fuel_amount_tons", Shape::Number),
    Field("burn_time_sec", NULLABLE_NUMBER),
]);

const COMPOSITE_FAIRING: Shape = Shape::Object(&[
    Field("height", MEASUREMENT),
    Field("diameter", MEASUREMENT),
]);

const PAYLOAD_CONFIG: Shape = Shape::Object(&[
    Field("composite_fairing", COMPOSITE_FAIRING),
    Field("option_1", Shape::String),
]);

const SECOND_STAGE: Shape = Shape::Object(&[
    Field("thrust", THRUST),
    Field("payloads", PAYLOAD_CONFIG),
    Field("reusable", Shape::Bool),
    Field("engines", Shape::Integer),
    Field("fuel_amount_tons", Shape::Number),
    Field("burn_time_sec", NULLABLE_NUMBER),
]);

const ENGINES: Shape = Shape::Object(&[
    Field("isp", ISP),
    Field("thrust_sea_level", THRUST),
    Field("thrust_vacuum", THRUST),
    Field("number", Shape::Integer),
    Field("type", Shape::String),
    Field("version", Shape::String),
    Field("layout", NULLABLE_STRING),
    Field("engine_loss_max", NULLABLE_NUMBER),
    Field("propellant_1", Shape::String),
    Field("propellant_2", Shape::String),
    Field("thrust_to_weight", Shape::Number),
]);

const LANDING_LEGS: Shape = Shape::Object(&[
    Field("number", Shape::Integer),
    Field("material", NULLABLE_STRING),
]);

const PAYLOAD_WEIGHT: Shape = Shape::Object(&[
    Field("id", Shape::String),
    Field("name", Shape::String),
    Field("kg", Shape::Number),
    Field("lb", Shape::Number),
]);

pub const ROCKET: Shape = Shape::Object(&[
    Field("height", MEASUREMENT),
    Field("diameter", MEASUREMENT),
    Field("mass", MASS),
    Field("first_stage", FIRST_STAGE),
    Field("second_stage", SECOND_STAGE),
    Field("engines", ENGINES),
    Field("landing_legs", LANDING_LEGS),
    Field("payload_weights", Shape::Array(&PAYLOAD_WEIGHT)),
    Field("flickr_images", STRINGS),
    Field("name", Shape::String),
    Field("type", Shape::String),
    Field("active", Shape::Bool),
    Field("stages", Shape::Integer),
    Field("boosters", Shape::Integer),
    Field("cost_per_launch", Shape::Number),
    Field("success_rate_pct", Shape::Number),
    Field("first_flight", Shape::String),
    Field("country", Shape::String),
    Field("company", Shape::String),
    Field("wikipedia", Shape::String),
    Field("description", Shape::String),
    Field("id", Shape::String),
]);

// Payload

const DRAGON: Shape = Shape::Object(&[
    Field("capsule", NULLABLE_STRING),
    Field("mass_returned_kg", NULLABLE_NUMBER),
    Field("mass_returned_lbs", NULLABLE_NUMBER),
    Field("flight_time_sec", NULLABLE_NUMBER),
    Field("manifest", NULLABLE_STRING),
    Field("water_landing", NULLABLE_BOOL),
    Field("land_landing", NULLABLE_BOOL),
]);

pub const PAYLOAD: Shape = Shape::Object(&[
    Field("id", Shape::String),
    Field("name", Shape::String),
    Field("type", Shape::String),
    Field("launch", Shape::String),
    Field("reused", Shape::Bool),
    Field("customers", STRINGS),
    Field("nationalities", STRINGS),
    Field("manufacturers", STRINGS),
    Field("mass_kg", NULLABLE_NUMBER),
    Field("mass_lbs", NULLABLE_NUMBER),
    Field("norad_ids", Shape::Nullable(&Shape::Array(&Shape::Integer))),
    Field("orbit", NULLABLE_STRING),
    Field("reference_system", NULLABLE_STRING),
    Field("regime", NULLABLE_STRING),
    Field("longitude", NULLABLE_NUMBER),
    Field("semi_major_axis_km", NULLABLE_NUMBER),
    Field("eccentricity", NULLABLE_NUMBER),
    Field("periapsis_km", NULLABLE_NUMBER),
    Field("apoapsis_km", NULLABLE_NUMBER),
    Field("inclination_deg", NULLABLE_NUMBER),
    Field("period_min", NULLABLE_NUMBER),
    Field("lifespan_years", NULLABLE_NUMBER),
    Field("epoch", NULLABLE_STRING),
    Field("mean_motion", NULLABLE_NUMBER),
    Field("raan", NULLABLE_NUMBER),
    Field("arg_of_pericenter", NULLABLE_NUMBER),
    Field("mean_anomaly", NULLABLE_NUMBER),
    Field("dragon", Shape::Nullable(&DRAGON)),
]);

// Starlink

const SPACE_TRACK: Shape = Shape::Object(&[
    Field("CCSDS_OMM_VERS", Shape::String),
    Field("COMMENT", Shape::String),
    Field("CREATION_DATE", Shape::String),
    Field("ORIGINATOR", Shape::String),
    Field("OBJECT_NAME", Shape::String),
    Field("OBJECT_ID", Shape::String),
    Field("OBJECT_TYPE", Shape::String),
    Field("CENTER_NAME", Shape::String),
    Field("REF_FRAME", Shape::String),
    Field("TIME_SYSTEM", Shape::String),
    Field("MEAN_ELEMENT_THEORY", Shape::String),
    Field("EPOCH", Shape::String),
    Field("MEAN_MOTION", Shape::Number),
    Field("ECCENTRICITY", Shape::Number),
    Field("INCLINATION", Shape::Number),
    Field("RA_OF_ASC_NODE", Shape::Number),
    Field("ARG_OF_PERICENTER", Shape::Number),
    Field("MEAN_ANOMALY", Shape::Number),
    Field("EPHEMERIS_TYPE", Shape::Integer),
    Field("CLASSIFICATION_TYPE", Shape::String),
    Field("NORAD_CAT_ID", Shape::Integer),
    Field("ELEMENT_SET_NO", Shape::Integer),
    Field("REV_AT_EPOCH", Shape::Integer),
    Field("BSTAR", Shape::Number),
    Field("MEAN_MOTION_DOT", Shape::Number),
    Field("MEAN_MOTION_DDOT", Shape::Number),
    Field("SEMIMAJOR_AXIS", Shape::Number),
    Field("PERIOD", Shape::Number),
    Field("APOAPSIS", Shape::Number),
    Field("PERIAPSIS", Shape::Number),
    Field("COUNTRY_CODE", Shape::String),
    Field("LAUNCH_DATE", Shape::String),
    Field("SITE", Shape::String),
    Field("DECAYED", Shape::Integer),
    Field("DECAY_DATE", NULLABLE_STRING),
    Field("RCS_SIZE", NULLABLE_STRING),
    Field("FILE", Shape::Integer),
    Field("GP_ID", Shape::Integer),
    Field("TLE_LINE0", Shape::String),
    Field("TLE_LINE1", Shape::String),
    Field("TLE_LINE2", Shape::String),
]);

pub const STARLINK: Shape = Shape::Object(&[
    Field("version", Shape::String),
    Field("launch", Shape::String),
    Field("longitude", NULLABLE_NUMBER),
    Field("latitude", NULLABLE_NUMBER),
    Field("height_km", NULLABLE_NUMBER),
    Field("velocity_kms", NULLABLE_NUMBER),
    Field("id", Shape::String),
    Field("spaceTrack", SPACE_TRACK),
]);
