/// Upstream-shaped JSON records for tests
use super::{Launch, Payload, Rocket, Starlink};
use crate::schema;
use serde_json::{json, Value};

pub fn launch_json(id: &str, date_utc: &str, upcoming: bool, success: Option<bool>) -> Value {
    json!({
        "fairings": {"reused": false, "recovery_attempt": false, "recovered": null, "ships": []},
        "links": {
            "patch": {"small": "https://images2.imgbox.com/3c/0e/T8iJcSN3_o.png", "large": null},
            "reddit": {"campaign": null, "launch": null, "media": null, "recovery": null},
            "flickr": {"small": [], "original": []},
            "presskit": null,
            "webcast": "https://www.youtube.com/watch?v=0a_00nJ_Y88",
            "youtube_id": "0a_00nJ_Y88",
            "article": null,
            "wikipedia": "https://en.wikipedia.org/wiki/DemoSat"
        },
        "static_fire_date_utc": null,
        "static_fire_date_unix": null,
        "net": false,
        "window": 0,
        "rocket": "5e9d0d95eda69955f709d1eb",
        "success": success,
        "failures": [],
        "details": null,
        "crew": [],
        "ships": [],
        "capsules": [],
        "payloads": [format!("{}-payload", id)],
        "launchpad": "5e9e4502f5090995de566f86",
        "flight_number": 1,
        "name": format!("Mission {}", id),
        "date_utc": date_utc,
        "date_unix": 1143239400,
        "date_local": "2006-03-25T10:30:00+12:00",
        "date_precision": "hour",
        "upcoming": upcoming,
        "cores": [{
            "core": "5e9e289df35918033d3b2623",
            "flight": 1,
            "gridfins": false,
            "legs": false,
            "reused": false,
            "landing_attempt": false,
            "landing_success": null,
            "landing_type": null,
            "landpad": null
        }],
        "auto_update": true,
        "tbd": false,
        "launch_library_id": null,
        "id": id
    })
}

pub fn launch(id: &str, date_utc: &str, upcoming: bool, success: Option<bool>) -> Launch {
    schema::parse_one(launch_json(id, date_utc, upcoming, success)).expect("launch fixture")
}

pub fn launch_on_rocket(id: &str, date_utc: &str, rocket: &str, success: Option<bool>) -> Launch {
    let mut value = launch_json(id, date_utc, false, success);
    value["rocket"] = json!(rocket);
    schema::parse_one(value).expect("launch fixture")
}

pub fn payload_json(id: &str, launch: &str, mass_kg: Option<f64>) -> Value {
    json!({
        "id": id,
        "name": format!("Payload {}", id),
        "type": "Satellite",
        "launch": launch,
        "reused": false,
        "customers": ["DARPA"],
        "nationalities": ["United States"],
        "manufacturers": ["SSTL"],
        "mass_kg": mass_kg,
        "mass_lbs": mass_kg.map(|kg| kg * 2.20462),
        "norad_ids": [],
        "orbit": "LEO",
        "reference_system": "geocentric",
        "regime": "low-earth",
        "longitude": null,
        "semi_major_axis_km": null,
        "eccentricity": null,
        "periapsis_km": 400,
        "apoapsis_km": 500,
        "inclination_deg": 39,
        "period_min": null,
        "lifespan_years": null,
        "epoch": null,
        "mean_motion": null,
        "raan": null,
        "arg_of_pericenter": null,
        "mean_anomaly": null,
        "dragon": {
            "capsule": null,
            "mass_returned_kg": null,
            "mass_returned_lbs": null,
            "flight_time_sec": null,
            "manifest": null,
            "water_landing": null,
            "land_landing": null
        }
    })
}

pub fn payload(id: &str, launch: &str, mass_kg: Option<f64>) -> Payload {
    schema::parse_one(payload_json(id, launch, mass_kg)).expect("payload fixture")
}

pub fn rocket_json(id: &str, name: &str, active: bool) -> Value {
    json!({
        "height": {"meters": 70, "feet": 229.6},
        "diameter": {"meters": 3.7, "feet": 12},
        "mass": {"kg": 549054, "lb": 1207920},
        "first_stage": {
            "thrust_sea_level": {"kN": 7607, "lbf": 1710000},
            "thrust_vacuum": {"kN": 8227, "lbf": 1849500},
            "reusable": true,
            "engines": 9,
            "fuel_amount_tons": 385,
            "burn_time_sec": 162
        },
        "second_stage": {
            "thrust": {"kN": 934, "lbf": 210000},
            "payloads": {
                "composite_fairing": {
                    "height": {"meters": 13.1, "feet": 43},
                    "diameter": {"meters": 5.2, "feet": 17.1}
                },
                "option_1": "dragon"
            },
            "reusable": false,
            "engines": 1,
            "fuel_amount_tons": 90,
            "burn_time_sec": 397
        },
        "engines": {
            "isp": {"sea_level": 288, "vacuum": 312},
            "thrust_sea_level": {"kN": 845, "lbf": 190000},
            "thrust_vacuum": {"kN": 914, "lbf": 205500},
            "number": 9,
            "type": "merlin",
            "version": "1D+",
            "layout": "octaweb",
            "engine_loss_max": 2,
            "propellant_1": "liquid oxygen",
            "propellant_2": "RP-1 kerosene",
            "thrust_to_weight": 180.1
        },
        "landing_legs": {"number": 4, "material": "carbon fiber"},
        "payload_weights": [
            {"id": "leo", "name": "Low Earth Orbit", "kg": 22800, "lb": 50265},
            {"id": "gto", "name": "Geosynchronous Transfer Orbit", "kg": 8300, "lb": 18300}
        ],
        "flickr_images": ["https://farm1.staticflickr.com/929/28787338307_3453a11a77_b.jpg"],
        "name": name,
        "type": "rocket",
        "active": active,
        "stages": 2,
        "boosters": 0,
        "cost_per_launch": 50000000,
        "success_rate_pct": 98,
        "first_flight": "2010-06-04",
        "country": "United States",
        "company": "SpaceX",
        "wikipedia": "https://en.wikipedia.org/wiki/Falcon_9",
        "description": "Two-stage orbital launch vehicle.",
        "id": id
    })
}

pub fn rocket(id: &str, name: &str, active: bool) -> Rocket {
    schema::parse_one(rocket_json(id, name, active)).expect("rocket fixture")
}

pub fn starlink_json(id: &str, name: &str, norad: i64, height_km: Option<f64>, decayed: i64) -> Value {
    let (latitude, longitude, velocity) = match height_km {
        Some(_) => (Some(12.5), Some(-45.25), Some(7.6)),
        None => (None, None, None),
    };
    let space_track = json!({
        "CCSDS_OMM_VERS": "2.0",
        "COMMENT": "GENERATED VIA SPACE-TRACK.ORG API",
        "CREATION_DATE": "2020-10-13T04:16:08",
        "ORIGINATOR": "18 SPCS",
        "OBJECT_NAME": name,
        "OBJECT_ID": "2019-074A",
        "OBJECT_TYPE": "PAYLOAD",
        "CENTER_NAME": "EARTH",
        "REF_FRAME": "TEME",
        "TIME_SYSTEM": "UTC",
        "MEAN_ELEMENT_THEORY": "SGP4",
        "EPOCH": "2020-10-13T02:56:59.566560",
        "MEAN_MOTION": 15.06420179,
        "ECCENTRICITY": 0.0001868,
        "INCLINATION": 53.056,
        "RA_OF_ASC_NODE": 213.4641,
        "ARG_OF_PERICENTER": 100.8603,
        "MEAN_ANOMALY": 259.2597,
        "EPHEMERIS_TYPE": 0,
        "CLASSIFICATION_TYPE": "U",
        "NORAD_CAT_ID": norad,
        "ELEMENT_SET_NO": 999,
        "REV_AT_EPOCH": 5848,
        "BSTAR": -0.00035,
        "MEAN_MOTION_DOT": -0.00015464,
        "MEAN_MOTION_DDOT": 0,
        "SEMIMAJOR_AXIS": 6931.827,
        "PERIOD": 95.59,
        "APOAPSIS": 554.987,
        "PERIAPSIS": 552.396,
        "COUNTRY_CODE": "US",
        "LAUNCH_DATE": "2019-11-11",
        "SITE": "AFETR",
        "DECAYED": decayed,
        "DECAY_DATE": null,
        "RCS_SIZE": "LARGE",
        "FILE": 2850,
        "GP_ID": 164114999,
        "TLE_LINE0": format!("0 {}", name),
        "TLE_LINE1": "1 44713U 19074A   20287.12290007 -.00015464  00000-0 -35010-3 0  9990",
        "TLE_LINE2": "2 44713  53.0560 213.4641 0001868 100.8603 259.2597 15.06420179 58480"
    });
    json!({
        "version": "v1.0",
        "launch": "5eb87d46ffd86e000604b388",
        "longitude": longitude,
        "latitude": latitude,
        "height_km": height_km,
        "velocity_kms": velocity,
        "id": id,
        "spaceTrack": space_track
    })
}

pub fn starlink(id: &str, name: &str, norad: i64, height_km: Option<f64>, decayed: i64) -> Starlink {
    schema::parse_one(starlink_json(id, name, norad, height_km, decayed)).expect("starlink fixture")
}
