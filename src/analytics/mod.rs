/// Launch, payload and satellite aggregations
use crate::domain::{Launch, Payload, Rocket, Starlink};
use crate::utils::{end_of_day, round1};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BUCKET_WIDTH_KG: f64 = 1000.0;

/// Outcome counts over launches that already happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuccessStats {
    pub successful: usize,
    pub failed: usize,
    pub unknown: usize,
    /// Percent of known outcomes, one decimal
    pub success_rate: f64,
    pub total: usize,
}

/// Upcoming launches are excluded; unknown outcomes count toward `total`
/// but not toward the rate
pub fn success_rate<'a>(launches: impl IntoIterator<Item = &'a Launch>) -> SuccessStats {
    let mut stats = SuccessStats {
        successful: 0,
        failed: 0,
        unknown: 0,
        success_rate: 0.0,
        total: 0,
    };

    for launch in launches.into_iter().filter(|l| !l.upcoming) {
        stats.total += 1;
        match launch.success {
            Some(true) => stats.successful += 1,
            Some(false) => stats.failed += 1,
            None => stats.unknown += 1,
        }
    }

    let known = stats.successful + stats.failed;
    if known > 0 {
        stats.success_rate = round1(stats.successful as f64 / known as f64 * 100.0);
    }
    stats
}

/// Badge tier for a success rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessTier {
    Success,
    Warning,
    Failure,
}

impl SuccessTier {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 90.0 {
            SuccessTier::Success
        } else if rate >= 70.0 {
            SuccessTier::Warning
        } else {
            SuccessTier::Failure
        }
    }
}

/// Calendar period used to bucket launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeGrouping {
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeGrouping {
    /// Start of the period containing `dt` and its display key
    fn period_of(self, dt: DateTime<Utc>) -> Option<(DateTime<Utc>, String)> {
        let year = dt.year();
        let (month, key) = match self {
            TimeGrouping::Month => (dt.month(), format!("{:04}-{:02}", year, dt.month())),
            TimeGrouping::Quarter => {
                let quarter = dt.month0() / 3 + 1;
                ((quarter - 1) * 3 + 1, format!("{:04}-Q{}", year, quarter))
            }
            TimeGrouping::Year => (1, format!("{:04}", year)),
        };
        let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
        Some((start, key))
    }
}

impl FromStr for TimeGrouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(TimeGrouping::Month),
            "quarter" => Ok(TimeGrouping::Quarter),
            "year" => Ok(TimeGrouping::Year),
            other => Err(format!("unknown grouping '{}'", other)),
        }
    }
}

impl fmt::Display for TimeGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeGrouping::Month => "month",
            TimeGrouping::Quarter => "quarter",
            TimeGrouping::Year => "year",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBucket {
    /// `2020-01`, `2020-Q1` or `2020`
    pub period: String,
    pub period_start: DateTime<Utc>,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Past launches per calendar period (UTC), ascending, without empty periods
pub fn group_by_time<'a>(
    launches: impl IntoIterator<Item = &'a Launch>,
    grouping: TimeGrouping,
) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<DateTime<Utc>, TimeBucket> = BTreeMap::new();

    for launch in launches.into_iter().filter(|l| !l.upcoming) {
        let Some((start, period)) = launch.launched_at().and_then(|dt| grouping.period_of(dt))
        else {
            continue;
        };
        let bucket = buckets.entry(start).or_insert_with(|| TimeBucket {
            period,
            period_start: start,
            total: 0,
            successful: 0,
            failed: 0,
        });
        bucket.total += 1;
        match launch.success {
            Some(true) => bucket.successful += 1,
            Some(false) => bucket.failed += 1,
            None => {}
        }
    }

    buckets.into_values().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassBucket {
    /// Label in tonnes, e.g. `0-1k`
    pub range: String,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Histogram of known positive payload masses in half-open buckets of
/// `bucket_width_kg` starting at zero. The heaviest payload always lands in
/// the last bucket, even when it sits exactly on that bucket's upper bound.
pub fn mass_distribution<'a>(
    payloads: impl IntoIterator<Item = &'a Payload>,
    bucket_width_kg: f64,
) -> Vec<MassBucket> {
    if !(bucket_width_kg.is_finite() && bucket_width_kg > 0.0) {
        return Vec::new();
    }

    let masses: Vec<f64> = payloads
        .into_iter()
        .filter_map(Payload::positive_mass_kg)
        .collect();
    if masses.is_empty() {
        return Vec::new();
    }
    let max_mass = masses.iter().copied().fold(0.0_f64, f64::max);

    let bucket_count = (max_mass / bucket_width_kg).ceil() as usize;
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for mass in masses {
        let index = ((mass / bucket_width_kg).floor() as usize).min(bucket_count - 1);
        *counts.entry(index).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(index, count)| {
            let min = index as f64 * bucket_width_kg;
            let max = (index + 1) as f64 * bucket_width_kg;
            MassBucket {
                range: format!("{}-{}k", min / 1000.0, max / 1000.0),
                min,
                max,
                count,
            }
        })
        .collect()
}

/// Launches dated within `[start, end of day(end)]`; a missing bound is open.
///
/// Launches whose date cannot be parsed are never excluded.
pub fn filter_by_date_range<'a>(
    launches: &'a [Launch],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<&'a Launch> {
    let end = end.map(end_of_day);
    launches
        .iter()
        .filter(|launch| {
            let Some(at) = launch.launched_at() else {
                return true;
            };
            start.map_or(true, |s| at >= s) && end.map_or(true, |e| at <= e)
        })
        .collect()
}

/// Launches flown on any of `rocket_ids`; an empty set keeps everything
pub fn filter_by_rockets<'a>(launches: &[&'a Launch], rocket_ids: &[String]) -> Vec<&'a Launch> {
    if rocket_ids.is_empty() {
        return launches.to_vec();
    }
    launches
        .iter()
        .copied()
        .filter(|l| rocket_ids.iter().any(|id| *id == l.rocket))
        .collect()
}

/// Distinct rocket ids in order of first appearance
pub fn rocket_ids_from_launches(launches: &[Launch]) -> Vec<String> {
    let mut seen = HashSet::new();
    launches
        .iter()
        .filter(|l| !l.rocket.is_empty())
        .filter(|l| seen.insert(l.rocket.as_str()))
        .map(|l| l.rocket.clone())
        .collect()
}

/// Payloads carried by any of `launches`
pub fn payloads_for_launches<'a>(payloads: &'a [Payload], launches: &[&Launch]) -> Vec<&'a Payload> {
    let ids: HashSet<&str> = launches.iter().map(|l| l.id.as_str()).collect();
    payloads
        .iter()
        .filter(|p| ids.contains(p.launch.as_str()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatelliteStatus {
    #[default]
    All,
    /// Still in orbit
    Active,
    Deorbited,
}

impl FromStr for SatelliteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(SatelliteStatus::All),
            "active" => Ok(SatelliteStatus::Active),
            "deorbited" => Ok(SatelliteStatus::Deorbited),
            other => Err(format!("unknown satellite status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteFilter {
    pub status: SatelliteStatus,
    /// Inclusive altitude bounds in km
    pub altitude_range: (f64, f64),
    pub search: String,
}

impl Default for SatelliteFilter {
    fn default() -> Self {
        Self {
            status: SatelliteStatus::All,
            altitude_range: (0.0, 1000.0),
            search: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatelliteSelection<'a> {
    pub filtered: Vec<&'a Starlink>,
    pub total_count: usize,
    /// Satellites with latitude, longitude and height known
    pub with_coordinates_count: usize,
}

/// Satellites with a known position that pass status, altitude and search
pub fn filter_satellites<'a>(
    satellites: &'a [Starlink],
    filter: &SatelliteFilter,
) -> SatelliteSelection<'a> {
    let (min_km, max_km) = filter.altitude_range;
    let needle = filter.search.to_lowercase();

    let mut with_coordinates_count = 0;
    let mut filtered = Vec::new();
    for sat in satellites {
        if !sat.has_coordinates() {
            continue;
        }
        with_coordinates_count += 1;

        let status_ok = match filter.status {
            SatelliteStatus::All => true,
            SatelliteStatus::Active => sat.space_track.decayed == 0,
            SatelliteStatus::Deorbited => sat.is_decayed(),
        };
        let altitude_ok = sat.height_km.is_some_and(|h| h >= min_km && h <= max_km);
        let search_ok = filter.search.is_empty()
            || sat.object_name().to_lowercase().contains(&needle)
            || sat.norad_id().to_string().contains(filter.search.as_str());

        if status_ok && altitude_ok && search_ok {
            filtered.push(sat);
        }
    }

    SatelliteSelection {
        filtered,
        total_count: satellites.len(),
        with_coordinates_count,
    }
}

/// Headline numbers for the dashboard landing view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HomepageStats {
    /// Launches that already happened
    pub total_launches: usize,
    pub success_rate: f64,
    pub total_payload_mass_tonnes: f64,
    pub active_rockets: usize,
}

pub fn homepage_stats<'a>(
    launches: impl IntoIterator<Item = &'a Launch>,
    payloads: impl IntoIterator<Item = &'a Payload>,
    rockets: impl IntoIterator<Item = &'a Rocket>,
) -> HomepageStats {
    let stats = success_rate(launches);
    let total_kg: f64 = payloads.into_iter().filter_map(|p| p.mass_kg).sum();

    HomepageStats {
        total_launches: stats.total,
        success_rate: stats.success_rate,
        total_payload_mass_tonnes: round1(total_kg / 1000.0),
        active_rockets: rockets.into_iter().filter(|r| r.active).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::utils::parse_timestamp;

    fn past(id: &str, date: &str, success: Option<bool>) -> Launch {
        fixtures::launch(id, date, false, success)
    }

    #[test]
    fn test_success_rate_scenario() {
        let launches = vec![
            past("a", "2020-01-01T00:00:00.000Z", Some(true)),
            past("b", "2020-02-01T00:00:00.000Z", Some(false)),
            fixtures::launch("c", "2030-01-01T00:00:00.000Z", true, None),
        ];

        assert_eq!(
            success_rate(&launches),
            SuccessStats {
                successful: 1,
                failed: 1,
                unknown: 0,
                success_rate: 50.0,
                total: 2,
            }
        );
    }

    #[test]
    fn test_success_rate_empty() {
        let none: Vec<Launch> = Vec::new();
        let stats = success_rate(&none);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_success_rate_unknowns_only() {
        let launches = vec![
            past("a", "2020-01-01T00:00:00.000Z", None),
            past("b", "2020-01-02T00:00:00.000Z", None),
        ];
        let stats = success_rate(&launches);
        assert_eq!(stats.unknown, 2);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_success_rate_counts_add_up() {
        let launches = vec![
            past("a", "2020-01-01T00:00:00.000Z", Some(true)),
            past("b", "2020-01-02T00:00:00.000Z", Some(true)),
            past("c", "2020-01-03T00:00:00.000Z", Some(false)),
            past("d", "2020-01-04T00:00:00.000Z", None),
            fixtures::launch("e", "2030-01-01T00:00:00.000Z", true, None),
        ];
        let stats = success_rate(&launches);
        assert_eq!(stats.successful + stats.failed + stats.unknown, stats.total);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.success_rate, 66.7);
    }

    #[test]
    fn test_success_tier() {
        assert_eq!(SuccessTier::from_rate(97.5), SuccessTier::Success);
        assert_eq!(SuccessTier::from_rate(90.0), SuccessTier::Success);
        assert_eq!(SuccessTier::from_rate(70.0), SuccessTier::Warning);
        assert_eq!(SuccessTier::from_rate(69.9), SuccessTier::Failure);
    }

    #[test]
    fn test_group_by_month_sorted() {
        let launches = vec![
            past("a", "2020-03-15T10:00:00.000Z", Some(true)),
            past("b", "2020-01-07T02:19:00.000Z", Some(false)),
            past("c", "2020-01-29T14:07:00.000Z", Some(true)),
            past("d", "2020-03-01T00:00:00.000Z", None),
            fixtures::launch("e", "2020-02-01T00:00:00.000Z", true, None),
        ];

        let buckets = group_by_time(&launches, TimeGrouping::Month);

        let periods: Vec<&str> = buckets.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["2020-01", "2020-03"]);
        assert_eq!(buckets[0].total, 2);
        assert_eq!(buckets[0].successful, 1);
        assert_eq!(buckets[0].failed, 1);
        assert_eq!(buckets[1].total, 2);
        assert_eq!(buckets[1].successful, 1);
        assert_eq!(buckets[1].failed, 0);
        assert_eq!(
            buckets[1].period_start,
            parse_timestamp("2020-03-01T00:00:00Z").unwrap()
        );
        let total: usize = buckets.iter().map(|b| b.total).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_group_by_quarter_and_year() {
        let launches = vec![
            past("a", "2019-12-31T23:00:00.000Z", Some(true)),
            past("b", "2020-02-10T00:00:00.000Z", Some(true)),
            past("c", "2020-05-10T00:00:00.000Z", Some(true)),
            past("d", "2020-06-30T00:00:00.000Z", Some(false)),
        ];

        let quarters = group_by_time(&launches, TimeGrouping::Quarter);
        let periods: Vec<&str> = quarters.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["2019-Q4", "2020-Q1", "2020-Q2"]);
        assert_eq!(quarters[2].total, 2);
        assert_eq!(
            quarters[2].period_start,
            parse_timestamp("2020-04-01").unwrap()
        );

        let years = group_by_time(&launches, TimeGrouping::Year);
        let periods: Vec<&str> = years.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["2019", "2020"]);
        assert_eq!(years[1].total, 3);
    }

    #[test]
    fn test_group_by_time_skips_unparseable_dates() {
        let launches = vec![
            past("a", "not a date", Some(true)),
            past("b", "2020-01-01T00:00:00.000Z", Some(true)),
        ];
        let buckets = group_by_time(&launches, TimeGrouping::Year);
        assert_eq!(buckets.len(), 1);
        assert!(group_by_time(Vec::<&Launch>::new(), TimeGrouping::Month).is_empty());
    }

    #[test]
    fn test_time_grouping_parse() {
        assert_eq!("Quarter".parse::<TimeGrouping>(), Ok(TimeGrouping::Quarter));
        assert!("week".parse::<TimeGrouping>().is_err());
        assert_eq!(TimeGrouping::Year.to_string(), "year");
    }

    #[test]
    fn test_mass_distribution_scenario() {
        let payloads = vec![
            fixtures::payload("p1", "l1", Some(500.0)),
            fixtures::payload("p2", "l1", Some(1500.0)),
            fixtures::payload("p3", "l2", Some(999.0)),
        ];

        let buckets = mass_distribution(&payloads, DEFAULT_BUCKET_WIDTH_KG);

        assert_eq!(
            buckets,
            vec![
                MassBucket {
                    range: "0-1k".to_string(),
                    min: 0.0,
                    max: 1000.0,
                    count: 2,
                },
                MassBucket {
                    range: "1-2k".to_string(),
                    min: 1000.0,
                    max: 2000.0,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_mass_distribution_max_lands_in_last_bucket() {
        let payloads = vec![
            fixtures::payload("p1", "l1", Some(100.0)),
            fixtures::payload("p2", "l1", Some(3000.0)),
        ];

        let buckets = mass_distribution(&payloads, 1000.0);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].range, "2-3k");
        assert_eq!(buckets[1].count, 1);
        assert!(buckets.iter().all(|b| b.count > 0));
    }

    #[test]
    fn test_mass_distribution_ignores_unknown_and_zero_mass() {
        let payloads = vec![
            fixtures::payload("p1", "l1", None),
            fixtures::payload("p2", "l1", Some(0.0)),
        ];
        assert!(mass_distribution(&payloads, 1000.0).is_empty());
        assert!(mass_distribution(Vec::<&Payload>::new(), 1000.0).is_empty());
    }

    #[test]
    fn test_mass_distribution_fractional_width_labels() {
        let payloads = vec![fixtures::payload("p1", "l1", Some(700.0))];
        let buckets = mass_distribution(&payloads, 500.0);
        assert_eq!(buckets[0].range, "0.5-1k");
        assert!(mass_distribution(&payloads, 0.0).is_empty());
    }

    #[test]
    fn test_filter_by_date_range_includes_whole_end_day() {
        let launches = vec![
            past("early", "2020-05-29T23:59:59.000Z", Some(true)),
            past("start", "2020-05-30T00:00:00.000Z", Some(true)),
            past("late", "2020-06-01T23:59:59.000Z", Some(true)),
            past("after", "2020-06-02T00:00:00.000Z", Some(true)),
        ];
        let start = parse_timestamp("2020-05-30");
        let end = parse_timestamp("2020-06-01");

        let kept: Vec<&str> = filter_by_date_range(&launches, start, end)
            .iter()
            .map(|l| l.id.as_str())
            .collect();

        assert_eq!(kept, vec!["start", "late"]);
    }

    #[test]
    fn test_filter_by_date_range_launch_exactly_at_end() {
        let launches = vec![past("a", "2020-06-01T00:00:00.000Z", None)];
        let kept = filter_by_date_range(&launches, None, parse_timestamp("2020-06-01"));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_filter_by_date_range_open_bounds() {
        let launches = vec![
            past("a", "2006-03-24T22:30:00.000Z", None),
            past("b", "2022-12-01T00:00:00.000Z", None),
            past("c", "unknown", None),
        ];
        assert_eq!(filter_by_date_range(&launches, None, None).len(), 3);

        let kept = filter_by_date_range(&launches, parse_timestamp("2010-01-01"), None);
        let ids: Vec<&str> = kept.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_rocket_ids_and_filter() {
        let launches = vec![
            fixtures::launch_on_rocket("a", "2020-01-01T00:00:00.000Z", "falcon9", Some(true)),
            fixtures::launch_on_rocket("b", "2020-01-02T00:00:00.000Z", "falconheavy", Some(true)),
            fixtures::launch_on_rocket("c", "2020-01-03T00:00:00.000Z", "falcon9", Some(false)),
        ];

        assert_eq!(
            rocket_ids_from_launches(&launches),
            vec!["falcon9".to_string(), "falconheavy".to_string()]
        );

        let all: Vec<&Launch> = launches.iter().collect();
        assert_eq!(filter_by_rockets(&all, &[]).len(), 3);
        let heavy = filter_by_rockets(&all, &["falconheavy".to_string()]);
        assert_eq!(heavy.len(), 1);
        assert_eq!(heavy[0].id, "b");
    }

    #[test]
    fn test_payloads_for_launches() {
        let launches = vec![past("l1", "2020-01-01T00:00:00.000Z", Some(true))];
        let payloads = vec![
            fixtures::payload("p1", "l1", Some(100.0)),
            fixtures::payload("p2", "l2", Some(200.0)),
        ];
        let selected: Vec<&Launch> = launches.iter().collect();

        let kept = payloads_for_launches(&payloads, &selected);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "p1");
    }

    #[test]
    fn test_filter_satellites_scenario() {
        let satellites = vec![
            fixtures::starlink("s1", "STARLINK-1", 44713, Some(450.0), 0),
            fixtures::starlink("s2", "STARLINK-2", 44714, Some(550.0), 0),
            fixtures::starlink("s3", "STARLINK-3", 44715, Some(610.0), 1),
        ];
        let filter = SatelliteFilter {
            status: SatelliteStatus::Active,
            altitude_range: (500.0, 600.0),
            search: String::new(),
        };

        let selection = filter_satellites(&satellites, &filter);

        assert_eq!(selection.filtered.len(), 1);
        assert_eq!(selection.filtered[0].id, "s2");
        assert_eq!(selection.total_count, 3);
        assert_eq!(selection.with_coordinates_count, 3);
    }

    #[test]
    fn test_filter_satellites_excludes_missing_position() {
        let satellites = vec![
            fixtures::starlink("s1", "STARLINK-1", 44713, None, 0),
            fixtures::starlink("s2", "STARLINK-2", 44714, Some(550.0), 1),
        ];

        let selection = filter_satellites(&satellites, &SatelliteFilter::default());

        assert_eq!(selection.total_count, 2);
        assert_eq!(selection.with_coordinates_count, 1);
        assert_eq!(selection.filtered.len(), 1);
        assert_eq!(selection.filtered[0].id, "s2");

        let deorbited = SatelliteFilter {
            status: SatelliteStatus::Deorbited,
            ..SatelliteFilter::default()
        };
        assert_eq!(filter_satellites(&satellites, &deorbited).filtered.len(), 1);
    }

    #[test]
    fn test_filter_satellites_altitude_bounds_inclusive() {
        let satellites = vec![
            fixtures::starlink("s1", "STARLINK-1", 1, Some(500.0), 0),
            fixtures::starlink("s2", "STARLINK-2", 2, Some(600.0), 0),
        ];
        let filter = SatelliteFilter {
            altitude_range: (500.0, 600.0),
            ..SatelliteFilter::default()
        };
        assert_eq!(filter_satellites(&satellites, &filter).filtered.len(), 2);
    }

    #[test]
    fn test_filter_satellites_search_by_name_or_norad() {
        let satellites = vec![
            fixtures::starlink("s1", "STARLINK-1007", 44713, Some(550.0), 0),
            fixtures::starlink("s2", "STARLINK-2001", 45178, Some(550.0), 0),
        ];

        let by_name = SatelliteFilter {
            search: "starlink-10".to_string(),
            ..SatelliteFilter::default()
        };
        let selection = filter_satellites(&satellites, &by_name);
        assert_eq!(selection.filtered.len(), 1);
        assert_eq!(selection.filtered[0].id, "s1");

        let by_norad = SatelliteFilter {
            search: "5178".to_string(),
            ..SatelliteFilter::default()
        };
        let selection = filter_satellites(&satellites, &by_norad);
        assert_eq!(selection.filtered.len(), 1);
        assert_eq!(selection.filtered[0].id, "s2");
    }

    #[test]
    fn test_satellite_status_parse() {
        assert_eq!("Active".parse::<SatelliteStatus>(), Ok(SatelliteStatus::Active));
        assert!("lost".parse::<SatelliteStatus>().is_err());
    }

    #[test]
    fn test_homepage_stats() {
        let launches = vec![
            past("a", "2020-01-01T00:00:00.000Z", Some(true)),
            past("b", "2020-01-02T00:00:00.000Z", Some(true)),
            past("c", "2020-01-03T00:00:00.000Z", Some(false)),
            fixtures::launch("d", "2030-01-01T00:00:00.000Z", true, None),
        ];
        let payloads = vec![
            fixtures::payload("p1", "a", Some(1234.0)),
            fixtures::payload("p2", "b", None),
            fixtures::payload("p3", "c", Some(15600.0)),
        ];
        let rockets = vec![
            fixtures::rocket("falcon1", "Falcon 1", false),
            fixtures::rocket("falcon9", "Falcon 9", true),
        ];

        let stats = homepage_stats(&launches, &payloads, &rockets);

        assert_eq!(
            stats,
            HomepageStats {
                total_launches: 3,
                success_rate: 66.7,
                total_payload_mass_tonnes: 16.8,
                active_rockets: 1,
            }
        );
    }
}
