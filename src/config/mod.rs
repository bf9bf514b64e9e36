/// Application configuration module
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub bind_addr: String,
    pub refresh_intervals: RefreshIntervals,
    pub cache_policy: CachePolicy,
}

/// Upstream API endpoints and transport settings
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base for rockets, payloads and starlink
    pub v4_url: String,
    /// Base for launches
    pub v5_url: String,
    pub timeout: Duration,
}

/// Background refresh interval per resource class
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshIntervals {
    pub launches: Duration,
    pub payloads: Duration,
    pub rockets: Duration,
    pub starlink: Duration,
}

/// Retry, dedup and revalidation triggers shared by every cache key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachePolicy {
    pub should_retry_on_error: bool,
    /// Retries after the first failed attempt
    pub error_retry_count: u32,
    pub error_retry_interval: Duration,
    pub deduping_interval: Duration,
    pub revalidate_on_focus: bool,
    pub revalidate_on_reconnect: bool,
}

/// Volatility class of a resource, used to pick its refresh interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceClass {
    Launches,
    Payloads,
    Rockets,
    Starlink,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            v4_url: "https://api.spacexdata.com/v4".to_string(),
            v5_url: "https://api.spacexdata.com/v5".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Self {
            launches: Duration::from_millis(20_000),
            payloads: Duration::from_millis(300_000),
            rockets: Duration::from_millis(86_400_000),
            starlink: Duration::from_millis(3_600_000),
        }
    }
}

impl RefreshIntervals {
    pub fn for_class(&self, class: ResourceClass) -> Duration {
        match class {
            ResourceClass::Launches => self.launches,
            ResourceClass::Payloads => self.payloads,
            ResourceClass::Rockets => self.rockets,
            ResourceClass::Starlink => self.starlink,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            should_retry_on_error: true,
            error_retry_count: 3,
            error_retry_interval: Duration::from_millis(5_000),
            deduping_interval: Duration::from_millis(2_000),
            revalidate_on_focus: true,
            revalidate_on_reconnect: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_defaults = ApiConfig::default();
        let api = ApiConfig {
            v4_url: env_string("SPACEX_API_V4_URL", &api_defaults.v4_url),
            v5_url: env_string("SPACEX_API_V5_URL", &api_defaults.v5_url),
            timeout: Duration::from_secs(env_parse("HTTP_TIMEOUT_SECONDS", 30)),
        };

        let bind_addr = env_string("BIND_ADDR", "0.0.0.0:3000");

        let refresh_intervals = RefreshIntervals {
            launches: env_millis("LAUNCHES_REFRESH_MS", 20_000), // 20s
            payloads: env_millis("PAYLOADS_REFRESH_MS", 300_000), // 5m
            rockets: env_millis("ROCKETS_REFRESH_MS", 86_400_000), // 24h
            starlink: env_millis("STARLINK_REFRESH_MS", 3_600_000), // 1h
        };

        let policy_defaults = CachePolicy::default();
        let cache_policy = CachePolicy {
            should_retry_on_error: env_bool(
                "SHOULD_RETRY_ON_ERROR",
                policy_defaults.should_retry_on_error,
            ),
            error_retry_count: env_parse("ERROR_RETRY_COUNT", policy_defaults.error_retry_count),
            error_retry_interval: env_millis("ERROR_RETRY_INTERVAL_MS", 5_000),
            deduping_interval: env_millis("DEDUPING_INTERVAL_MS", 2_000),
            revalidate_on_focus: env_bool("REVALIDATE_ON_FOCUS", policy_defaults.revalidate_on_focus),
            revalidate_on_reconnect: env_bool(
                "REVALIDATE_ON_RECONNECT",
                policy_defaults.revalidate_on_reconnect,
            ),
        };

        Ok(Self {
            api,
            bind_addr,
            refresh_intervals,
            cache_policy,
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse `key` as `T`; missing or malformed values (including out of
/// range numbers) fall back to `default`
fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(env_parse(key, default))
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|s| parse_bool(&s))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
