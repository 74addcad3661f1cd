use crate::{contact::ContactSettings, logging::LogLevel};

const DEFAULT_SUCCESS_RESET_MS: u32 = 5_000;
const DEFAULT_ERROR_RESET_MS: u32 = 3_000;
const DEFAULT_HERO_TYPEWRITER_SPEED_MS: u32 = 80;
const DEFAULT_HERO_TYPEWRITER_DELAY_MS: u32 = 200;
const DEFAULT_COUNTER_TICK_MS: u32 = 30;
const DEFAULT_SUBMISSIONS_KEY: &str = "formSubmissions";
const DEFAULT_PROJECTS_FEED_URL: &str = "/data/projects.json";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATUS_RESET_MS_BOUNDS: (u32, u32) = (500, 60_000);
const TYPEWRITER_SPEED_MS_BOUNDS: (u32, u32) = (1, 1_000);
const TYPEWRITER_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const COUNTER_TICK_MS_BOUNDS: (u32, u32) = (1, 1_000);

/// Runtime knobs for the page. Every value has a default; anything missing,
/// unparsable or out of bounds falls back to it.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub success_reset_ms: u32,
    pub error_reset_ms: u32,
    pub hero_typewriter_speed_ms: u32,
    pub hero_typewriter_delay_ms: u32,
    pub counter_tick_ms: u32,
    pub submissions_key: String,
    pub projects_feed_url: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let success_reset_ms = parse_u32_with_bounds(
            &lookup,
            "SUCCESS_RESET_MS",
            DEFAULT_SUCCESS_RESET_MS,
            STATUS_RESET_MS_BOUNDS,
        );
        let error_reset_ms = parse_u32_with_bounds(
            &lookup,
            "ERROR_RESET_MS",
            DEFAULT_ERROR_RESET_MS,
            STATUS_RESET_MS_BOUNDS,
        );
        let hero_typewriter_speed_ms = parse_u32_with_bounds(
            &lookup,
            "HERO_TYPEWRITER_SPEED_MS",
            DEFAULT_HERO_TYPEWRITER_SPEED_MS,
            TYPEWRITER_SPEED_MS_BOUNDS,
        );
        let hero_typewriter_delay_ms = parse_u32_with_bounds(
            &lookup,
            "HERO_TYPEWRITER_DELAY_MS",
            DEFAULT_HERO_TYPEWRITER_DELAY_MS,
            TYPEWRITER_DELAY_MS_BOUNDS,
        );
        let counter_tick_ms = parse_u32_with_bounds(
            &lookup,
            "COUNTER_TICK_MS",
            DEFAULT_COUNTER_TICK_MS,
            COUNTER_TICK_MS_BOUNDS,
        );
        let submissions_key = parse_non_empty_string(&lookup, "SUBMISSIONS_KEY")
            .unwrap_or_else(|| DEFAULT_SUBMISSIONS_KEY.to_string());
        let projects_feed_url = parse_non_empty_string(&lookup, "PROJECTS_FEED_URL")
            .unwrap_or_else(|| DEFAULT_PROJECTS_FEED_URL.to_string());
        let log_level = parse_non_empty_string(&lookup, "LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            success_reset_ms,
            error_reset_ms,
            hero_typewriter_speed_ms,
            hero_typewriter_delay_ms,
            counter_tick_ms,
            submissions_key,
            projects_feed_url,
            log_level,
        }
    }

    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            storage_key: self.submissions_key.clone(),
            success_reset_ms: self.success_reset_ms,
            error_reset_ms: self.error_reset_ms,
            log_level: self.log_level,
        }
    }
}

pub fn data_attribute_name(key: &str) -> String {
    format!("data-{}", key.to_ascii_lowercase().replace('_', "-"))
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
