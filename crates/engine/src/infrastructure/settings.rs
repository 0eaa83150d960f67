//! Engine configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use vidaloka_domain::{Location, SubZoneId, ZoneId};

pub const DEFAULT_STATE_PATH: &str = "./data/game_state.json";
pub const DEFAULT_CONTENT_DIR: &str = "./assets/data";
pub const DEFAULT_EVENT_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_EVENT_PROBABILITY: i32 = 20;
pub const DEFAULT_SENDER_ADDRESS: &str = "vidaloka-bot";

/// Game-rule knobs shared by the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    pub starting_experience: i64,
    pub starting_currency: i64,
    pub starting_influence: i64,
    /// Where players start when their character names no location
    pub default_location: Location,
    /// Chance, in percent, that a scheduler tick offers an event to a player
    pub event_probability: i32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_experience: 0,
            starting_currency: 100,
            starting_influence: 0,
            default_location: Location::new("centro", "lapa"),
            event_probability: DEFAULT_EVENT_PROBABILITY,
        }
    }
}

/// Everything the binary needs to assemble the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub state_path: PathBuf,
    pub content_dir: PathBuf,
    pub event_interval: Duration,
    pub sender_address: String,
    pub rng_seed: Option<u64>,
    pub rules: GameRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            event_interval: Duration::from_secs(DEFAULT_EVENT_INTERVAL_SECS),
            sender_address: DEFAULT_SENDER_ADDRESS.to_string(),
            rng_seed: None,
            rules: GameRules::default(),
        }
    }
}

impl EngineConfig {
    /// Read `VIDALOKA_*` variables, falling back to defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = Env(&lookup);
        let defaults = Self::default();

        let interval_secs = env
            .parsed::<u64>("VIDALOKA_EVENT_INTERVAL_SECS")
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_EVENT_INTERVAL_SECS);
        let event_probability = env
            .parsed::<i32>("VIDALOKA_EVENT_PROBABILITY")
            .map(|p| p.clamp(0, 100))
            .unwrap_or(defaults.rules.event_probability);

        let default_location = Location {
            zone_id: env
                .get("VIDALOKA_DEFAULT_ZONE")
                .map(ZoneId::from)
                .unwrap_or(defaults.rules.default_location.zone_id),
            sub_zone_id: env
                .get("VIDALOKA_DEFAULT_SUB_ZONE")
                .map(SubZoneId::from)
                .unwrap_or(defaults.rules.default_location.sub_zone_id),
        };

        Self {
            state_path: env
                .get("VIDALOKA_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
            content_dir: env
                .get("VIDALOKA_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            event_interval: Duration::from_secs(interval_secs),
            sender_address: env
                .get("VIDALOKA_SENDER_ADDRESS")
                .unwrap_or(defaults.sender_address),
            rng_seed: env.parsed("VIDALOKA_RNG_SEED"),
            rules: GameRules {
                starting_experience: env
                    .parsed("VIDALOKA_DEFAULT_XP")
                    .unwrap_or(defaults.rules.starting_experience),
                starting_currency: env
                    .parsed("VIDALOKA_DEFAULT_MONEY")
                    .unwrap_or(defaults.rules.starting_currency),
                starting_influence: env
                    .parsed("VIDALOKA_DEFAULT_INFLUENCE")
                    .unwrap_or(defaults.rules.starting_influence),
                default_location,
                event_probability,
            },
        }
    }
}

struct Env<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Env<'_> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|raw| parse_logged(key, &raw))
    }
}

fn parse_logged<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = raw, "Ignoring unparsable setting, using default");
            None
        }
    }
}
