use super::constants::{DEFAULT_INITIAL_COUNTDOWN, DEFAULT_ROUND_COUNTDOWN};

/// Runtime knobs read from the page URL.
///
/// - `initial_countdown`: seconds counted down (with ticks) before the first spin
/// - `round_countdown`: seconds counted down between spins
/// - `seed`: fixed RNG seed; `None` draws from the platform entropy source
/// - `debug`: raise the console log level to Debug
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameParams {
    pub initial_countdown: u32,
    pub round_countdown: u32,
    pub seed: Option<u64>,
    pub debug: bool,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            initial_countdown: DEFAULT_INITIAL_COUNTDOWN,
            round_countdown: DEFAULT_ROUND_COUNTDOWN,
            seed: None,
            debug: false,
        }
    }
}

impl GameParams {
    /// Parse a `location.search` string such as `?countdown=3&seed=7`.
    /// Bad values keep their default and are reported with a warning.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "countdown" => match parse_seconds(value) {
                    Some(v) => params.initial_countdown = v,
                    None => log::warn!("ignoring countdown={value:?}"),
                },
                "interval" => match parse_seconds(value) {
                    Some(v) => params.round_countdown = v,
                    None => log::warn!("ignoring interval={value:?}"),
                },
                "seed" => match value.parse::<u64>() {
                    Ok(v) => params.seed = Some(v),
                    Err(_) => log::warn!("ignoring seed={value:?}"),
                },
                "debug" => params.debug = matches!(value, "" | "1" | "true" | "on"),
                _ => {}
            }
        }
        params
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[inline]
fn parse_seconds(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|v| *v > 0)
}
