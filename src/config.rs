use crate::logging::LogLevel;
use crate::reveal::{stagger_delay_ms, Threshold};
use crate::typewriter::TypewriterTiming;

const DEFAULT_TYPING_MS: u32 = 150;
const DEFAULT_DELETING_MS: u32 = 50;
const DEFAULT_PAUSE_MS: u32 = 2_000;
const DEFAULT_DELETE_DELAY_MS: u32 = 1_500;
const DEFAULT_STAGGER_STEP_MS: u32 = 100;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const TYPING_MS_BOUNDS: (u32, u32) = (10, 2_000);
const DELETING_MS_BOUNDS: (u32, u32) = (10, 2_000);
const PAUSE_MS_BOUNDS: (u32, u32) = (0, 20_000);
const DELETE_DELAY_MS_BOUNDS: (u32, u32) = (0, 20_000);
const STAGGER_STEP_MS_BOUNDS: (u32, u32) = (0, 1_000);

/// Animation tuning, read once at startup from `data-*` attributes on the
/// mount element. Anything missing or out of bounds keeps its default.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub typewriter: TypewriterTiming,
    pub reveal_threshold: Threshold,
    pub stagger_step_ms: u32,
    pub log_level: LogLevel,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            typewriter: TypewriterTiming {
                typing_ms: DEFAULT_TYPING_MS,
                deleting_ms: DEFAULT_DELETING_MS,
                pause_ms: DEFAULT_PAUSE_MS,
                delete_delay_ms: DEFAULT_DELETE_DELAY_MS,
            },
            reveal_threshold: Threshold::default(),
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AnimationConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let typing_ms = parse_u32_with_bounds(&lookup, "data-typing-ms", DEFAULT_TYPING_MS, TYPING_MS_BOUNDS);
        let deleting_ms =
            parse_u32_with_bounds(&lookup, "data-deleting-ms", DEFAULT_DELETING_MS, DELETING_MS_BOUNDS);
        let pause_ms = parse_u32_with_bounds(&lookup, "data-pause-ms", DEFAULT_PAUSE_MS, PAUSE_MS_BOUNDS);
        let delete_delay_ms = parse_u32_with_bounds(
            &lookup,
            "data-delete-delay-ms",
            DEFAULT_DELETE_DELAY_MS,
            DELETE_DELAY_MS_BOUNDS,
        );
        let reveal_threshold = parse_non_empty(&lookup, "data-reveal-threshold")
            .and_then(|value| value.parse::<f64>().ok())
            .and_then(|value| Threshold::new(value).ok())
            .unwrap_or_default();
        let stagger_step_ms = parse_u32_with_bounds(
            &lookup,
            "data-stagger-step-ms",
            DEFAULT_STAGGER_STEP_MS,
            STAGGER_STEP_MS_BOUNDS,
        );
        let log_level = parse_non_empty(&lookup, "data-log-level")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            typewriter: TypewriterTiming {
                typing_ms,
                deleting_ms,
                pause_ms,
                delete_delay_ms,
            },
            reveal_threshold,
            stagger_step_ms,
            log_level,
        }
    }

    /// Delay for the `index`-th child of a staggered list. `percent` scales
    /// the configured step so denser lists can use a fraction of it.
    pub fn stagger_ms(&self, index: usize, percent: u32, base_ms: u32) -> u32 {
        let step = u64::from(self.stagger_step_ms) * u64::from(percent) / 100;
        stagger_delay_ms(index, u32::try_from(step).unwrap_or(u32::MAX), base_ms)
    }

    pub fn as_fields(&self) -> serde_json::Value {
        serde_json::json!({
            "typingMs": self.typewriter.typing_ms,
            "deletingMs": self.typewriter.deleting_ms,
            "pauseMs": self.typewriter.pause_ms,
            "deleteDelayMs": self.typewriter.delete_delay_ms,
            "revealThreshold": self.reveal_threshold.get(),
            "staggerStepMs": self.stagger_step_ms,
            "logLevel": self.log_level.as_str(),
        })
    }
}

fn parse_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
