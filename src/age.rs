use serde::{Deserialize, Serialize};

use crate::locale::{Strings, TimePhrase, TimeUnit};

/// Which reference point a comment's age is measured from. The lower modes
/// double as fallbacks when a reference timestamp is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeMode {
    RelativeToParent,
    RelativeToPost,
    #[default]
    Absolute,
}

/// One step of the fallback chain: a precondition over the available
/// reference timestamps plus the phrasing to use when it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeStrategy {
    SinceParent,
    SincePost,
    SinceNow,
}

impl AgeMode {
    /// Ordered most-specific-first; every chain ends in the unconditional
    /// absolute strategy.
    fn fallback_chain(self) -> &'static [AgeStrategy] {
        match self {
            AgeMode::RelativeToParent => &[
                AgeStrategy::SinceParent,
                AgeStrategy::SincePost,
                AgeStrategy::SinceNow,
            ],
            AgeMode::RelativeToPost => &[AgeStrategy::SincePost, AgeStrategy::SinceNow],
            AgeMode::Absolute => &[AgeStrategy::SinceNow],
        }
    }
}

impl AgeStrategy {
    fn render(
        self,
        strings: &dyn Strings,
        max_units: usize,
        comment_created: i64,
        post_created: Option<i64>,
        parent_created: Option<i64>,
        now: i64,
    ) -> Option<String> {
        match self {
            AgeStrategy::SinceParent => parent_created.map(|parent| {
                format_duration(
                    strings,
                    comment_created - parent,
                    TimePhrase::AfterReply,
                    max_units,
                )
            }),
            AgeStrategy::SincePost => post_created.map(|post| {
                format_duration(
                    strings,
                    comment_created - post,
                    TimePhrase::AfterPost,
                    max_units,
                )
            }),
            AgeStrategy::SinceNow => Some(format_duration(
                strings,
                now - comment_created,
                TimePhrase::Ago,
                max_units,
            )),
        }
    }
}

/// Renders a comment's age per the requested mode, falling back through the
/// chain when a reference timestamp is unavailable. All timestamps are unix
/// millis; `None` marks an unknown reference.
pub fn format_age(
    strings: &dyn Strings,
    mode: AgeMode,
    max_units: usize,
    comment_created: i64,
    post_created: Option<i64>,
    parent_created: Option<i64>,
    now: i64,
) -> String {
    mode.fallback_chain()
        .iter()
        .find_map(|strategy| {
            strategy.render(
                strings,
                max_units,
                comment_created,
                post_created,
                parent_created,
                now,
            )
        })
        .expect("age fallback chain ends with an unconditional strategy")
}

const MILLIS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Breaks a time span into its leading `max_units` non-zero units and wraps
/// the result in the requested phrase. Negative spans are clamped to zero.
pub fn format_duration(
    strings: &dyn Strings,
    span_millis: i64,
    phrase: TimePhrase,
    max_units: usize,
) -> String {
    let max_units = max_units.max(1);
    let mut remaining = span_millis.max(0) / MILLIS_PER_SECOND;

    let ladder = [
        (
            TimeUnit::Year,
            DAYS_PER_YEAR * HOURS_PER_DAY * MINUTES_PER_HOUR * SECONDS_PER_MINUTE,
        ),
        (
            TimeUnit::Month,
            DAYS_PER_MONTH * HOURS_PER_DAY * MINUTES_PER_HOUR * SECONDS_PER_MINUTE,
        ),
        (
            TimeUnit::Day,
            HOURS_PER_DAY * MINUTES_PER_HOUR * SECONDS_PER_MINUTE,
        ),
        (TimeUnit::Hour, MINUTES_PER_HOUR * SECONDS_PER_MINUTE),
        (TimeUnit::Minute, SECONDS_PER_MINUTE),
        (TimeUnit::Second, 1),
    ];

    let mut parts: Vec<String> = Vec::new();
    for (unit, seconds) in ladder {
        if parts.len() == max_units {
            break;
        }
        let count = remaining / seconds;
        remaining -= count * seconds;
        if count > 0 {
            parts.push(strings.time_unit(unit, count as u64));
        } else if !parts.is_empty() {
            // Counting units stops at the first gap after the leading unit.
            break;
        }
    }

    let duration = if parts.is_empty() {
        strings.time_unit(TimeUnit::Second, 0)
    } else {
        parts.join(", ")
    };

    strings.time_phrase(phrase, &duration)
}
