//! Consecutive-day logging streak.
//!
//! The streak is the length of the unbroken run of days with an entry,
//! anchored at the evaluation day and walking strictly backward. It is a
//! pure function of the entry day set and the injected "today"; nothing in
//! here samples the wall clock.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::journal::DateKey;

/// What anchors the streak when today has no entry yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// The walk starts at today: if today is absent the streak is 0, even
    /// when yesterday and every earlier day are present. Logging today is
    /// what keeps the streak alive.
    #[default]
    MustLogToday,

    /// If today is absent, the walk starts at yesterday instead, so an
    /// unbroken run through yesterday still counts until the day ends.
    GraceThroughYesterday,
}

/// Configuration for streak computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Anchoring policy when today has no entry.
    pub policy: StreakPolicy,

    /// Upper bound on the backward walk, guaranteeing termination on any
    /// input.
    pub max_lookback_days: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            policy: StreakPolicy::MustLogToday,
            max_lookback_days: 36_500,
        }
    }
}

/// Calculator for the consecutive-day streak.
pub struct StreakCalculator {
    config: StreakConfig,
}

impl StreakCalculator {
    /// Create a calculator with the default (strict) policy.
    pub fn new() -> Self {
        Self {
            config: StreakConfig::default(),
        }
    }

    /// Create a calculator with custom config.
    pub fn with_config(config: StreakConfig) -> Self {
        Self { config }
    }

    /// Create a calculator with the default config but an explicit policy.
    pub fn with_policy(policy: StreakPolicy) -> Self {
        Self {
            config: StreakConfig {
                policy,
                ..StreakConfig::default()
            },
        }
    }

    /// Count consecutive days with an entry, ending at `today`.
    ///
    /// Walks backward one day at a time from the anchor while each day is
    /// present in `days`, stopping at the first gap or at
    /// `max_lookback_days`.
    pub fn compute(&self, days: &BTreeSet<DateKey>, today: DateKey) -> u32 {
        let mut cursor = today;
        if !days.contains(&cursor) {
            match self.config.policy {
                StreakPolicy::MustLogToday => return 0,
                StreakPolicy::GraceThroughYesterday => {
                    let Some(yesterday) = cursor.prev_day() else {
                        return 0;
                    };
                    cursor = yesterday;
                }
            }
        }

        let mut count = 0;
        while count < self.config.max_lookback_days && days.contains(&cursor) {
            count += 1;
            match cursor.prev_day() {
                Some(prev) => cursor = prev,
                None => break,
            }
        }
        count
    }
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new()
    }
}
