//! Linear count-up animation for the statistics region.
//!
//! Each tick adds `target / (duration / tick)` to a running value. Until the
//! running value reaches the target the displayed number is its floor; the
//! first tick at or past the target shows the exact target and ends the
//! animation.

use std::time::Duration;

use serde::Serialize;

use crate::models::stat::SiteStat;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterFrame {
    pub value: u64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, tick: Duration) -> Self {
        let ticks = duration.as_secs_f64() / tick.as_secs_f64();
        // Degenerate timings (zero duration or zero tick) snap on the first tick.
        let step = if ticks.is_finite() && ticks >= 1.0 {
            target as f64 / ticks
        } else {
            target as f64
        };
        Self {
            target,
            step,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.finished = true;
            return Some(CounterFrame {
                value: self.target,
                finished: true,
            });
        }
        Some(CounterFrame {
            value: self.current.floor() as u64,
            finished: false,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatValue {
    pub key: &'static str,
    pub value: u64,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsFrame {
    pub stats: Vec<StatValue>,
    pub finished: bool,
}

/// Runs one counter per stat in lockstep. Yields a frame per tick until every
/// counter has reached its target; the last frame has `finished == true`.
#[derive(Debug, Clone)]
pub struct StatsAnimation {
    counters: Vec<(&'static SiteStat, CounterAnimation, u64)>,
    done: bool,
}

impl StatsAnimation {
    pub fn new(stats: &'static [SiteStat], duration: Duration, tick: Duration) -> Self {
        Self {
            counters: stats
                .iter()
                .map(|stat| (stat, CounterAnimation::new(stat.target, duration, tick), 0))
                .collect(),
            done: false,
        }
    }
}

impl Iterator for StatsAnimation {
    type Item = StatsFrame;

    fn next(&mut self) -> Option<StatsFrame> {
        if self.done {
            return None;
        }
        for (_, counter, shown) in self.counters.iter_mut() {
            if let Some(frame) = counter.next() {
                *shown = frame.value;
            }
        }
        self.done = self.counters.iter().all(|(_, c, _)| c.is_finished());
        Some(StatsFrame {
            stats: self
                .counters
                .iter()
                .map(|(stat, _, shown)| StatValue {
                    key: stat.key,
                    value: *shown,
                    display: format_thousands(*shown),
                })
                .collect(),
            finished: self.done,
        })
    }
}

/// `12500` -> `"12,500"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
