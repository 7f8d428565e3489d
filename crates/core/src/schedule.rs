// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron schedule wrapper.
//!
//! The catalog speaks classic five-field cron plus `@hourly`-style macros.
//! The ecosystem parser wants an explicit seconds field, so five-field
//! expressions are normalized before parsing. Fire enumeration is always
//! UTC and gated to the job's start date.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Parse failure for a cron expression.
#[derive(Debug, Error)]
#[error("invalid cron expression {expr:?}: {source}")]
pub struct ScheduleParseError {
    pub expr: String,
    #[source]
    source: cron::error::Error,
}

/// A parsed cron expression that can enumerate its fires.
#[derive(Debug, Clone)]
pub struct Schedule {
    expr: String,
    inner: cron::Schedule,
}

impl Schedule {
    pub fn parse(expr: &str) -> Result<Self, ScheduleParseError> {
        let normalized = normalize(expr);
        let inner = cron::Schedule::from_str(&normalized)
            .map_err(|source| ScheduleParseError { expr: expr.to_string(), source })?;
        Ok(Self { expr: expr.trim().to_string(), inner })
    }

    /// The expression as written in the catalog.
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// All fires in the half-open window `[from, until)`, skipping any
    /// instant before `start_date` (the cron was not ticking yet).
    pub fn fires_within(
        &self,
        start_date: NaiveDate,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Vec<DateTime<Utc>> {
        let floor = start_of_day(start_date);
        let from = from.max(floor);
        if from >= until {
            return Vec::new();
        }
        // `after` yields fires strictly after its argument; back off one
        // tick so a fire exactly at `from` is kept.
        let probe = from - chrono::Duration::nanoseconds(1);
        self.inner.after(&probe).take_while(|t| *t < until).collect()
    }
}

impl FromStr for Schedule {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

impl Eq for Schedule {}

impl Serialize for Schedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.expr)
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let expr = String::deserialize(deserializer)?;
        Schedule::parse(&expr).map_err(serde::de::Error::custom)
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Prefix a seconds field onto five-field expressions; macros and
/// six/seven-field expressions pass through untouched.
fn normalize(expr: &str) -> String {
    let trimmed = expr.trim();
    if trimmed.starts_with('@') {
        return trimmed.to_string();
    }
    match trimmed.split_whitespace().count() {
        5 => format!("0 {trimmed}"),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
