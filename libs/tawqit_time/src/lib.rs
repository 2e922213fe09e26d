// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! City time lookups backed by a static city→timezone table.
//!
//! A city name (Arabic or Latin script, case-insensitive for Latin) resolves
//! to an IANA timezone identifier through an immutable compile-time table.
//! From there the current wall-clock time in that zone and the signed hour
//! difference between two cities are computed against the bundled timezone
//! database.
//!
//! The table is built once and shared read-only, so a [`TimeService`] is
//! `Copy` and safe to use from any number of tasks without locking. All
//! operations are synchronous and side-effect-free beyond reading the wall
//! clock.
//!
//! # Example
//!
//! ```
//! use tawqit_time::TimeService;
//!
//! let service = TimeService::new();
//!
//! assert_eq!(service.resolve("Cairo").unwrap(), "Africa/Cairo");
//! assert_eq!(service.resolve("القاهرة").unwrap(), "Africa/Cairo");
//!
//! let comparison = service.compare("Cairo", "Cairo").unwrap();
//! assert_eq!(comparison.time_difference_hours, 0.0);
//! ```

mod cities;

pub use cities::CITY_TIMEZONES;

use std::fmt;

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Wall-clock format returned to callers: no offset suffix, no sub-seconds.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Failure kinds for city time lookups.
///
/// Both kinds carry the city name exactly as the caller supplied it, so a
/// two-city comparison always reports which side failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The supplied name has no entry in the city table.
    CityNotFound { city_name: String },
    /// The city resolved, but its timezone identifier could not be loaded
    /// from the timezone database.
    TimezoneUnavailable { city_name: String },
}

impl TimeError {
    /// The city that triggered the failure, as supplied by the caller.
    pub fn city_name(&self) -> &str {
        match self {
            TimeError::CityNotFound { city_name } => city_name,
            TimeError::TimezoneUnavailable { city_name } => city_name,
        }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::CityNotFound { city_name } => {
                write!(f, "City not supported: {}", city_name)
            },
            TimeError::TimezoneUnavailable { city_name } => {
                write!(f, "Unable to load timezone for city: {}", city_name)
            },
        }
    }
}

impl std::error::Error for TimeError {}

/// Current time in a single city.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSnapshot {
    /// City name as supplied by the caller.
    pub city: String,
    /// Wall-clock time in the city's zone, `YYYY-MM-DDTHH:MM:SS`.
    pub current_time: String,
    /// Resolved IANA timezone identifier.
    pub timezone: String,
}

/// Current time in two cities plus their signed hour difference.
#[derive(Debug, Clone, Serialize)]
pub struct TimeComparison {
    pub city1: String,
    pub city1_time: String,
    pub city1_timezone: String,
    pub city2: String,
    pub city2_time: String,
    pub city2_timezone: String,
    /// UTC offset of `city1` minus UTC offset of `city2`, in hours,
    /// rounded to one decimal.
    pub time_difference_hours: f64,
}

/// City time lookups against an immutable city→timezone table.
#[derive(Debug, Clone, Copy)]
pub struct TimeService {
    cities: &'static phf::Map<&'static str, &'static str>,
}

impl Default for TimeService {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService {
    /// Service over the built-in city table.
    pub fn new() -> Self {
        Self::with_cities(&CITY_TIMEZONES)
    }

    /// Service over a custom table. Keys must be normalized (trimmed,
    /// lower-cased); values must be IANA identifiers resolvable by the
    /// bundled timezone database.
    pub fn with_cities(cities: &'static phf::Map<&'static str, &'static str>) -> Self {
        Self { cities }
    }

    /// Resolve a city name to its IANA timezone identifier.
    ///
    /// Matching is exact after trimming and lower-casing. Lower-casing is a
    /// no-op for Arabic script, so Arabic keys match verbatim. No fuzzy or
    /// partial matching.
    pub fn resolve(&self, city_name: &str) -> Result<&'static str, TimeError> {
        let key = city_name.trim().to_lowercase();
        self.cities
            .get(key.as_str())
            .copied()
            .ok_or_else(|| TimeError::CityNotFound {
                city_name: city_name.to_string(),
            })
    }

    /// Current wall-clock time in the given city.
    pub fn current_time(&self, city_name: &str) -> Result<TimeSnapshot, TimeError> {
        self.snapshot_with_offset(city_name)
            .map(|(snapshot, _)| snapshot)
    }

    /// Current time in both cities and the signed hour difference between
    /// them (offset of `city1` minus offset of `city2`, rounded to one
    /// decimal).
    ///
    /// The two instants are read independently. UTC offsets change on a
    /// minute granularity at worst, so the reads not being simultaneous
    /// cannot affect the difference; two cities sharing an offset always
    /// yield exactly `0.0`.
    pub fn compare(&self, city1: &str, city2: &str) -> Result<TimeComparison, TimeError> {
        let (snapshot1, offset1) = self.snapshot_with_offset(city1)?;
        let (snapshot2, offset2) = self.snapshot_with_offset(city2)?;

        let hours = f64::from(offset1 - offset2) / 3600.0;

        Ok(TimeComparison {
            city1: snapshot1.city,
            city1_time: snapshot1.current_time,
            city1_timezone: snapshot1.timezone,
            city2: snapshot2.city,
            city2_time: snapshot2.current_time,
            city2_timezone: snapshot2.timezone,
            time_difference_hours: (hours * 10.0).round() / 10.0,
        })
    }

    /// Normalized city keys of the table, in arbitrary order.
    pub fn supported_cities(&self) -> impl Iterator<Item = &'static str> {
        self.cities.keys().copied()
    }

    fn snapshot_with_offset(&self, city_name: &str) -> Result<(TimeSnapshot, i32), TimeError> {
        let timezone_id = self.resolve(city_name)?;
        let tz: Tz = timezone_id
            .parse()
            .map_err(|_| TimeError::TimezoneUnavailable {
                city_name: city_name.to_string(),
            })?;

        let local: DateTime<Tz> = Utc::now().with_timezone(&tz);
        let offset_secs = local.offset().fix().local_minus_utc();

        let snapshot = TimeSnapshot {
            city: city_name.to_string(),
            current_time: local.format(TIME_FORMAT).to_string(),
            timezone: timezone_id.to_string(),
        };

        Ok((snapshot, offset_secs))
    }
}
