// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! City weather lookups with English→Arabic description translation.
//!
//! Raw conditions come from a [`WeatherProvider`], the pluggable data-source
//! seam. The shipped implementation is [`MockWeatherProvider`], a static
//! table of canned payloads; a live HTTP provider would implement the same
//! trait without touching the formatting or translation layers.

mod conditions;
mod translations;

pub use conditions::{MockWeatherProvider, SupportedCity, SUPPORTED_CITIES};
pub use translations::translate_description;

use std::fmt;

use serde::Serialize;

/// Failure kinds for weather lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// The supplied name has no entry in the provider's data.
    CityNotFound { city_name: String },
    /// The data source failed to produce conditions for a known city.
    Provider { message: String },
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::CityNotFound { city_name } => {
                write!(f, "City not supported: {}", city_name)
            },
            WeatherError::Provider { message } => {
                write!(f, "Weather provider error: {}", message)
            },
        }
    }
}

impl std::error::Error for WeatherError {}

/// Raw conditions as reported by a provider, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    /// Canonical city name, e.g. "Cairo".
    pub city: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// English condition description, e.g. "clear sky".
    pub description: String,
}

/// Formatted weather report returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Canonical city name.
    pub city: String,
    /// Temperature in °C, rounded to one decimal.
    pub temperature: f64,
    /// Condition description, translated to Arabic when a translation
    /// exists.
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Perceived temperature in °C, rounded to one decimal.
    pub feels_like: f64,
}

/// Data-source seam for raw weather conditions.
pub trait WeatherProvider {
    /// Fetch conditions for a normalized (trimmed, lower-cased) city key.
    /// `Ok(None)` means the city is unknown to this provider; `Err` means
    /// the provider itself failed.
    fn conditions(&self, city_key: &str) -> Result<Option<Conditions>, WeatherError>;
}

/// Weather lookups over a [`WeatherProvider`].
#[derive(Debug, Clone, Default)]
pub struct WeatherService<P = MockWeatherProvider> {
    provider: P,
}

impl WeatherService<MockWeatherProvider> {
    /// Service over the canned mock data.
    pub fn new() -> Self {
        Self::with_provider(MockWeatherProvider)
    }
}

impl<P: WeatherProvider> WeatherService<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Formatted weather for the given city: temperatures rounded to one
    /// decimal, description translated to Arabic when a translation exists.
    ///
    /// City matching uses the same normalization as the time lookups:
    /// trimmed, lower-cased, exact.
    pub fn get_weather(&self, city_name: &str) -> Result<WeatherReport, WeatherError> {
        let key = city_name.trim().to_lowercase();
        let conditions =
            self.provider
                .conditions(&key)?
                .ok_or_else(|| WeatherError::CityNotFound {
                    city_name: city_name.to_string(),
                })?;

        Ok(WeatherReport {
            city: conditions.city,
            temperature: round_one_decimal(conditions.temperature),
            description: translate_description(&conditions.description).to_string(),
            humidity: conditions.humidity,
            feels_like: round_one_decimal(conditions.feels_like),
        })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_for_latin_and_arabic_names() {
        let service = WeatherService::new();

        let report = service.get_weather("Cairo").unwrap();
        assert_eq!(report.city, "Cairo");
        assert_eq!(report.temperature, 28.5);
        assert_eq!(report.feels_like, 31.2);
        assert_eq!(report.humidity, 60);
        assert_eq!(report.description, "سماء صافية");

        let arabic = service.get_weather("القاهرة").unwrap();
        assert_eq!(arabic.city, "Cairo");
        assert_eq!(arabic.description, report.description);
    }

    #[test]
    fn test_weather_normalizes_case_and_whitespace() {
        let service = WeatherService::new();

        let report = service.get_weather("  LONDON ").unwrap();
        assert_eq!(report.city, "London");
        assert_eq!(report.description, "غيوم كثيفة");
    }

    #[test]
    fn test_unknown_city_keeps_original_name() {
        let service = WeatherService::new();

        let err = service.get_weather("Atlantis").unwrap_err();
        assert_eq!(
            err,
            WeatherError::CityNotFound {
                city_name: "Atlantis".to_string()
            }
        );
    }

    #[test]
    fn test_translation_passthrough_for_unknown_description() {
        assert_eq!(translate_description("volcanic ash"), "volcanic ash");
        assert_eq!(translate_description("clear sky"), "سماء صافية");
        assert_eq!(translate_description("Clear Sky"), "سماء صافية");
    }

    struct FailingProvider;

    impl WeatherProvider for FailingProvider {
        fn conditions(&self, _city_key: &str) -> Result<Option<Conditions>, WeatherError> {
            Err(WeatherError::Provider {
                message: "upstream unreachable".to_string(),
            })
        }
    }

    #[test]
    fn test_provider_failure_propagates_unchanged() {
        let service = WeatherService::with_provider(FailingProvider);

        let err = service.get_weather("Cairo").unwrap_err();
        assert_eq!(
            err,
            WeatherError::Provider {
                message: "upstream unreachable".to_string()
            }
        );
    }

    struct UnroundedProvider;

    impl WeatherProvider for UnroundedProvider {
        fn conditions(&self, _city_key: &str) -> Result<Option<Conditions>, WeatherError> {
            Ok(Some(Conditions {
                city: "Testville".to_string(),
                temperature: 21.449,
                feels_like: 22.951,
                humidity: 41,
                description: "light rain".to_string(),
            }))
        }
    }

    #[test]
    fn test_temperatures_rounded_to_one_decimal() {
        let service = WeatherService::with_provider(UnroundedProvider);

        let report = service.get_weather("testville").unwrap();
        assert_eq!(report.temperature, 21.4);
        assert_eq!(report.feels_like, 23.0);
        assert_eq!(report.description, "مطر خفيف");
    }
}
