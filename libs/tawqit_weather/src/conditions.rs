// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Canned weather payloads for the mock provider.

use serde::Serialize;

use crate::{Conditions, WeatherError, WeatherProvider};

struct CannedConditions {
    city: &'static str,
    temperature: f64,
    feels_like: f64,
    humidity: u32,
    description: &'static str,
}

/// Keys are normalized city names; every city appears under both its Arabic
/// and Latin names, pointing at identical payloads.
static MOCK_CONDITIONS: phf::Map<&'static str, CannedConditions> = phf::phf_map! {
    "cairo" => CannedConditions {
        city: "Cairo",
        temperature: 28.5,
        feels_like: 31.2,
        humidity: 60,
        description: "clear sky",
    },
    "القاهرة" => CannedConditions {
        city: "Cairo",
        temperature: 28.5,
        feels_like: 31.2,
        humidity: 60,
        description: "clear sky",
    },
    "london" => CannedConditions {
        city: "London",
        temperature: 15.3,
        feels_like: 14.1,
        humidity: 78,
        description: "overcast clouds",
    },
    "لندن" => CannedConditions {
        city: "London",
        temperature: 15.3,
        feels_like: 14.1,
        humidity: 78,
        description: "overcast clouds",
    },
    "riyadh" => CannedConditions {
        city: "Riyadh",
        temperature: 35.2,
        feels_like: 38.5,
        humidity: 25,
        description: "clear sky",
    },
    "الرياض" => CannedConditions {
        city: "Riyadh",
        temperature: 35.2,
        feels_like: 38.5,
        humidity: 25,
        description: "clear sky",
    },
};

/// A city the mock provider knows, under both scripts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupportedCity {
    pub arabic: &'static str,
    pub english: &'static str,
}

/// Cities served by [`MockWeatherProvider`], for the listing endpoint.
pub static SUPPORTED_CITIES: &[SupportedCity] = &[
    SupportedCity {
        arabic: "القاهرة",
        english: "Cairo",
    },
    SupportedCity {
        arabic: "الرياض",
        english: "Riyadh",
    },
    SupportedCity {
        arabic: "لندن",
        english: "London",
    },
];

/// Static canned-data provider. Stands in for a live weather API until one
/// is wired up behind the same [`WeatherProvider`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeatherProvider;

impl WeatherProvider for MockWeatherProvider {
    fn conditions(&self, city_key: &str) -> Result<Option<Conditions>, WeatherError> {
        Ok(MOCK_CONDITIONS.get(city_key).map(|canned| Conditions {
            city: canned.city.to_string(),
            temperature: canned.temperature,
            feels_like: canned.feels_like,
            humidity: canned.humidity,
            description: canned.description.to_string(),
        }))
    }
}
