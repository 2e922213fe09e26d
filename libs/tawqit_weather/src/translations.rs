// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! English→Arabic translation table for weather condition descriptions.

static WEATHER_TRANSLATIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "clear sky" => "سماء صافية",
    "few clouds" => "غيوم قليلة",
    "scattered clouds" => "غيوم متناثرة",
    "broken clouds" => "غيوم متكسرة",
    "shower rain" => "أمطار متناثرة",
    "rain" => "مطر",
    "thunderstorm" => "عاصفة رعدية",
    "snow" => "ثلج",
    "mist" => "ضباب خفيف",
    "fog" => "ضباب",
    "haze" => "غبار",
    "overcast clouds" => "غيوم كثيفة",
    "light rain" => "مطر خفيف",
    "moderate rain" => "مطر متوسط",
    "heavy rain" => "مطر غزير",
};

/// Translate an English condition description to Arabic.
///
/// Matching is exact after trimming and lower-casing; descriptions without
/// a translation pass through unchanged.
pub fn translate_description(description: &str) -> &str {
    let key = description.trim().to_lowercase();
    WEATHER_TRANSLATIONS
        .get(key.as_str())
        .copied()
        .unwrap_or(description)
}
