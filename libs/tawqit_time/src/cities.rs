// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Built-in city→timezone table.
//!
//! Keys are normalized (trimmed, lower-cased, script-preserving); every city
//! appears under both its Arabic and Latin names. Values are IANA timezone
//! identifiers resolvable by the bundled timezone database.

/// The default city table.
pub static CITY_TIMEZONES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Arab cities
    "cairo" => "Africa/Cairo",
    "القاهرة" => "Africa/Cairo",
    "riyadh" => "Asia/Riyadh",
    "الرياض" => "Asia/Riyadh",
    "dubai" => "Asia/Dubai",
    "دبي" => "Asia/Dubai",
    "beirut" => "Asia/Beirut",
    "بيروت" => "Asia/Beirut",
    "baghdad" => "Asia/Baghdad",
    "بغداد" => "Asia/Baghdad",
    "damascus" => "Asia/Damascus",
    "دمشق" => "Asia/Damascus",
    "amman" => "Asia/Amman",
    "عمان" => "Asia/Amman",

    // International cities
    "london" => "Europe/London",
    "لندن" => "Europe/London",
    "paris" => "Europe/Paris",
    "باريس" => "Europe/Paris",
    "new york" => "America/New_York",
    "نيويورك" => "America/New_York",
    "tokyo" => "Asia/Tokyo",
    "طوكيو" => "Asia/Tokyo",
    "moscow" => "Europe/Moscow",
    "موسكو" => "Europe/Moscow",
    "sydney" => "Australia/Sydney",
    "سيدني" => "Australia/Sydney",
};
