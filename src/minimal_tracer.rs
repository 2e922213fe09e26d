// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{env, fmt, fmt::Write as _, sync::atomic::AtomicUsize};

use chrono::Utc;
use tracing::{field::Visit, Id, Level, Subscriber};
use tracing_core::Field;

pub struct StringVisitor<'a> {
    string: &'a mut String,
}

impl<'a> StringVisitor<'a> {
    pub(crate) fn new(string: &'a mut String) -> Self {
        StringVisitor { string }
    }
}

impl Visit for StringVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            write!(self.string, "{value:?} ").unwrap();
        } else {
            write!(self.string, "{} = {:?}; ", field.name(), value).unwrap();
        }
    }
}

struct LogFilter {
    target: Option<String>,
    level: Option<Level>,
}

/// Minimal `tracing` subscriber: filters on `RUST_LOG` (comma-separated
/// `target`, `level` or `target=level` entries) and prints timestamped
/// lines to stdout. Logging is disabled entirely when `RUST_LOG` is unset.
pub struct MinimalTracer {
    enabled: bool,
    filters: Vec<LogFilter>,
}

fn string_to_level(string: &str) -> Option<Level> {
    match string.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn parse_filter(entry: &str) -> LogFilter {
    if let Some((target, level)) = entry.split_once('=') {
        return LogFilter {
            target: Some(target.to_string()),
            level: string_to_level(level),
        };
    }
    if let Some(level) = string_to_level(entry) {
        return LogFilter {
            target: None,
            level: Some(level),
        };
    }
    LogFilter {
        target: Some(entry.to_string()),
        level: None,
    }
}

impl MinimalTracer {
    pub fn register() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let mut enabled = true;
        let mut filters = Vec::new();

        if let Ok(env_value) = env::var("RUST_LOG") {
            filters.extend(env_value.split(',').map(parse_filter));
        } else {
            enabled = false;
        }

        tracing::subscriber::set_global_default(MinimalTracer { enabled, filters })
    }
}

static AUTO_ID: AtomicUsize = AtomicUsize::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        if !self.enabled {
            return false;
        }
        if self.filters.is_empty() {
            return true;
        }

        self.filters.iter().any(|filter| {
            let level_matches = filter
                .level
                .map_or(true, |level| metadata.level() <= &level);
            let target_matches = filter
                .target
                .as_deref()
                .map_or(true, |target| metadata.target().starts_with(target));
            level_matches && target_matches
        })
    }

    fn new_span(&self, _span: &tracing_core::span::Attributes<'_>) -> tracing_core::span::Id {
        Id::from_u64(AUTO_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed) as u64)
    }

    fn record(&self, _span: &tracing_core::span::Id, _values: &tracing_core::span::Record<'_>) {}

    fn record_follows_from(
        &self,
        _span: &tracing_core::span::Id,
        _follows: &tracing_core::span::Id,
    ) {
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let metadata = event.metadata();

        let mut text = String::new();
        let mut visitor = StringVisitor::new(&mut text);
        event.record(&mut visitor);

        println!(
            "{} {} {}: {}",
            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            metadata.level(),
            metadata.target(),
            text.trim_end()
        );
    }

    fn enter(&self, _span: &tracing_core::span::Id) {}

    fn exit(&self, _span: &tracing_core::span::Id) {}
}
