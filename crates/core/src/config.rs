use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::aging::aging::{AgingFn, Greyscale, Identity, GREYSCALE_TOKEN};
use crate::color::color::Color;
use crate::error::{ColorTimeError, Result};
use crate::ring::ring::{is_valid_day, AnchorPoint};

/// Reserved option keys. Every other key is read as a day of the year.
pub const MAX_AGE_YEARS_KEY: &str = "maxAgeYears";
pub const MAX_AGE_FILTER_PERCENTAGE_KEY: &str = "maxAgeFilterPercentage";
pub const AGING_FN_KEY: &str = "agingFn";

/// Validated, immutable configuration shared by every query.
#[derive(Clone, Debug)]
pub struct ColorTimeConfig {
    anchors: Vec<AnchorPoint>,
    max_age_years: Option<f64>,
    max_age_filter_percentage: Option<f64>,
    aging: Arc<dyn AgingFn>,
}

impl ColorTimeConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Builds a configuration from an option set such as
    /// `{"0": "#00f", "128": "#f00", "agingFn": "greyscale", "maxAgeYears": 10}`.
    pub fn from_options(options: &Map<String, Value>) -> Result<Self> {
        ConfigBuilder::from_options(options).build()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(options) => Self::from_options(&options),
            _ => Err(ColorTimeError::no_anchors()),
        }
    }

    /// Reads an option set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        log::debug!("Loading color time config from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Never empty.
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    pub fn max_age_years(&self) -> Option<f64> {
        self.max_age_years
    }

    pub fn max_age_filter_percentage(&self) -> Option<f64> {
        self.max_age_filter_percentage
    }

    pub fn aging(&self) -> &dyn AgingFn {
        self.aging.as_ref()
    }
}

/// Collects anchors and aging settings, then validates them once in
/// [`ConfigBuilder::build`].
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    anchors: Vec<AnchorPoint>,
    max_age_years: Option<f64>,
    max_age_filter_percentage: Option<f64>,
    aging: Arc<dyn AgingFn>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            anchors: Vec::new(),
            max_age_years: None,
            max_age_filter_percentage: None,
            aging: Arc::new(Identity),
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every key of an option set. Keys that are neither a canonical day
    /// number in `0..=365` nor a reserved key are ignored, as are anchors whose
    /// color does not parse.
    pub fn from_options(options: &Map<String, Value>) -> Self {
        let mut builder = Self::default();

        for (key, value) in options {
            if let Some(day) = parse_day_key(key) {
                match value.as_str().map(Color::parse) {
                    Some(Ok(color)) => builder.anchors.push(AnchorPoint::new(day, color)),
                    _ => log::warn!("Ignoring day {} with unusable color {}", day, value),
                }
                continue;
            }

            match key.as_str() {
                AGING_FN_KEY => match value.as_str() {
                    Some(GREYSCALE_TOKEN) => builder.aging = Arc::new(Greyscale),
                    _ => log::warn!("Ignoring unknown aging function {}", value),
                },
                MAX_AGE_YEARS_KEY => builder.max_age_years = value.as_f64(),
                MAX_AGE_FILTER_PERCENTAGE_KEY => {
                    builder.max_age_filter_percentage = value.as_f64()
                }
                _ => log::debug!("Ignoring option {:?}", key),
            }
        }

        builder
    }

    /// Adds an anchor. Days outside `0..=365` are dropped.
    pub fn anchor(mut self, day: u16, color: Color) -> Self {
        if is_valid_day(i64::from(day)) {
            self.anchors.push(AnchorPoint::new(day, color));
        } else {
            log::warn!("Ignoring out of range day {}", day);
        }
        self
    }

    pub fn max_age_years(mut self, years: f64) -> Self {
        self.max_age_years = Some(years);
        self
    }

    pub fn max_age_filter_percentage(mut self, percentage: f64) -> Self {
        self.max_age_filter_percentage = Some(percentage);
        self
    }

    pub fn aging(mut self, aging: impl AgingFn + 'static) -> Self {
        self.aging = Arc::new(aging);
        self
    }

    /// Fails when no anchor survived validation.
    pub fn build(self) -> Result<ColorTimeConfig> {
        if self.anchors.is_empty() {
            return Err(ColorTimeError::no_anchors());
        }

        Ok(ColorTimeConfig {
            anchors: self.anchors,
            max_age_years: self.max_age_years,
            max_age_filter_percentage: self.max_age_filter_percentage,
            aging: self.aging,
        })
    }
}

/// A day key must be the canonical decimal form of a valid day: `"7"`, not
/// `"07"`, `" 7"` or `"+7"`.
fn parse_day_key(key: &str) -> Option<u16> {
    let day: i64 = key.parse().ok()?;
    if day.to_string() != key || !is_valid_day(day) {
        return None;
    }
    u16::try_from(day).ok()
}
