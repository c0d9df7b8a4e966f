use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::calendar::calendar::{day_of_year, parse_date, years_between};
use crate::color::color::{blend, Color};
use crate::config::ColorTimeConfig;
use crate::error::Result;
use crate::ring::ring::bounding_days;
use crate::ring::weight::weight_between;

/// How many years of aging to apply to a queried date.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Age {
    /// An explicit number of years.
    Years(f64),
    /// The years elapsed from the queried date to a reference date, usually
    /// today. Dates after the reference are not aged.
    Since(NaiveDate),
}

impl Default for Age {
    fn default() -> Self {
        Age::Years(0.0)
    }
}

impl Age {
    fn elapsed_years(&self, date: NaiveDate) -> f64 {
        match *self {
            Age::Years(years) => years,
            Age::Since(reference) => years_between(date, reference).max(0.0),
        }
    }
}

/// Answers "what color is this day?" for one configuration.
///
/// Cheap to clone and safe to share across threads; the configuration is
/// never mutated after construction.
#[derive(Clone, Debug)]
pub struct ColorTime {
    config: Arc<ColorTimeConfig>,
}

impl ColorTime {
    pub fn new(config: ColorTimeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Validates an option set and binds a query object to it.
    pub fn from_options(options: &Map<String, Value>) -> Result<Self> {
        ColorTimeConfig::from_options(options).map(Self::new)
    }

    pub fn config(&self) -> &ColorTimeConfig {
        &self.config
    }

    /// Interpolated color for a zero-indexed day of the year, before aging.
    pub fn color_for_day(&self, day: u16) -> Result<Color> {
        let pair = bounding_days(self.config.anchors(), day)?;
        let weight = weight_between(pair.lower.day, pair.upper.day, day);
        log::debug!(
            "Day {} lies between {} and {} at weight {:.4}",
            day,
            pair.lower.day,
            pair.upper.day,
            weight
        );
        Ok(blend(&pair.lower.color, &pair.upper.color, weight))
    }

    /// Color of `date`, aged by `age`.
    pub fn color_on(&self, date: NaiveDate, age: Age) -> Result<Color> {
        let color = self.color_for_day(day_of_year(date))?;
        let elapsed_years = age.elapsed_years(date);
        Ok(self.config.aging().apply(
            &color,
            elapsed_years,
            self.config.max_age_years(),
            self.config.max_age_filter_percentage(),
        ))
    }

    /// Parses `input` as a date (see [`parse_date`]) and returns its color as
    /// uppercase `#RRGGBB`.
    pub fn query(&self, input: &str, format: Option<&str>, age: Age) -> Result<String> {
        let date = parse_date(input, format)?;
        Ok(self.color_on(date, age)?.to_hex())
    }
}
