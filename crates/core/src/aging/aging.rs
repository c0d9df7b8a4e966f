use std::fmt;

use crate::color::color::Color;

/// Token that selects [`Greyscale`] in an option set.
pub const GREYSCALE_TOKEN: &str = "greyscale";

/// A transform applied to the interpolated color based on how many years
/// have passed since the queried date.
pub trait AgingFn: Send + Sync {
    fn apply(
        &self,
        color: &Color,
        elapsed_years: f64,
        max_age_years: Option<f64>,
        max_age_filter_percentage: Option<f64>,
    ) -> Color;
}

/// No aging. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl AgingFn for Identity {
    fn apply(&self, color: &Color, _: f64, _: Option<f64>, _: Option<f64>) -> Color {
        *color
    }
}

/// Fades the color toward its greyscale version.
///
/// The fade amount is `elapsed / max_age_years * max_age_filter_percentage`.
/// It is not capped: past `max_age_years` the color keeps fading beyond the
/// configured filter level.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greyscale;

impl AgingFn for Greyscale {
    fn apply(
        &self,
        color: &Color,
        elapsed_years: f64,
        max_age_years: Option<f64>,
        max_age_filter_percentage: Option<f64>,
    ) -> Color {
        if max_age_years.is_none() && max_age_filter_percentage.is_none() {
            return *color;
        }

        let elapsed_years = if elapsed_years.is_finite() {
            elapsed_years
        } else {
            0.0
        };
        let max_age_years = max_age_years.unwrap_or(f64::NAN);
        let max_age_filter_percentage = max_age_filter_percentage.unwrap_or(f64::NAN);

        let amount = elapsed_years / max_age_years * max_age_filter_percentage;
        if !amount.is_finite() {
            log::debug!("Aging amount is not finite, leaving {} unchanged", color);
            return *color;
        }

        color.lerp(&color.greyscale(), amount)
    }
}

impl<F> AgingFn for F
where
    F: Fn(&Color, f64, Option<f64>, Option<f64>) -> Color + Send + Sync,
{
    fn apply(
        &self,
        color: &Color,
        elapsed_years: f64,
        max_age_years: Option<f64>,
        max_age_filter_percentage: Option<f64>,
    ) -> Color {
        self(color, elapsed_years, max_age_years, max_age_filter_percentage)
    }
}

impl fmt::Debug for dyn AgingFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AgingFn")
    }
}
