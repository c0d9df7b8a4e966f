pub use aging::aging::{AgingFn, Greyscale, Identity, GREYSCALE_TOKEN};
pub use calendar::calendar::{day_of_year, parse_date, today, years_between};
pub use color::color::{blend, Color};
pub use color_time::{Age, ColorTime};
pub use config::{
    ColorTimeConfig, ConfigBuilder, AGING_FN_KEY, MAX_AGE_FILTER_PERCENTAGE_KEY,
    MAX_AGE_YEARS_KEY,
};
pub use error::{ColorTimeError, Result};
pub use ring::ring::{bounding_days, is_valid_day, AnchorPoint, BoundingPair, MAX_DAYS_IN_YEAR};
pub use ring::weight::{weight_between, RING_DAYS};

mod aging;
mod calendar;
mod color;
mod color_time;
mod config;
mod error;
mod ring;
