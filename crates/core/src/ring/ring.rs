use serde::{Deserialize, Serialize};

use crate::color::color::Color;
use crate::error::{ColorTimeError, Result};

/// Exclusive upper bound for anchor days. Leap years have a day 365.
pub const MAX_DAYS_IN_YEAR: u16 = 366;

/// A day-of-year (0-indexed) at which a color applies exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorPoint<C = Color> {
    pub day: u16,
    pub color: C,
}

impl<C> AnchorPoint<C> {
    pub fn new(day: u16, color: C) -> Self {
        Self { day, color }
    }
}

/// Whether `day` can anchor a color: `0..=365`.
pub fn is_valid_day(day: i64) -> bool {
    (0..i64::from(MAX_DAYS_IN_YEAR)).contains(&day)
}

/// The two anchors that enclose a query day when walking the year forward:
/// the query lies on the arc from `lower.day` to `upper.day`, possibly
/// wrapping past the end of the year.
#[derive(Debug, PartialEq, Eq)]
pub struct BoundingPair<'a, C = Color> {
    pub lower: &'a AnchorPoint<C>,
    pub upper: &'a AnchorPoint<C>,
}

/// Finds the anchors bounding `day` on the yearly ring.
///
/// `lower` is the latest anchor on or before `day`, falling back to the latest
/// anchor of the year. `upper` is the earliest anchor after `day`, falling back
/// to the earliest anchor of the year (next year's recurrence). With a single
/// anchor both sides are that anchor.
///
/// Anchors may come in any order. When several share a day, the first one in
/// slice order is picked for both sides.
pub fn bounding_days<C>(anchors: &[AnchorPoint<C>], day: u16) -> Result<BoundingPair<'_, C>> {
    let first = anchors.first().ok_or_else(|| {
        ColorTimeError::InvalidArgument("cannot bound a day with an empty anchor set".to_string())
    })?;

    let mut lower: Option<&AnchorPoint<C>> = None;
    let mut upper: Option<&AnchorPoint<C>> = None;
    let mut earliest = first;
    let mut latest = first;

    for anchor in anchors {
        if anchor.day <= day {
            if lower.map_or(true, |l| anchor.day > l.day) {
                lower = Some(anchor);
            }
        } else if upper.map_or(true, |u| anchor.day < u.day) {
            upper = Some(anchor);
        }

        if anchor.day < earliest.day {
            earliest = anchor;
        }
        if anchor.day > latest.day {
            latest = anchor;
        }
    }

    Ok(BoundingPair {
        lower: lower.unwrap_or(latest),
        upper: upper.unwrap_or(earliest),
    })
}
