/// Length of the interpolation ring. Leap years do not stretch it; a day-365
/// anchor or query simply sits one step past day 364.
pub const RING_DAYS: f64 = 365.0;

/// Fractional position of `day` on the forward arc from `lower` to `upper`.
///
/// The arc wraps past the end of the year when needed: a query before
/// `lower` moves `lower` back one year, an `upper` before `lower` moves
/// `upper` forward one year.
///
/// Degenerate input resolves to 0, i.e. fully the lower anchor's color: equal
/// bounds (a one-anchor ring), a non-finite ratio, or a ratio outside `[0, 1]`.
pub fn weight_between(lower: u16, upper: u16, day: u16) -> f64 {
    if lower == upper {
        return 0.0;
    }

    let mut lower = f64::from(lower);
    let mut upper = f64::from(upper);
    let day = f64::from(day);

    if lower > day {
        lower -= RING_DAYS;
    } else if upper < lower {
        upper += RING_DAYS;
    }

    let weight = (day - lower) / (upper - lower);
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return 0.0;
    }
    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_between_days() {
        assert_eq!(weight_between(100, 200, 125), 0.25);
    }

    #[test]
    fn test_weight_zero_on_lower_day() {
        assert_eq!(weight_between(100, 200, 100), 0.0);
    }

    #[test]
    fn test_weight_zero_for_zero_length_range() {
        assert_eq!(weight_between(100, 100, 100), 0.0);
        assert_eq!(weight_between(0, 0, 100), 0.0);
    }

    #[test]
    fn test_weight_wraps_past_new_year() {
        // 344 -> 0 is 21 days of a 41 day arc on the 365 day ring, so the
        // weight is 21/41 rather than an even 0.5 (see DESIGN.md, "Wrap example")
        let weight = weight_between(344, 20, 0);
        assert!((weight - 21.0 / 41.0).abs() < 1e-12);
        assert!((weight - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_weight_wraps_before_new_year() {
        // 356 -> 360 is 4 days of a 9 day arc ending on day 0
        let weight = weight_between(356, 0, 360);
        assert!((weight - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_weight_reaches_upper_on_leap_day() {
        assert_eq!(weight_between(356, 0, 365), 1.0);
    }

    #[test]
    fn test_weight_outside_arc_is_zero() {
        // 250 is not between 100 and 200 going forward
        assert_eq!(weight_between(100, 200, 250), 0.0);
    }

    #[test]
    fn test_weight_always_in_unit_interval() {
        for lower in (0..366).step_by(13) {
            for upper in (0..366).step_by(17) {
                for day in (0..366).step_by(7) {
                    let weight = weight_between(lower, upper, day);
                    assert!((0.0..=1.0).contains(&weight), "{lower} {upper} {day}");
                }
            }
        }
    }
}
