use chrono::{DateTime, Duration, TimeZone};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Whole days plus the hour, minute and second components of what remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn between<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        Self::from_remaining(target.clone() - now.clone())
    }

    /// Sub-second remainders are truncated; anything not strictly positive
    /// counts as zero.
    pub fn from_remaining(remaining: Duration) -> Self {
        let millis = remaining.num_milliseconds();
        if millis <= 0 {
            return Self::default();
        }
        let total = millis / 1000;
        Self {
            days: total / SECS_PER_DAY,
            hours: total % SECS_PER_DAY / SECS_PER_HOUR,
            minutes: total % SECS_PER_HOUR / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(d: u32, h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, d, h, m, s).unwrap()
    }

    #[test]
    fn one_hour_before_voting_day() {
        let left = TimeLeft::between(&at(14, 0, 0, 0), &at(13, 23, 0, 0));
        assert_eq!(left, TimeLeft { days: 0, hours: 1, minutes: 0, seconds: 0 });
    }

    #[test]
    fn after_voting_day_everything_is_zero() {
        let left = TimeLeft::between(&at(14, 0, 0, 0), &at(15, 0, 0, 0));
        assert_eq!(left, TimeLeft::default());
        assert!(left.is_over());
    }

    #[test]
    fn exactly_at_target_is_zero() {
        assert!(TimeLeft::between(&at(14, 0, 0, 0), &at(14, 0, 0, 0)).is_over());
    }

    #[test]
    fn mixed_components() {
        let target = at(14, 0, 0, 0);
        let now = Utc.with_ymd_and_hms(2025, 10, 19, 9, 41, 27).unwrap();
        let left = TimeLeft::between(&target, &now);
        assert_eq!(left, TimeLeft { days: 25, hours: 14, minutes: 18, seconds: 33 });

        let back = Duration::days(left.days)
            + Duration::hours(left.hours)
            + Duration::minutes(left.minutes)
            + Duration::seconds(left.seconds);
        assert_eq!(now + back, target);
    }

    #[test]
    fn days_are_not_capped_at_a_month() {
        let left = TimeLeft::from_remaining(Duration::days(400) + Duration::seconds(59));
        assert_eq!(left, TimeLeft { days: 400, hours: 0, minutes: 0, seconds: 59 });
    }

    #[test]
    fn sub_second_remainder_is_truncated() {
        assert_eq!(
            TimeLeft::from_remaining(Duration::milliseconds(1_999)),
            TimeLeft { days: 0, hours: 0, minutes: 0, seconds: 1 }
        );
        assert!(TimeLeft::from_remaining(Duration::milliseconds(999)).is_over());
    }
}
