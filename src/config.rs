use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use log::Level;
use thiserror::Error;

/// Voting day, read as wall-clock time in the visitor's timezone.
pub const VOTING_DAY: &str = "2025-11-14T00:00:00";
const VOTING_DAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const CONTACT_EMAIL: &str = "contact@votesam.yinyangr.com";
pub const SITE_HOST: &str = "votesam.yinyangr.com";
pub const FLYER_IMAGE: &str = "/vote-sam-flyer-1.jpg";

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("voting day {literal:?} is not a valid date: {source}")]
    Unparsable {
        literal: &'static str,
        source: chrono::ParseError,
    },
    #[error("voting day {0} does not exist in the local timezone")]
    Nonexistent(NaiveDateTime),
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn voting_day() -> Result<DateTime<Local>, ScheduleError> {
    resolve_voting_day(VOTING_DAY, &Local)
}

/// Resolves a voting-day literal in `tz`. When a DST fold makes the local
/// time ambiguous the earlier instant wins.
pub fn resolve_voting_day<Tz: TimeZone>(
    literal: &'static str,
    tz: &Tz,
) -> Result<DateTime<Tz>, ScheduleError> {
    let naive = NaiveDateTime::parse_from_str(literal, VOTING_DAY_FORMAT)
        .map_err(|source| ScheduleError::Unparsable { literal, source })?;
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or(ScheduleError::Nonexistent(naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn configured_voting_day_parses() {
        let day = resolve_voting_day(VOTING_DAY, &Utc).unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2025, 11, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn voting_day_follows_the_given_timezone() {
        let kigali = FixedOffset::east_opt(2 * 3600).unwrap();
        let day = resolve_voting_day(VOTING_DAY, &kigali).unwrap();
        assert_eq!(
            day.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2025, 11, 13, 22, 0, 0).unwrap()
        );
    }

    #[test]
    fn garbage_literal_is_reported() {
        let err = resolve_voting_day("next friday", &Utc).unwrap_err();
        assert!(matches!(err, ScheduleError::Unparsable { literal: "next friday", .. }));
        assert!(err.to_string().contains("next friday"));
    }
}
