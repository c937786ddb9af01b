//! Clock-time parsing for time-signal registration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("time format is not correct")]
pub struct TimeFormatError;

/// A wall-clock time of day parsed from an "HH:MM" string.
///
/// The original digit strings are kept verbatim so that "07:05" renders
/// back as "05 07", not "5 7", in the crontab line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: String,
    minute: String,
}

impl TimeOfDay {
    /// Parse "HH:MM". Hour must be in 0-24 and minute in 0-60; 24:00 is
    /// the only accepted hour-24 time.
    pub fn parse(raw: &str) -> Result<Self, TimeFormatError> {
        let fields: Vec<&str> = raw.split(':').collect();
        if fields.len() != 2 {
            return Err(TimeFormatError);
        }

        let hour: i32 = fields[0].parse().map_err(|_| TimeFormatError)?;
        let minute: i32 = fields[1].parse().map_err(|_| TimeFormatError)?;

        if !(0..=24).contains(&hour) {
            return Err(TimeFormatError);
        }
        if !(0..=60).contains(&minute) || (hour == 24 && minute != 0) {
            return Err(TimeFormatError);
        }

        Ok(Self {
            hour: fields[0].to_string(),
            minute: fields[1].to_string(),
        })
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn minute(&self) -> &str {
        &self.minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_preserves_digit_strings() {
        let time = TimeOfDay::parse("07:05").unwrap();
        assert_eq!(time.hour(), "07");
        assert_eq!(time.minute(), "05");

        let time = TimeOfDay::parse("0:0").unwrap();
        assert_eq!(time.hour(), "0");
        assert_eq!(time.minute(), "0");
    }

    #[test]
    fn accepts_midnight_as_hour_24() {
        let time = TimeOfDay::parse("24:00").unwrap();
        assert_eq!(time.hour(), "24");
        assert_eq!(time.minute(), "00");
    }

    #[test]
    fn rejects_minutes_past_midnight_at_hour_24() {
        assert_eq!(TimeOfDay::parse("24:01"), Err(TimeFormatError));
    }

    #[test]
    fn rejects_out_of_range_hours() {
        assert_eq!(TimeOfDay::parse("25:00"), Err(TimeFormatError));
        assert_eq!(TimeOfDay::parse("-1:00"), Err(TimeFormatError));
    }

    #[test]
    fn minute_upper_bound_is_sixty() {
        assert!(TimeOfDay::parse("1:60").is_ok());
        assert_eq!(TimeOfDay::parse("1:61"), Err(TimeFormatError));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert_eq!(TimeOfDay::parse("12"), Err(TimeFormatError));
        assert_eq!(TimeOfDay::parse("1:2:3"), Err(TimeFormatError));
        assert_eq!(TimeOfDay::parse(""), Err(TimeFormatError));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert_eq!(TimeOfDay::parse("aa:bb"), Err(TimeFormatError));
        assert_eq!(TimeOfDay::parse("12:"), Err(TimeFormatError));
        assert_eq!(TimeOfDay::parse(":30"), Err(TimeFormatError));
        assert_eq!(TimeOfDay::parse("1 2:30"), Err(TimeFormatError));
    }
}
