use log::trace;

use crate::{
    phrase::{self, IS, IT},
    Error, Mask, Result,
};

const TO_THRESHOLD: u8 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    is_pm: bool,
}

impl ClockTime {
    pub fn new(hour: i64, minute: i64, is_pm: bool) -> Result<Self> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h < 24)
            .ok_or(Error::InvalidInput {
                field: "hour",
                value: hour,
            })?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m < 60)
            .ok_or(Error::InvalidInput {
                field: "minute",
                value: minute,
            })?;
        Ok(Self {
            hour,
            minute,
            is_pm,
        })
    }

    pub fn from_24h(hour: u32, minute: u32) -> Result<Self> {
        Self::new(hour.into(), minute.into(), hour >= 12)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_pm(&self) -> bool {
        self.is_pm
    }

    pub fn resolve(&self) -> Result<Mask> {
        let rounded = round_minute(self.minute);
        let bucket = rounded % 60;

        let mut hour = display_hour(self.hour);
        if rounded >= TO_THRESHOLD {
            hour = hour % 12 + 1;
        }

        let mut mask = Mask::EMPTY;
        mask.light(IT);
        mask.light(IS);
        for &run in phrase::minute_phrase(bucket)? {
            mask.light(run);
        }
        mask.light(phrase::hour_phrase(hour)?);
        mask.light(phrase::meridiem(self.is_pm));

        trace!("resolved {self:?} to minute bucket {bucket}, display hour {hour}");
        Ok(mask)
    }
}

pub fn resolve(hour: i32, minute: i32, is_pm: bool) -> Result<Mask> {
    ClockTime::new(hour.into(), minute.into(), is_pm)?.resolve()
}

/// Nearest multiple of five, before wrapping; 58 and 59 give 60.
pub fn round_minute(minute: u8) -> u8 {
    minute.saturating_add(2) / 5 * 5
}

pub fn minute_bucket(minute: u8) -> u8 {
    round_minute(minute) % 60
}

pub fn display_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_minute() {
        assert_eq!(round_minute(0), 0);
        assert_eq!(round_minute(2), 0);
        assert_eq!(round_minute(3), 5);
        assert_eq!(round_minute(32), 30);
        assert_eq!(round_minute(33), 35);
        assert_eq!(round_minute(57), 55);
        assert_eq!(round_minute(58), 60);
        assert_eq!(round_minute(59), 60);
    }

    #[test]
    fn test_minute_bucket_wraps() {
        assert_eq!(minute_bucket(58), 0);
        assert_eq!(minute_bucket(59), 0);
        assert_eq!(minute_bucket(57), 55);
    }

    #[test]
    fn test_display_hour() {
        assert_eq!(display_hour(0), 12);
        assert_eq!(display_hour(12), 12);
        assert_eq!(display_hour(13), 1);
        assert_eq!(display_hour(23), 11);
        assert_eq!(display_hour(7), 7);
    }

    #[test]
    fn test_clock_time_validation() {
        assert!(ClockTime::new(23, 59, true).is_ok());
        assert_eq!(
            ClockTime::new(24, 0, false),
            Err(Error::InvalidInput {
                field: "hour",
                value: 24
            })
        );
        assert_eq!(
            ClockTime::new(3, -1, false),
            Err(Error::InvalidInput {
                field: "minute",
                value: -1
            })
        );
        assert!(ClockTime::new(-5, 10, false).is_err());
        assert!(ClockTime::new(5, 60, false).is_err());
        assert!(ClockTime::new(1000, 0, false).is_err());
    }

    #[test]
    fn test_from_24h() {
        let time = ClockTime::from_24h(16, 35).unwrap();
        assert!(time.is_pm());
        assert_eq!((time.hour(), time.minute()), (16, 35));
        assert!(!ClockTime::from_24h(0, 0).unwrap().is_pm());
        assert!(ClockTime::from_24h(12, 0).unwrap().is_pm());
        assert!(ClockTime::from_24h(24, 0).is_err());
    }

    #[test]
    fn test_resolve_reads_as_sentence() {
        assert_eq!(
            resolve(4, 35, true).unwrap().words(),
            "IT IS TWENTYFIVE TO FIVE PM"
        );
        assert_eq!(
            resolve(4, 25, false).unwrap().words(),
            "IT IS TWENTYFIVE PAST FOUR AM"
        );
        assert_eq!(resolve(7, 0, false).unwrap().words(), "IT IS SEVEN OCLOCK AM");
        assert_eq!(resolve(3, 58, false).unwrap().words(), "IT IS FOUR OCLOCK AM");
        assert_eq!(resolve(12, 45, true).unwrap().words(), "IT IS QUARTER TO ONE PM");
        assert_eq!(resolve(21, 10, true).unwrap().words(), "IT IS TEN PAST NINE PM");
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        assert!(matches!(
            resolve(3, -1, false),
            Err(Error::InvalidInput { field: "minute", .. })
        ));
        assert!(matches!(
            resolve(24, 0, false),
            Err(Error::InvalidInput { field: "hour", .. })
        ));
    }
}
