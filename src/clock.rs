use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, FixedOffset, Local, Timelike, Utc};
use chrono_tz::Tz;
use log::{debug, warn};
use wordclock_core::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(Zone::Named(tz));
        }
        parse_offset(s)
            .map(Zone::Fixed)
            .with_context(|| format!("{s:?} is neither a time zone name nor a UTC offset"))
    }

    pub fn from_arg(arg: Option<&str>) -> Self {
        let Some(arg) = arg else {
            return Zone::Local;
        };
        // an unknown zone must not stop the clock
        match Zone::parse(arg) {
            Ok(zone) => {
                debug!("using time zone {zone:?}");
                zone
            }
            Err(err) => {
                warn!("{err:?}, falling back to the system time zone");
                Zone::Local
            }
        }
    }

    pub fn now(self) -> Result<ClockTime> {
        self.at(Utc::now())
    }

    pub fn at(self, instant: DateTime<Utc>) -> Result<ClockTime> {
        let (hour, minute) = match self {
            Zone::Local => {
                let time = instant.with_timezone(&Local);
                (time.hour(), time.minute())
            }
            Zone::Named(tz) => {
                let time = instant.with_timezone(&tz);
                (time.hour(), time.minute())
            }
            Zone::Fixed(offset) => {
                let time = instant.with_timezone(&offset);
                (time.hour(), time.minute())
            }
        };
        ClockTime::from_24h(hour, minute).context("reading wall clock")
    }
}

pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).context("zero UTC offset");
    }

    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else {
        bail!("UTC offset {s:?} must start with + or -");
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if rest.len() == 4 && rest.is_char_boundary(2) => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: u32 = hours
        .parse()
        .with_context(|| format!("parsing hours of UTC offset {s:?}"))?;
    let minutes: u32 = minutes
        .parse()
        .with_context(|| format!("parsing minutes of UTC offset {s:?}"))?;
    if hours > 23 || minutes > 59 {
        bail!("UTC offset {s:?} out of range");
    }

    let secs = (hours * 3600 + minutes * 60) as i32;
    FixedOffset::east_opt(sign * secs).with_context(|| format!("UTC offset {s:?} out of range"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn secs(s: &str) -> i32 {
        parse_offset(s).unwrap().local_minus_utc()
    }

    fn noon_utc(month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(secs("Z"), 0);
        assert_eq!(secs("utc"), 0);
        assert_eq!(secs("+02:00"), 7200);
        assert_eq!(secs("-05:30"), -19800);
        assert_eq!(secs("+0545"), 20700);
        assert_eq!(secs("+9"), 32400);
        assert_eq!(secs(" -03 "), -10800);
    }

    #[test]
    fn test_parse_offset_rejects() {
        assert!(parse_offset("02:00").is_err());
        assert!(parse_offset("+02:75").is_err());
        assert!(parse_offset("+24:00").is_err());
        assert!(parse_offset("+ab").is_err());
        assert!(parse_offset("").is_err());
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!(Zone::parse("Europe/Berlin").unwrap(), Zone::Named(Tz::Europe__Berlin));
        assert_eq!(Zone::parse(" Asia/Tokyo ").unwrap(), Zone::Named(Tz::Asia__Tokyo));
        assert!(matches!(Zone::parse("+05:30").unwrap(), Zone::Fixed(_)));
        assert!(Zone::parse("Atlantis/Capital").is_err());
    }

    #[test]
    fn test_unknown_zone_falls_back_to_local() {
        assert_eq!(Zone::from_arg(Some("Berlin")), Zone::Local);
        assert_eq!(Zone::from_arg(None), Zone::Local);
        assert_eq!(
            Zone::from_arg(Some("Europe/Berlin")),
            Zone::Named(Tz::Europe__Berlin)
        );
    }

    #[test]
    fn test_named_zone_follows_daylight_saving() {
        let berlin = Zone::parse("Europe/Berlin").unwrap();
        let winter = berlin.at(noon_utc(1)).unwrap();
        let summer = berlin.at(noon_utc(7)).unwrap();
        assert_eq!(winter.hour(), 13);
        assert_eq!(summer.hour(), 14);
        assert_ne!(winter.resolve().unwrap(), summer.resolve().unwrap());

        let fixed = Zone::parse("+01:00").unwrap();
        assert_eq!(fixed.at(noon_utc(1)).unwrap().hour(), 13);
        assert_eq!(fixed.at(noon_utc(7)).unwrap().hour(), 13);
    }

    #[test]
    fn test_reading_is_valid() {
        let time = Zone::Named(Tz::America__New_York).at(noon_utc(3)).unwrap();
        assert_eq!((time.hour(), time.minute()), (8, 0));
        assert!(!time.is_pm());
        let now = Zone::Local.now().unwrap();
        assert_eq!(now.is_pm(), now.hour() >= 12);
    }
}
