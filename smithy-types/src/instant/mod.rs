/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds relative to the Unix epoch.
///
/// `subsecond_nanos` is always below one second and always counts forward, so
/// `-0.5` seconds is stored as `(-1, 500_000_000)`. Ordering is chronological.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant::from_secs_and_nanos(
            epoch_seconds,
            (fraction * f64::from(NANOS_PER_SECOND)) as u32,
        )
    }

    /// Nanoseconds of a full second or more carry into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add(i64::from(subsecond_nanos / NANOS_PER_SECOND)),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => {
                Instant::from_secs_and_nanos(duration.as_secs() as i64, duration.subsec_nanos())
            }
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => {
                        Instant::from_secs_and_nanos(seconds - 1, NANOS_PER_SECOND - nanos)
                    }
                }
            }
        }
    }

    /// Parses `s` in the given format.
    ///
    /// `Format::DateTime` accepts any RFC 3339 offset and normalizes to UTC.
    /// `Format::EpochSeconds` accepts an optional sign and up to nine fractional digits.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        let parsed = match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        };
        parsed.map_err(|reason| InstantParseError {
            format,
            input: s.to_owned(),
            reason,
        })
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.subsecond_nanos) / f64::from(NANOS_PER_SECOND)
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Renders the instant in the given format.
    ///
    /// Instants too far from the epoch to have a calendar date are rendered as epoch
    /// seconds even when `Format::DateTime` is requested.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => format::rfc3339::format(self.seconds, self.subsecond_nanos)
                .unwrap_or_else(|| self.fmt(Format::EpochSeconds)),
            Format::EpochSeconds => {
                format::epoch_seconds::format(self.seconds, self.subsecond_nanos)
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// RFC 3339 in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Seconds since the epoch with an optional fraction, e.g. `1576540098.52`.
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantParseError {
    format: Format,
    input: String,
    reason: &'static str,
}

impl InstantParseError {
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse `{}` as {:?}: {}",
            self.input, self.format, self.reason
        )
    }
}

impl Error for InstantParseError {}

#[cfg(feature = "serde-serialize")]
mod ser {
    use super::{Format, Instant};
    use serde::{Serialize, Serializer};

    impl Serialize for Instant {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.fmt(Format::DateTime))
            } else {
                (self.seconds, self.subsecond_nanos).serialize(serializer)
            }
        }
    }
}

#[cfg(feature = "serde-deserialize")]
mod de {
    use super::{Format, Instant};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    impl<'de> Deserialize<'de> for Instant {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            if deserializer.is_human_readable() {
                let s = String::deserialize(deserializer)?;
                // out-of-range instants are written as epoch seconds
                Instant::from_str(&s, Format::DateTime)
                    .or_else(|_| Instant::from_str(&s, Format::EpochSeconds))
                    .map_err(D::Error::custom)
            } else {
                let (seconds, subsecond_nanos) = <(i64, u32)>::deserialize(deserializer)?;
                Ok(Instant::from_secs_and_nanos(seconds, subsecond_nanos))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn whole_seconds_have_no_fraction() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540090");
        assert!(!instant.has_nanos());
    }

    #[test]
    fn nanos_carry_into_seconds() {
        let instant = Instant::from_secs_and_nanos(10, 2_500_000_000);
        assert_eq!(instant.epoch_seconds(), 12);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn negative_instants() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
        assert_eq!(instant.fmt(Format::DateTime), "1969-12-31T23:59:58.5Z");
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds).unwrap(),
            instant
        );
        assert_eq!(
            Instant::from_str("-0.25", Format::EpochSeconds)
                .unwrap()
                .fmt(Format::EpochSeconds),
            "-0.25"
        );
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(Instant::from(before), Instant::from_f64(-1.5));
        let after = UNIX_EPOCH + Duration::new(5, 7);
        assert_eq!(Instant::from(after), Instant::from_secs_and_nanos(5, 7));
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let parsed = Instant::from_str("2019-12-17T01:48:18.52+02:00", Format::DateTime);
        assert_eq!(
            parsed,
            Ok(Instant::from_fractional_seconds(1576540098, 0.52))
        );
    }

    #[test]
    fn parse_errors() {
        for (input, format) in [
            ("", Format::EpochSeconds),
            ("12a", Format::EpochSeconds),
            ("1.", Format::EpochSeconds),
            ("1.1234567891", Format::EpochSeconds),
            ("2019-12-16 23:48:18", Format::DateTime),
            ("not a date", Format::DateTime),
        ] {
            let err = Instant::from_str(input, format).unwrap_err();
            assert_eq!(err.input(), input);
            assert_eq!(err.format(), format);
            assert!(err.to_string().contains(input));
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let mut instants = vec![
            Instant::from_f64(1.5),
            Instant::from_f64(-0.5),
            Instant::from_epoch_seconds(1),
        ];
        instants.sort();
        assert_eq!(
            instants,
            vec![
                Instant::from_f64(-0.5),
                Instant::from_epoch_seconds(1),
                Instant::from_f64(1.5),
            ]
        );
    }

    #[test]
    fn out_of_range_date_time_falls_back_to_epoch_seconds() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert_eq!(instant.fmt(Format::DateTime), i64::MAX.to_string());
    }

    #[test]
    fn epoch_seconds_limits() {
        for instant in [
            Instant::from_epoch_seconds(i64::MIN),
            Instant::from_secs_and_nanos(i64::MIN, 1),
            Instant::from_epoch_seconds(i64::MAX),
            Instant::from_secs_and_nanos(i64::MAX, 999_999_999),
        ] {
            let rendered = instant.fmt(Format::EpochSeconds);
            assert_eq!(
                Instant::from_str(&rendered, Format::EpochSeconds),
                Ok(instant)
            );
        }
        assert_eq!(
            Instant::from_epoch_seconds(i64::MIN).fmt(Format::DateTime),
            "-9223372036854775808"
        );
        for input in [
            "-9223372036854775809",
            "9223372036854775808",
            "-9223372036854775808.5",
        ] {
            let err = Instant::from_str(input, Format::EpochSeconds).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{}", err);
        }
    }

    #[cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]
    #[test]
    fn serde_reads_back_instants_without_a_calendar_date() {
        for instant in [
            Instant::from_epoch_seconds(i64::MIN),
            Instant::from_secs_and_nanos(i64::MAX, 500_000_000),
            Instant::from_fractional_seconds(1576540098, 0.52),
        ] {
            let json = serde_json::to_string(&instant).unwrap();
            let parsed: Instant = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, instant);
        }
    }

    proptest! {
        #[test]
        fn date_time_parses_what_it_formats(
            seconds in -62_135_596_800i64..253_402_300_799i64,
            nanos in 0u32..1_000_000_000u32,
        ) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let rendered = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&rendered, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn epoch_seconds_parses_what_it_formats(
            seconds in any::<i64>(),
            nanos in 0u32..1_000_000_000u32,
        ) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let rendered = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&rendered, Format::EpochSeconds).unwrap(), instant);
        }
    }
}
