/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub(super) mod epoch_seconds {
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    pub(in crate::instant) fn format(seconds: i64, nanos: u32) -> String {
        let mut buffer = itoa::Buffer::new();
        if nanos == 0 {
            return buffer.format(seconds).to_owned();
        }
        // nanos count forward, so a negative instant renders as -(|seconds| - 1).(1s - nanos)
        let (sign, whole, fraction) = if seconds < 0 {
            ("-", (seconds + 1).unsigned_abs(), NANOS_PER_SECOND - nanos)
        } else {
            ("", seconds.unsigned_abs(), nanos)
        };
        let fraction = format!("{:09}", fraction);
        format!(
            "{}{}.{}",
            sign,
            buffer.format(whole),
            fraction.trim_end_matches('0')
        )
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, &'static str> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err("expected digits before the decimal point");
        }
        let whole = i128::from(whole.parse::<u64>().map_err(|_| "seconds out of range")?);
        let nanos = match fraction {
            None => 0,
            Some(fraction) => {
                if fraction.is_empty()
                    || fraction.len() > 9
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err("fractional seconds must have between 1 and 9 digits");
                }
                let value: u32 = fraction.parse().map_err(|_| "invalid fractional seconds")?;
                value * 10u32.pow(9 - fraction.len() as u32)
            }
        };
        let (seconds, nanos) = match (negative, nanos) {
            (false, nanos) => (whole, nanos),
            (true, 0) => (-whole, 0),
            (true, nanos) => (-whole - 1, NANOS_PER_SECOND - nanos),
        };
        let seconds = i64::try_from(seconds).map_err(|_| "seconds out of range")?;
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }
}

pub(super) mod rfc3339 {
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat, Utc};

    /// `None` when the instant has no representable calendar date.
    pub(in crate::instant) fn format(seconds: i64, nanos: u32) -> Option<String> {
        let date_time = DateTime::<Utc>::from_timestamp(seconds, nanos)?;
        if nanos == 0 {
            return Some(date_time.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let rendered = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let mut trimmed = rendered
            .trim_end_matches('Z')
            .trim_end_matches('0')
            .to_owned();
        trimmed.push('Z');
        Some(trimmed)
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, &'static str> {
        let date_time = DateTime::parse_from_rfc3339(s)
            .map_err(|_| "expected an RFC 3339 timestamp")?;
        Ok(Instant::from_secs_and_nanos(
            date_time.timestamp(),
            date_time.timestamp_subsec_nanos(),
        ))
    }
}
