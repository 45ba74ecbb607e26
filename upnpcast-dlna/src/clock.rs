//! UPnP `REL_TIME` clock strings.
//!
//! Requests carry `HH:MM:SS` built by [`seconds_to_clock`]. Renderers report
//! `TrackDuration` and `RelTime` in the same shape, sometimes with fractional
//! seconds or without the hour component.

use std::time::Duration;

use crate::error::{DlnaError, DlnaResult};

/// Format whole seconds as zero-padded `HH:MM:SS`. Hours are not wrapped.
///
/// ```
/// assert_eq!(upnpcast_dlna::clock::seconds_to_clock(3725), "01:02:05");
/// assert_eq!(upnpcast_dlna::clock::seconds_to_clock(360_000), "100:00:00");
/// ```
pub fn seconds_to_clock(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a duration as `HH:MM:SS`, rounding to the nearest second.
pub fn duration_to_clock(duration: Duration) -> String {
    seconds_to_clock(duration.saturating_add(Duration::from_millis(500)).as_secs())
}

/// Parse a strict `HH:MM:SS` clock string into whole seconds.
///
/// Hours and minutes must be integers. Seconds may be fractional and are
/// rounded half away from zero.
pub fn clock_to_seconds(clock: &str) -> DlnaResult<u64> {
    let invalid = || DlnaError::InvalidClockFormat(clock.to_string());

    let parts: Vec<&str> = clock.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };

    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds = parse_seconds(seconds).ok_or_else(invalid)?.round();

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes.checked_mul(60)?))
        .and_then(|hm| hm.checked_add(seconds as u64))
        .ok_or_else(invalid)
}

/// Parse a renderer-reported duration in `MM:SS` or `HH:MM:SS` form.
///
/// Minutes and seconds must be below 60. Fractional seconds are kept.
pub fn parse_duration(clock: &str) -> DlnaResult<Duration> {
    let invalid = || DlnaError::InvalidClockFormat(clock.to_string());

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => ("0", *minutes, *seconds),
        [hours, minutes, seconds] => (*hours, *minutes, *seconds),
        _ => return Err(invalid()),
    };

    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds = parse_seconds(seconds).ok_or_else(invalid)?;
    if minutes >= 60 || seconds >= 60.0 {
        return Err(invalid());
    }

    let whole = hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60))
        .ok_or_else(invalid)?;
    let fraction = Duration::try_from_secs_f64(seconds).map_err(|_| invalid())?;

    Ok(Duration::from_secs(whole) + fraction)
}

/// Normalise a clock string to zero-padded `HH:MM:SS`.
///
/// ```
/// assert_eq!(upnpcast_dlna::clock::format_clock_time("0:3:58.6").unwrap(), "00:03:59");
/// ```
pub fn format_clock_time(clock: &str) -> DlnaResult<String> {
    clock_to_seconds(clock).map(seconds_to_clock)
}

fn parse_seconds(text: &str) -> Option<f64> {
    // f64 parsing accepts "inf", "NaN" and exponents; only plain decimals are valid here.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    text.parse::<f64>().ok().filter(|s| s.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "00:00:00")]
    #[case(59, "00:00:59")]
    #[case(60, "00:01:00")]
    #[case(3599, "00:59:59")]
    #[case(3600, "01:00:00")]
    #[case(86_400, "24:00:00")]
    fn test_seconds_to_clock(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(seconds_to_clock(seconds), expected);
    }

    #[rstest]
    #[case("00:00:00", 0)]
    #[case("01:02:03", 3723)]
    #[case("0:03:58", 238)]
    #[case("00:00:10.4", 10)]
    #[case("00:00:10.5", 11)]
    #[case("00:00:59.5", 60)]
    #[case("100:00:00", 360_000)]
    fn test_clock_to_seconds(#[case] clock: &str, #[case] expected: u64) {
        assert_eq!(clock_to_seconds(clock).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("10")]
    #[case("00:10")]
    #[case("00:00:00:00")]
    #[case("aa:00:00")]
    #[case("00:bb:00")]
    #[case("00:00:cc")]
    #[case("-1:00:00")]
    #[case("00:00:-1")]
    #[case("00:00:inf")]
    #[case("00:00:NaN")]
    #[case("1.5:00:00")]
    #[case("NOT_IMPLEMENTED")]
    fn test_clock_to_seconds_rejects_malformed(#[case] clock: &str) {
        assert_eq!(
            clock_to_seconds(clock),
            Err(DlnaError::InvalidClockFormat(clock.to_string()))
        );
    }

    #[test]
    fn test_duration_to_clock_rounds() {
        assert_eq!(duration_to_clock(Duration::from_millis(1_499)), "00:00:01");
        assert_eq!(duration_to_clock(Duration::from_millis(1_500)), "00:00:02");
        assert_eq!(duration_to_clock(Duration::from_secs(5_400)), "01:30:00");
    }

    #[rstest]
    #[case("03:58", Duration::from_secs(238))]
    #[case("01:03:58", Duration::from_secs(3838))]
    #[case("0:00:01.250", Duration::from_millis(1250))]
    #[case("12:00:00", Duration::from_secs(43_200))]
    fn test_parse_duration(#[case] clock: &str, #[case] expected: Duration) {
        assert_eq!(parse_duration(clock).unwrap(), expected);
    }

    #[rstest]
    #[case("58")]
    #[case("1:2:3:4")]
    #[case("60:00")]
    #[case("00:60")]
    #[case("00:61:00")]
    #[case("x:00")]
    fn test_parse_duration_rejects_malformed(#[case] clock: &str) {
        assert!(matches!(parse_duration(clock), Err(DlnaError::InvalidClockFormat(_))));
    }

    #[test]
    fn test_format_clock_time() {
        assert_eq!(format_clock_time("1:2:3").unwrap(), "01:02:03");
        assert!(format_clock_time("1:2").is_err());
    }

    proptest! {
        #[test]
        fn prop_clock_round_trip(seconds in 0u64..360_000) {
            prop_assert_eq!(clock_to_seconds(&seconds_to_clock(seconds)).unwrap(), seconds);
        }

        #[test]
        fn prop_parse_duration_agrees_with_clock_to_seconds(seconds in 0u64..360_000) {
            let clock = seconds_to_clock(seconds);
            prop_assert_eq!(parse_duration(&clock).unwrap(), Duration::from_secs(seconds));
        }

        #[test]
        fn prop_wrong_part_count_is_rejected(parts in proptest::collection::vec(0u32..100, 0..6)) {
            prop_assume!(parts.len() != 3);
            let clock = parts.iter().map(u32::to_string).collect::<Vec<_>>().join(":");
            prop_assert!(matches!(clock_to_seconds(&clock), Err(DlnaError::InvalidClockFormat(_))));
        }
    }
}
