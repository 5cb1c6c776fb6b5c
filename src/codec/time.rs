//! Conversion between UTC instants and [`ExternalTimePoint`] values.
//!
//! Internal instants are [`jiff::Timestamp`] values, which are UTC by
//! construction. Decoding validates the external kind tag and refuses
//! anything that is not explicitly UTC: a locally-zoned point has an
//! ambiguous offset and an unspecified one has no zone at all, and neither
//! can be recovered after the fact. Absolute time is safety-relevant to the
//! surrounding application, so neither is ever coerced.

use jiff::{
    Timestamp, Zoned,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};

use crate::codec::TimeCodecError;
use crate::external::{ExternalTimePoint, TimePointKind};

/// Decodes an external time point into a UTC instant.
///
/// The external representation carries nothing finer than a millisecond, so
/// the result has millisecond resolution.
///
/// # Errors
///
/// Returns [`TimeCodecError::LocalKind`], [`TimeCodecError::UnspecifiedKind`],
/// or [`TimeCodecError::UnknownKind`] for a kind tag other than UTC, and
/// [`TimeCodecError::InvalidFields`] when the civil fields do not form a
/// valid instant.
pub fn decode(ext: &ExternalTimePoint) -> Result<Timestamp, TimeCodecError> {
    match ext.kind {
        TimePointKind::Utc => {}
        TimePointKind::Local => return Err(TimeCodecError::LocalKind { time_point: *ext }),
        TimePointKind::Unspecified => {
            return Err(TimeCodecError::UnspecifiedKind { time_point: *ext });
        }
        TimePointKind::Other(raw) => {
            return Err(TimeCodecError::UnknownKind {
                raw,
                time_point: *ext,
            });
        }
    }

    let date = Date::new(ext.year, ext.month, ext.day)?;
    let time = Time::new(
        ext.hour,
        ext.minute,
        ext.second,
        i32::from(ext.millisecond) * 1_000_000,
    )?;
    let zoned = DateTime::from_parts(date, time).to_zoned(TimeZone::UTC)?;
    Ok(zoned.timestamp())
}

/// Encodes a UTC instant as an external time point.
///
/// Sub-millisecond precision is rounded away with round-half-to-even at the
/// millisecond boundary, matching the host numeric rounding primitive. Ties
/// therefore sometimes round down: 487.500 ms becomes 488 but 852.500 ms
/// becomes 852.
pub fn encode(time_point: Timestamp) -> ExternalTimePoint {
    let millisecond = round_micros_to_millis(time_point.as_microsecond());
    // In range for any timestamp rounded to milliseconds.
    let rounded = Timestamp::from_millisecond(millisecond)
        .unwrap_or(time_point)
        .to_zoned(TimeZone::UTC);

    ExternalTimePoint {
        year: rounded.year(),
        month: rounded.month(),
        day: rounded.day(),
        hour: rounded.hour(),
        minute: rounded.minute(),
        second: rounded.second(),
        millisecond: rounded.millisecond(),
        kind: TimePointKind::Utc,
    }
}

/// Encodes a zone-carrying host value as an external time point.
///
/// Boundary entry point for values arriving from host scripts. Only values
/// in the UTC time zone are accepted; an instant qualified with any other
/// zone is rejected rather than silently converted, mirroring the decode
/// rules.
///
/// # Errors
///
/// Returns [`TimeCodecError::NotUtc`] when the value's time zone is not UTC.
pub fn encode_zoned(zoned: &Zoned) -> Result<ExternalTimePoint, TimeCodecError> {
    if zoned.time_zone().iana_name() != Some("UTC") {
        return Err(TimeCodecError::NotUtc {
            zoned: Box::new(zoned.clone()),
        });
    }
    Ok(encode(zoned.timestamp()))
}

/// Round-half-to-even at the millisecond boundary, in integer arithmetic so
/// exact half-millisecond ties are never blurred by float representation.
fn round_micros_to_millis(micros: i64) -> i64 {
    let quotient = micros.div_euclid(1000);
    let remainder = micros.rem_euclid(1000);
    match remainder.cmp(&500) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn utc_point(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        millisecond: i16,
    ) -> ExternalTimePoint {
        ExternalTimePoint {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            kind: TimePointKind::Utc,
        }
    }

    fn timestamp_with_micros(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        micros: i32,
    ) -> Timestamp {
        date(year, month, day)
            .at(hour, minute, second, micros * 1_000)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp()
    }

    #[test]
    fn decodes_a_utc_time_point() {
        let decoded = decode(&utc_point(2020, 8, 5, 6, 59, 41, 726)).unwrap();
        assert_eq!(
            decoded,
            timestamp_with_micros(2020, 8, 5, 6, 59, 41, 726_000)
        );
    }

    #[test]
    fn rejects_a_local_time_point() {
        let mut tp = utc_point(2024, 11, 24, 18, 56, 35, 45);
        tp.kind = TimePointKind::Local;

        let err = decode(&tp).unwrap_err();
        assert!(matches!(err, TimeCodecError::LocalKind { .. }));
        assert!(err.to_string().contains("2024-11-24T18:56:35.045"));
    }

    #[test]
    fn rejects_an_unspecified_time_point() {
        let mut tp = utc_point(2023, 7, 31, 1, 11, 26, 216);
        tp.kind = TimePointKind::Unspecified;

        let err = decode(&tp).unwrap_err();
        assert!(matches!(err, TimeCodecError::UnspecifiedKind { .. }));
    }

    #[test]
    fn rejects_an_unknown_kind_tag() {
        let mut tp = utc_point(2019, 2, 10, 9, 36, 36, 914);
        tp.kind = TimePointKind::from_raw(4);

        let err = decode(&tp).unwrap_err();
        assert!(matches!(err, TimeCodecError::UnknownKind { raw: 4, .. }));
    }

    #[test]
    fn rejects_invalid_calendar_fields() {
        let tp = utc_point(2023, 2, 30, 0, 0, 0, 0);
        let err = decode(&tp).unwrap_err();
        assert!(matches!(err, TimeCodecError::InvalidFields(_)));
    }

    #[test]
    fn encodes_with_half_even_millisecond_rounding() {
        let cases = [
            // (microseconds within the second, expected milliseconds)
            (23_124, utc_point(2017, 3, 22, 3, 0, 37, 23)),
            (654_859, utc_point(2020, 9, 20, 22, 11, 51, 655)),
            (978_531, utc_point(2022, 2, 2, 23, 35, 39, 979)),
            // Exact ties: 487.5 rounds up to the even 488, 852.5 rounds
            // down to the even 852.
            (487_500, utc_point(2019, 2, 7, 10, 18, 17, 488)),
            (852_500, utc_point(2022, 1, 14, 20, 29, 18, 852)),
        ];

        for (micros, expected) in cases {
            let ts = timestamp_with_micros(
                expected.year,
                expected.month,
                expected.day,
                expected.hour,
                expected.minute,
                expected.second,
                micros,
            );
            assert_eq!(encode(ts), expected);
        }
    }

    #[test]
    fn rounding_carries_into_the_next_second() {
        let ts = timestamp_with_micros(2020, 12, 31, 23, 59, 59, 999_700);
        assert_eq!(encode(ts), utc_point(2021, 1, 1, 0, 0, 0, 0));
    }

    #[test]
    fn encode_then_decode_is_identity_at_millisecond_resolution() {
        let tp = utc_point(2022, 2, 2, 23, 35, 39, 979);
        let decoded = decode(&tp).unwrap();
        assert_eq!(encode(decoded), tp);

        let ts = timestamp_with_micros(1998, 6, 1, 12, 30, 15, 250_000);
        assert_eq!(decode(&encode(ts)).unwrap(), ts);
    }

    #[test]
    fn encode_zoned_requires_the_utc_zone() {
        let utc = date(2025, 12, 21)
            .at(9, 15, 7, 896_671_000)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        let encoded = encode_zoned(&utc).unwrap();
        assert_eq!(encoded, utc_point(2025, 12, 21, 9, 15, 7, 897));

        let local = utc.with_time_zone(TimeZone::fixed(jiff::tz::offset(-5)));
        let err = encode_zoned(&local).unwrap_err();
        assert!(matches!(err, TimeCodecError::NotUtc { .. }));
    }
}
