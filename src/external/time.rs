use std::fmt;

/// The time zone designation carried by an [`ExternalTimePoint`].
///
/// Mirrors the external platform's kind tag. `Other` preserves any raw tag
/// value outside the three defined ones, so a malformed value crossing the
/// bridge can be reported rather than silently reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePointKind {
    Unspecified,
    Utc,
    Local,
    Other(i32),
}

impl TimePointKind {
    /// Maps the external platform's raw kind encoding
    /// (0 = unspecified, 1 = UTC, 2 = local).
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Unspecified,
            1 => Self::Utc,
            2 => Self::Local,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for TimePointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("unspecified"),
            Self::Utc => f.write_str("UTC"),
            Self::Local => f.write_str("local"),
            Self::Other(raw) => write!(f, "unknown ({raw})"),
        }
    }
}

/// An external time point: civil fields at millisecond resolution plus a
/// time zone kind.
///
/// The external representation has no granularity finer than a millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalTimePoint {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
    pub millisecond: i16,
    pub kind: TimePointKind,
}

impl fmt::Display for ExternalTimePoint {
    /// Renders the round-trip form used in error messages, e.g.
    /// `2024-11-24T18:56:35.045 (local)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03} ({})",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
            self.kind,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_kind_tags_map_to_the_external_encoding() {
        assert_eq!(TimePointKind::from_raw(0), TimePointKind::Unspecified);
        assert_eq!(TimePointKind::from_raw(1), TimePointKind::Utc);
        assert_eq!(TimePointKind::from_raw(2), TimePointKind::Local);
        assert_eq!(TimePointKind::from_raw(7), TimePointKind::Other(7));
    }

    #[test]
    fn display_echoes_the_full_time_point() {
        let tp = ExternalTimePoint {
            year: 2024,
            month: 11,
            day: 24,
            hour: 18,
            minute: 56,
            second: 35,
            millisecond: 45,
            kind: TimePointKind::Local,
        };
        assert_eq!(tp.to_string(), "2024-11-24T18:56:35.045 (local)");
    }
}
