use alloc::borrow::Cow;
use core::fmt;

// -----------------------------------------------------------------------------
// Date

/// A point in time, stored as milliseconds since the Unix epoch.
///
/// A `NaN` timestamp represents an invalid date; it is still a `Date`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Date {
    millis: f64,
}

impl Date {
    #[inline]
    pub const fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    /// Returns the current system time.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64() * 1000.0,
            Err(before) => -(before.duration().as_secs_f64() * 1000.0),
        };
        Self { millis }
    }

    #[inline]
    pub const fn millis(&self) -> f64 {
        self.millis
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.millis.is_nan()
    }
}

// -----------------------------------------------------------------------------
// RegExp

/// A regular-expression literal: its pattern source and flags.
///
/// Only the literal is carried; matching is left to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegExp {
    source: Cow<'static, str>,
    flags: Cow<'static, str>,
}

impl RegExp {
    pub fn new(source: impl Into<Cow<'static, str>>, flags: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::{Date, RegExp};

    #[test]
    fn invalid_date() {
        assert!(!Date::from_millis(f64::NAN).is_valid());
        assert!(Date::from_millis(0.0).is_valid());
    }

    #[cfg(feature = "std")]
    #[test]
    fn now_is_after_epoch() {
        assert!(Date::now().millis() > 0.0);
    }

    #[test]
    fn regexp_literal() {
        let re = RegExp::new("a+b", "gi");
        assert_eq!(format!("{re}"), "/a+b/gi");
        assert_eq!(re.source(), "a+b");
        assert_eq!(re.flags(), "gi");
    }
}
