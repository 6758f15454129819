//! Provide the dotted path syntax.

use core::fmt;

// -----------------------------------------------------------------------------
// Path

/// A non-empty, `.`-separated member path, borrowed from its source string.
///
/// Each segment names one level of containment. Segments are not
/// validated: any string, even an empty one, is a valid key.
///
/// # Examples
///
/// ```
/// use pk_reflect::access::Path;
///
/// let path = Path::parse("a.b.c").unwrap();
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// let (parents, last) = path.split_last();
/// assert_eq!(parents.collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(last, "c");
///
/// assert!(Path::parse("").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path<'a>(&'a str);

impl<'a> Path<'a> {
    /// Returns `None` for the empty string.
    #[inline]
    pub fn parse(path: &'a str) -> Option<Self> {
        (!path.is_empty()).then_some(Self(path))
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns the number of segments, at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.matches('.').count() + 1
    }

    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.0.split('.')
    }

    /// Splits off the final segment.
    ///
    /// The iterator yields the segments that lead to the owner of the final
    /// segment; it is empty for single-segment paths.
    pub fn split_last(&self) -> (impl Iterator<Item = &'a str> + use<'a>, &'a str) {
        let (parents, last) = match self.0.rsplit_once('.') {
            Some((parents, last)) => (Some(parents), last),
            None => (None, self.0),
        };
        (parents.into_iter().flat_map(|p| p.split('.')), last)
    }
}

impl fmt::Display for Path<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Parses a canonical array index: decimal digits without a leading zero,
/// or `"0"` itself.
///
/// # Examples
///
/// ```
/// use pk_reflect::access::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("+1"), None);
/// assert_eq!(parse_index("length"), None);
/// ```
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => segment.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Path, parse_index};

    #[test]
    fn single_segment() {
        let path = Path::parse("a").unwrap();
        let (parents, last) = path.split_last();
        assert_eq!(parents.count(), 0);
        assert_eq!(last, "a");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn empty_segments_are_keys() {
        let path = Path::parse("a..b.").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "", "b", ""]);
        assert_eq!(path.len(), 4);

        let (parents, last) = Path::parse(".").unwrap().split_last();
        assert_eq!(parents.collect::<Vec<_>>(), [""]);
        assert_eq!(last, "");
    }

    #[test]
    fn index_overflow() {
        assert_eq!(parse_index("99999999999999999999999999"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(""), None);
    }
}
