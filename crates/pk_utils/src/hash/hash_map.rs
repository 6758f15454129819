//! Re-export [`HashMap`] from [hashbrown] crate, defaulting to [`FixedHashState`].

use hashbrown::hash_map as hb;

use crate::hash::FixedHashState;

pub use hb::{Entry, OccupiedEntry, VacantEntry};
pub use hb::{IntoIter, Iter, IterMut, Keys, Values};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use pk_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, usize> = HashMap::default();
/// map.insert("a", 0);
/// assert_eq!(map.get("a"), Some(&0));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hb::HashMap<K, V, S>;

#[cfg(test)]
mod tests {
    use super::HashMap;

    #[test]
    fn const_new() {
        static EMPTY: HashMap<u32, u32> = HashMap::with_hasher(crate::hash::FixedHashState);
        assert!(EMPTY.is_empty());
    }

    #[test]
    fn insert_and_overwrite() {
        let mut map: HashMap<&str, i32> = HashMap::default();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("a", 2), Some(1));
        assert_eq!(map.len(), 1);
    }
}
