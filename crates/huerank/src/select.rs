//! Bounded selection of the k smallest items.
//!
//! [`TopK`] keeps at most k candidates in a max-heap, so that memory stays
//! proportional to k no matter how many items stream by. Items are ordered by
//! their floating point key first and their identifier second, which makes the
//! selection deterministic even for exact ties. Not-a-number keys order after
//! all other keys.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::num::NonZeroUsize;

use crate::error::Error;
use crate::Float;

/// A candidate for selection. Only key and identifier determine the order.
#[derive(Debug)]
struct Candidate<I, T> {
    key: Float,
    id: I,
    payload: T,
}

impl<I: Ord, T> Candidate<I, T> {
    fn compare(&self, other: &Self) -> Ordering {
        // Not-a-number keys, whatever their sign, go last and tie with each other.
        self.key
            .is_nan()
            .cmp(&other.key.is_nan())
            .then_with(|| {
                self.key
                    .partial_cmp(&other.key)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl<I: Ord, T> PartialEq for Candidate<I, T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<I: Ord, T> Eq for Candidate<I, T> {}

impl<I: Ord, T> PartialOrd for Candidate<I, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<I: Ord, T> Ord for Candidate<I, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A bounded selection of the k items with the smallest keys.
///
/// # Examples
///
/// ```
/// # use huerank::select::TopK;
/// # use huerank::error::Error;
/// let mut top = TopK::new(2)?;
/// top.push(3.0, 30, "c");
/// top.push(1.0, 10, "a");
/// top.push(2.0, 20, "b");
/// top.push(1.0, 5, "z");
///
/// assert_eq!(top.len(), 2);
/// assert_eq!(top.into_sorted_vec(), vec!["z", "a"]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct TopK<I, T> {
    capacity: usize,
    heap: BinaryHeap<Candidate<I, T>>,
}

impl<I: Ord, T> TopK<I, T> {
    /// Create a new selection of at most `k` items.
    ///
    /// This function fails with [`Error::InvalidArgument`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self, Error> {
        NonZeroUsize::new(k)
            .map(Self::with_capacity)
            .ok_or(Error::InvalidArgument { name: "k", value: k })
    }

    /// Create a new selection of at most `k` items, with `k` known to be
    /// positive.
    pub(crate) fn with_capacity(k: NonZeroUsize) -> Self {
        let capacity = k.get();
        Self {
            capacity,
            // Don't trust k for preallocation; it may be much larger than the input.
            heap: BinaryHeap::with_capacity(capacity.min(64) + 1),
        }
    }

    /// Get the maximum number of selected items.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of currently selected items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Determine whether no items have been selected yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer an item for selection.
    ///
    /// If the selection is full, the item replaces the currently largest item
    /// if it orders before that item. Otherwise, the item is dropped.
    pub fn push(&mut self, key: Float, id: I, payload: T) {
        let candidate = Candidate { key, id, payload };

        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
        } else if let Some(mut largest) = self.heap.peek_mut() {
            // Dropping `largest` restores the heap property.
            if candidate < *largest {
                *largest = candidate;
            }
        }
    }

    /// Merge the other selection into this one.
    ///
    /// The result is the same as running one selection over both inputs. It
    /// has this selection's capacity.
    #[must_use = "method consumes both selections and returns the merged one"]
    pub fn merge(mut self, other: Self) -> Self {
        for Candidate { key, id, payload } in other.heap {
            self.push(key, id, payload);
        }
        self
    }

    /// Consume this selection, returning the payloads in ascending order by
    /// key and identifier.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|candidate| candidate.payload)
            .collect()
    }
}

impl<I: Ord, T> Extend<(Float, I, T)> for TopK<I, T> {
    fn extend<It: IntoIterator<Item = (Float, I, T)>>(&mut self, iter: It) {
        for (key, id, payload) in iter {
            self.push(key, id, payload);
        }
    }
}

/// Select the `k` items with the smallest keys, breaking ties by identifier.
///
/// This function consumes the items one at a time and never holds more than
/// `k` of them, so it works equally well for in-memory collections and for
/// lazily computed iterators. It returns the payloads of the selected items in
/// ascending order. If there are fewer than `k` items, it returns all of them.
///
/// This function fails with [`Error::InvalidArgument`] if `k` is zero.
///
/// # Examples
///
/// ```
/// # use huerank::select::select_k_smallest;
/// # use huerank::error::Error;
/// let words = ["delta", "alpha", "charlie", "bravo"];
/// let smallest = select_k_smallest(
///     3,
///     words.iter().enumerate().map(|(id, w)| (w.len() as f64, id, *w)),
/// )?;
/// assert_eq!(smallest, vec!["delta", "alpha", "bravo"]);
/// # Ok::<(), Error>(())
/// ```
pub fn select_k_smallest<I, T, It>(k: usize, items: It) -> Result<Vec<T>, Error>
where
    I: Ord,
    It: IntoIterator<Item = (Float, I, T)>,
{
    let mut selection = TopK::new(k)?;
    selection.extend(items);
    Ok(selection.into_sorted_vec())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{select_k_smallest, TopK};
    use crate::error::Error;

    fn random_items(rng: &mut StdRng, n: usize) -> Vec<(f64, u32, u32)> {
        // Few distinct keys force plenty of ties.
        (0..n)
            .map(|id| (rng.random_range(0..20) as f64 / 4.0, id as u32, id as u32))
            .collect()
    }

    fn sort_and_truncate(mut items: Vec<(f64, u32, u32)>, k: usize) -> Vec<u32> {
        items.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        items.truncate(k);
        items.into_iter().map(|(_, _, payload)| payload).collect()
    }

    #[test]
    fn test_zero_k() {
        assert_eq!(
            TopK::<u32, ()>::new(0).err(),
            Some(Error::InvalidArgument { name: "k", value: 0 })
        );

        let result = select_k_smallest(0, [(1.0, 1, "a")]);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_fewer_than_k() -> Result<(), Error> {
        let selected = select_k_smallest(5, [(2.0, 2, "b"), (1.0, 1, "a")])?;
        assert_eq!(selected, vec!["a", "b"]);

        let selected = select_k_smallest(5, Vec::<(f64, u32, ())>::new())?;
        assert!(selected.is_empty());
        Ok(())
    }

    #[test]
    fn test_ties_break_by_id() -> Result<(), Error> {
        let items = [(0.5, 7, 'x'), (0.5, 3, 'y'), (0.5, 5, 'z'), (0.5, 1, 'w')];
        assert_eq!(select_k_smallest(2, items)?, vec!['w', 'y']);
        Ok(())
    }

    #[test]
    fn test_nan_orders_last() -> Result<(), Error> {
        let items = [(f64::NAN, 1, 'n'), (3.0, 2, 'c'), (0.0, 3, 'a')];
        assert_eq!(select_k_smallest(2, items)?, vec!['a', 'c']);
        assert_eq!(select_k_smallest(3, items)?, vec!['a', 'c', 'n']);

        let items = [(-f64::NAN, 1, 'n'), (0.0, 2, 'a')];
        assert_eq!(select_k_smallest(1, items)?, vec!['a']);

        let items = [
            (f64::INFINITY, 5, 'i'),
            (-f64::NAN, 2, 'm'),
            (f64::NAN, 1, 'p'),
            (f64::NEG_INFINITY, 9, 'j'),
        ];
        assert_eq!(select_k_smallest(4, items)?, vec!['j', 'i', 'p', 'm']);
        Ok(())
    }

    #[test]
    fn test_negative_zero_ties_with_zero() -> Result<(), Error> {
        let items = [(0.0, 2, 'p'), (-0.0, 1, 'n')];
        assert_eq!(select_k_smallest(1, items)?, vec!['n']);
        let items = [(-0.0, 2, 'n'), (0.0, 1, 'p')];
        assert_eq!(select_k_smallest(1, items)?, vec!['p']);
        Ok(())
    }

    #[test]
    fn test_matches_full_sort() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for n in [1, 2, 7, 50, 300] {
            let items = random_items(&mut rng, n);
            for k in [1, 2, 5, 49, 1_000] {
                let expected = sort_and_truncate(items.clone(), k);
                let actual = select_k_smallest(k, items.iter().copied())?;
                assert_eq!(actual.len(), k.min(n));
                assert_eq!(actual, expected, "n = {}, k = {}", n, k);
            }
        }
        Ok(())
    }

    #[test]
    fn test_merge() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(42);
        let items = random_items(&mut rng, 200);
        let expected = sort_and_truncate(items.clone(), 10);

        let merged = items
            .chunks(17)
            .map(|chunk| {
                let mut top = TopK::new(10)?;
                top.extend(chunk.iter().copied());
                Ok(top)
            })
            .collect::<Result<Vec<_>, Error>>()?
            .into_iter()
            .reduce(TopK::merge)
            .map(TopK::into_sorted_vec);

        assert_eq!(merged, Some(expected));
        Ok(())
    }

    #[test]
    fn test_lazy_input() -> Result<(), Error> {
        // An unbounded iterator truncated by take() is never materialized.
        let selected = select_k_smallest(
            3,
            (0_u64..)
                .map(|n| ((n as f64 - 500.0).abs(), n, n))
                .take(100_000),
        )?;
        assert_eq!(selected, vec![500, 499, 501]);
        Ok(())
    }
}
