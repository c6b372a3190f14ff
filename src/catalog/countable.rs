//! Counts accepted by pluralized lookups

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A number, or a collection counted by its length
pub trait Countable {
    fn as_count(&self) -> i64;
}

macro_rules! impl_countable_lossless {
    ($($t:ty),*) => {
        $(impl Countable for $t {
            fn as_count(&self) -> i64 {
                i64::from(*self)
            }
        })*
    };
}

macro_rules! impl_countable_saturating {
    ($($t:ty),*) => {
        $(impl Countable for $t {
            fn as_count(&self) -> i64 {
                i64::try_from(*self).unwrap_or(i64::MAX)
            }
        })*
    };
}

impl_countable_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_countable_saturating!(u64, usize, isize, u128, i128);

fn saturate(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

impl<T: Countable + ?Sized> Countable for &T {
    fn as_count(&self) -> i64 {
        (**self).as_count()
    }
}

impl<T> Countable for [T] {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn as_count(&self) -> i64 {
        saturate(N)
    }
}

impl<T> Countable for Vec<T> {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}

impl<T> Countable for VecDeque<T> {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}

impl<T, S> Countable for HashSet<T, S> {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}

impl<T> Countable for BTreeSet<T> {
    fn as_count(&self) -> i64 {
        saturate(self.len())
    }
}
