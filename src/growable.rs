//! Contiguous sequence with an explicit doubling growth policy, used to
//! snapshot map entries for sorting.

use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

pub const INITIAL_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowableSeq<T> {
    data: Vec<T>,
    cap: usize,
}

impl<T> GrowableSeq<T> {
    pub fn new() -> Self {
        GrowableSeq {
            data: Vec::new(),
            cap: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        GrowableSeq {
            data: Vec::with_capacity(cap),
            cap,
        }
    }

    fn grow_to(&mut self, new_cap: usize) {
        self.data.reserve_exact(new_cap - self.data.len());
        self.cap = new_cap;
    }

    /// Ensures room for at least `n` elements in total.
    pub fn reserve(&mut self, n: usize) {
        if n > self.cap {
            self.grow_to(n);
        }
    }

    pub fn push(&mut self, value: T) {
        if self.data.len() == self.cap {
            let new_cap = if self.cap == 0 {
                INITIAL_CAPACITY
            } else {
                self.cap * 2
            };
            self.grow_to(new_cap);
        }
        self.data.push(value);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.data.sort_by(compare);
    }

    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for GrowableSeq<T> {
    fn default() -> Self {
        GrowableSeq::new()
    }
}

impl<T> Index<usize> for GrowableSeq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for GrowableSeq<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> IntoIterator for GrowableSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
