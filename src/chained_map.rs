//! Hash map with separate chaining over `BucketList` buckets.
//!
//! The table starts with `INITIAL_BUCKETS` buckets and doubles whenever an
//! insertion of a new key leaves the load factor above `MAX_LOAD`. Growth
//! pops every entry off its old bucket and pushes it onto the front of its
//! new one, so entries sharing a bucket after a rehash appear in reverse of
//! their previous relative order. Enumeration is bucket-major, then list
//! order: deterministic for a given insertion history and hasher, but
//! neither sorted nor insertion ordered.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::AddAssign;

use fnv::FnvBuildHasher;
use log::debug;

use crate::bucket_list::{self, BucketList};

pub const INITIAL_BUCKETS: usize = 8;
pub const MAX_LOAD: f32 = 0.75;

struct Entry<K, V> {
    key: K,
    value: V,
}

pub struct ChainedHashMap<K, V, S = FnvBuildHasher> {
    buckets: Vec<BucketList<Entry<K, V>>>,
    len: usize,
    hash_builder: S,
}

fn empty_buckets<T>(n: usize) -> Vec<BucketList<T>> {
    let mut buckets = Vec::with_capacity(n);
    buckets.resize_with(n, BucketList::new);
    buckets
}

impl<K, V> ChainedHashMap<K, V, FnvBuildHasher> {
    pub fn new() -> Self {
        ChainedHashMap::with_hasher(FnvBuildHasher::default())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        ChainedHashMap {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            hash_builder,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.buckets.len() as f32
    }

    /// Drops every entry and shrinks back to the initial bucket count.
    pub fn clear(&mut self) {
        self.buckets = empty_buckets(INITIAL_BUCKETS);
        self.len = 0;
    }

    /// Visits every pair once, bucket by bucket.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        for entry in self.buckets.iter().flat_map(|bucket| bucket.iter()) {
            visit(&entry.key, &entry.value);
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
        }
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn bucket_index<Q>(&self, key: &Q, bucket_count: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % bucket_count as u64) as usize
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key, self.buckets.len());
        self.buckets[idx]
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key, self.buckets.len());
        self.buckets[idx]
            .find_mut(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Inserts or overwrites, returning the value previously stored.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.insert_new(key, value);
        None
    }

    /// Adds `delta` to the value at `key`, inserting `delta` if absent.
    pub fn increment(&mut self, key: K, delta: V)
    where
        V: AddAssign,
    {
        if let Some(slot) = self.get_mut(&key) {
            *slot += delta;
            return;
        }
        self.insert_new(key, delta);
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key, self.buckets.len());
        let entry = self.buckets[idx].remove_first(|entry| entry.key.borrow() == key)?;
        self.len -= 1;
        Some(entry.value)
    }

    fn insert_new(&mut self, key: K, value: V) {
        let idx = self.bucket_index(&key, self.buckets.len());
        self.buckets[idx].push_front(Entry { key, value });
        self.len += 1;
        if self.load_factor() > MAX_LOAD {
            self.rehash(self.buckets.len() * 2);
        }
    }

    fn rehash(&mut self, new_count: usize) {
        debug!(
            "rehash: {} entries, {} -> {} buckets",
            self.len,
            self.buckets.len(),
            new_count
        );
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_count));
        for mut bucket in old {
            while let Some(entry) = bucket.pop_front() {
                let idx = self.bucket_index(&entry.key, new_count);
                self.buckets[idx].push_front(entry);
            }
        }
    }
}

impl<K, V> Default for ChainedHashMap<K, V, FnvBuildHasher> {
    fn default() -> Self {
        ChainedHashMap::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, BucketList<Entry<K, V>>>,
    current: Option<bucket_list::Iter<'a, Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|chain| chain.next()) {
                return Some((&entry.key, &entry.value));
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
