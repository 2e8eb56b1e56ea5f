//! Owned singly linked list used as the bucket of `ChainedHashMap`.
//!
//! Every node exclusively owns its successor, so dropping the head frees
//! the whole chain. `Drop` walks the chain in a loop instead of relying on
//! the recursive box drop, long chains therefore never blow the stack.

use std::fmt;

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

pub struct BucketList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> BucketList<T> {
    pub fn new() -> Self {
        BucketList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| pred(*value))
    }

    pub fn find_mut<P>(&mut self, mut pred: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if pred(&node.value) {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks and returns the first element matching `pred`.
    pub fn remove_first<P>(&mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut link = &mut self.head;
        loop {
            let hit = match link.as_ref() {
                None => return None,
                Some(node) => pred(&node.value),
            };
            if hit {
                let mut node = link.take()?;
                *link = node.next.take();
                self.len -= 1;
                return Some(node.value);
            }
            link = &mut link.as_mut()?.next;
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Default for BucketList<T> {
    fn default() -> Self {
        BucketList::new()
    }
}

impl<T> Drop for BucketList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for BucketList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a BucketList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_prepends() {
        let mut list = BucketList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn pop_front_drains_in_list_order() {
        let mut list = BucketList::new();
        list.push_front("a");
        list.push_front("b");
        assert_eq!(list.pop_front(), Some("b"));
        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn find_mut_updates_in_place() {
        let mut list = BucketList::new();
        list.push_front((1, 10));
        list.push_front((2, 20));
        if let Some(entry) = list.find_mut(|&(k, _)| k == 1) {
            entry.1 += 5;
        }
        assert_eq!(list.find(|&(k, _)| k == 1), Some(&(1, 15)));
        assert!(list.find(|&(k, _)| k == 3).is_none());
    }

    #[test]
    fn remove_first_unlinks_head_middle_and_tail() {
        let mut list = BucketList::new();
        for i in 0..5 {
            list.push_front(i);
        }
        // list order: 4 3 2 1 0
        assert_eq!(list.remove_first(|&v| v == 4), Some(4));
        assert_eq!(list.remove_first(|&v| v == 2), Some(2));
        assert_eq!(list.remove_first(|&v| v == 0), Some(0));
        assert_eq!(list.remove_first(|&v| v == 9), None);
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let mut list = BucketList::new();
        for i in 0..1_000_000u32 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }
}
