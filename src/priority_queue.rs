use std::cmp::Ordering;

use crate::{error::Error, Result};

/// Array backed binary min-heap, prioritized by an external comparator.
///
/// A key `a` is served before `b` when `comparator(a, b)` is `Less`.
/// Keys of equal priority may be stored; their relative order is not stable,
/// but it is deterministic for a given sequence of operations.
pub struct PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    keys: Vec<T>,
    comparator: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(comparator: C) -> Self {
        Self::with_capacity(0, comparator)
    }

    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        PriorityQueue {
            keys: Vec::with_capacity(capacity),
            comparator,
        }
    }

    pub fn insert(&mut self, key: T) {
        self.keys.push(key);
        self.sift_up(self.keys.len() - 1);
    }

    pub fn peek(&self) -> Result<&T> {
        self.keys.first().ok_or(Error::EmptyQueue)
    }

    pub fn delete(&mut self) -> Result<T> {
        if self.keys.is_empty() {
            return Err(Error::EmptyQueue);
        }
        // the last key takes the place of the root
        let highest = self.keys.swap_remove(0);
        self.sift_down(0);
        Ok(highest)
    }

    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn sift_up(&mut self, index: usize) {
        let mut child = index;
        while child > 0 {
            let parent = parent(child);
            if self.compare(child, parent) != Ordering::Less {
                break;
            }
            self.keys.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut parent = index;
        let mut child = left(parent);
        while child < self.keys.len() {
            // the right sibling only wins when it is strictly smaller
            let right = right(parent);
            if right < self.keys.len() && self.compare(right, child) == Ordering::Less {
                child = right;
            }
            if self.compare(child, parent) != Ordering::Less {
                break;
            }
            self.keys.swap(child, parent);
            parent = child;
            child = left(parent);
        }
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        (self.comparator)(&self.keys[a], &self.keys[b])
    }
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}
