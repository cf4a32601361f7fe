//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;
use std::hash::Hash;

/// Null link in the slot list.
const NIL: usize = usize::MAX;

/// A slot in the arena-backed doubly-linked list.
#[derive(Debug)]
struct Node<K> {
    /// None while the slot sits on the free list
    key: Option<K>,
    prev: usize,
    next: usize,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in an arena-backed doubly-linked list where:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// A key → slot index makes touch, remove and eviction O(1). Freed slots are
/// recycled, so the arena never grows past the peak number of tracked keys.
#[derive(Debug)]
pub struct LruTracker<K> {
    index: HashMap<K, usize>,
    nodes: Vec<Node<K>>,
    head: usize,
    tail: usize,
    free: Vec<usize>,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to head).
    ///
    /// If key exists, unlinks it first then relinks at the head.
    /// If key is new, just adds it at the head.
    pub fn touch(&mut self, key: &K) {
        let slot = match self.index.get(key) {
            Some(&slot) => {
                self.unlink(slot);
                slot
            }
            None => {
                let slot = self.alloc(key.clone());
                self.index.insert(key.clone(), slot);
                slot
            }
        };
        self.push_front(slot);
    }

    // == Remove ==
    /// Removes a key from the tracker. Returns whether it was tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(slot) => {
                self.unlink(slot);
                self.release(slot);
                true
            }
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        if self.tail == NIL {
            return None;
        }
        let slot = self.tail;
        self.unlink(slot);
        let key = self.nodes[slot].key.take()?;
        self.free.push(slot);
        self.index.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.nodes.get(self.tail).and_then(|node| node.key.as_ref())
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Clear ==
    /// Forgets every key.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Iterate ==
    /// Walks keys from least to most recently used.
    pub fn iter_oldest_first(&self) -> OldestFirst<'_, K> {
        OldestFirst {
            nodes: &self.nodes,
            cursor: self.tail,
        }
    }

    // == Slot Management ==
    fn alloc(&mut self, key: K) -> usize {
        let node = Node {
            key: Some(key),
            prev: NIL,
            next: NIL,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) {
        self.nodes[slot].key = None;
        self.free.push(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }

    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.head;

        if self.head == NIL {
            self.tail = slot;
        } else {
            self.nodes[self.head].prev = slot;
        }
        self.head = slot;
    }
}

// == Oldest-First Iterator ==
/// Iterator over tracked keys, least recently used first.
#[derive(Debug)]
pub struct OldestFirst<'a, K> {
    nodes: &'a [Node<K>],
    cursor: usize,
}

impl<'a, K> Iterator for OldestFirst<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor)?;
        self.cursor = node.prev;
        node.key.as_ref()
    }
}
