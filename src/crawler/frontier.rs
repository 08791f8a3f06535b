//! Crawl frontier and visited set
//!
//! The frontier is a plain FIFO queue of (url, depth) pairs, which is what
//! gives the crawl its breadth-first order. The visited set records exact
//! URL strings; no normalization happens beyond what URL resolution already
//! performed, so membership is pure string equality.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// A URL queued for capture, together with its distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierItem {
    pub url: Url,
    pub depth: u32,
}

/// FIFO queue of pending crawl items
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierItem>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item at the tail of the queue
    pub fn enqueue(&mut self, item: FrontierItem) {
        self.queue.push_back(item);
    }

    /// Removes and returns the head of the queue
    pub fn dequeue(&mut self) -> Option<FrontierItem> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Set of URL strings that have been dequeued for processing
///
/// Monotonically grows for the duration of a run.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    /// Records a URL; returns false if it was already present
    pub fn insert(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
