//src/cache.rs
use crate::dates::date_key;
use crate::schedule::CalendarDay;
use chrono::NaiveDate;
use std::collections::{HashMap, VecDeque};

/// A computed 3-day window.
pub type Span = [CalendarDay; 3];

/// Bounded memoization of computed day spans, keyed by (center, selected).
/// Eviction is strict FIFO by insertion order; a cache hit does not refresh
/// an entry's position. All access is single-threaded and synchronous.
#[derive(Debug)]
pub struct SpanCache {
    entries: HashMap<String, Span>,
    order: VecDeque<String>,
    capacity: usize,
}

impl SpanCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            // A zero-capacity cache could never return a stored span.
            capacity: capacity.max(1),
        }
    }

    pub fn cache_key(center: NaiveDate, selected: NaiveDate) -> String {
        format!("{}:{}", date_key(center), date_key(selected))
    }

    /// Returns the stored span for (center, selected), invoking `compute`
    /// only on a miss. The returned reference points into the cache; callers
    /// must treat it as immutable.
    pub fn get_or_compute<F>(&mut self, center: NaiveDate, selected: NaiveDate, compute: F) -> &Span
    where
        F: FnOnce() -> Span,
    {
        let key = Self::cache_key(center, selected);

        if !self.entries.contains_key(&key) {
            if self.entries.len() >= self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
            self.entries.insert(key.clone(), compute());
            self.order.push_back(key.clone());
        }

        &self.entries[&key]
    }

    pub fn contains(&self, center: NaiveDate, selected: NaiveDate) -> bool {
        self.entries.contains_key(&Self::cache_key(center, selected))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Required whenever the backing schedule changes,
    /// since stale spans would otherwise serve outdated workout associations.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
