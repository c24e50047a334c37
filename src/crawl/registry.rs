// src/crawl/registry.rs
// =============================================================================
// The one piece of mutable state shared by every crawl task: how many times
// each page was reached.
//
// Callers never get to look at the map and then write to it in a second step.
// `claim` does the ceiling check, the existence check and the write under one
// lock, so two tasks racing on the same URL can't both see it as new.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::normalize::NormalizedKey;

/// Outcome of offering a page to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Key was new; the caller owns fetching and expanding it
    First,
    /// Key was already recorded; its count went up by one
    Revisit,
    /// Ceiling reached; nothing was recorded
    Full,
}

#[derive(Debug)]
pub struct VisitRegistry {
    max_pages: usize,
    pages: Mutex<HashMap<NormalizedKey, usize>>,
}

impl VisitRegistry {
    pub fn new(max_pages: usize) -> Self {
        Self {
            max_pages,
            pages: Mutex::new(HashMap::new()),
        }
    }

    // A panic in some other task must not take the report down with it,
    // the map is still consistent because every write is a single operation
    fn lock(&self) -> MutexGuard<'_, HashMap<NormalizedKey, usize>> {
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a visit to `key`.
    ///
    /// Once the registry holds `max_pages` keys every call returns `Full`,
    /// including calls for keys that are already present.
    pub fn claim(&self, key: NormalizedKey) -> Claim {
        let mut pages = self.lock();

        if pages.len() >= self.max_pages {
            return Claim::Full;
        }

        match pages.get_mut(&key) {
            Some(count) => {
                *count += 1;
                Claim::Revisit
            }
            None => {
                pages.insert(key, 1);
                Claim::First
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.max_pages
    }

    /// Copy of the counts, taken once the crawl is over
    pub fn snapshot(&self) -> HashMap<NormalizedKey, usize> {
        self.lock().clone()
    }
}
