//! Ranked worklist of frontier candidates.
//!
//! Candidates are ordered by heuristic score alone. Among equal scores the
//! earlier insertion comes out first.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::error::PuzzleError;
use crate::puzzle::Configuration;

/// Configurations leading up to a candidate, oldest first.
///
/// Extending a trail shares the existing links, so sibling candidates do not
/// copy their common prefix.
#[derive(Debug, Clone, Default)]
pub struct Trail(Option<Rc<Link>>);

#[derive(Debug)]
struct Link {
    configuration: Configuration,
    depth: usize,
    prev: Trail,
}

impl Trail {
    pub fn empty() -> Self {
        Self(None)
    }

    /// A new trail with `c` appended.
    pub fn extended(&self, c: Configuration) -> Self {
        Self(Some(Rc::new(Link {
            configuration: c,
            depth: self.len() + 1,
            prev: self.clone(),
        })))
    }

    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |link| link.depth)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn to_vec(&self) -> Vec<Configuration> {
        let mut out = Vec::with_capacity(self.len());
        let mut cursor = self.0.as_deref();
        while let Some(link) = cursor {
            out.push(link.configuration);
            cursor = link.prev.0.as_deref();
        }
        out.reverse();
        out
    }
}

/// A generated configuration waiting to be expanded.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub score: u32,
    pub configuration: Configuration,
    /// Path from the search start up to, not including, `configuration`.
    pub trail: Trail,
}

impl Candidate {
    pub fn new(score: u32, configuration: Configuration, trail: Trail) -> Self {
        Self {
            score,
            configuration,
            trail,
        }
    }
}

/// Stable merge sort: equal keys keep their relative order.
pub fn merge_sort<T, K, F>(mut items: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, key);
    let right = merge_sort(right, key);
    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Left wins ties.
        let next = if key(l) <= key(r) {
            left.next()
        } else {
            right.next()
        };
        result.extend(next);
    }
    result.extend(left);
    result.extend(right);
    result
}

/// How the worklist finds its best candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Binary heap keyed by (score, insertion order).
    #[default]
    Heap,
    /// Merge sort of the whole backing list before every pop.
    MergeSort,
}

#[derive(Debug)]
struct HeapEntry {
    key: Reverse<(u32, u64)>,
    candidate: Candidate,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Backing {
    Heap {
        heap: BinaryHeap<HeapEntry>,
        next_seq: u64,
    },
    Sorted {
        items: Vec<Candidate>,
        dirty: bool,
    },
}

/// The search frontier. Always yields the lowest-score candidate next.
#[derive(Debug)]
pub struct RankedWorklist {
    backing: Backing,
    high_water: usize,
}

impl RankedWorklist {
    pub fn new(strategy: FrontierStrategy) -> Self {
        let backing = match strategy {
            FrontierStrategy::Heap => Backing::Heap {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
            FrontierStrategy::MergeSort => Backing::Sorted {
                items: Vec::new(),
                dirty: false,
            },
        };
        Self {
            backing,
            high_water: 0,
        }
    }

    pub fn strategy(&self) -> FrontierStrategy {
        match self.backing {
            Backing::Heap { .. } => FrontierStrategy::Heap,
            Backing::Sorted { .. } => FrontierStrategy::MergeSort,
        }
    }

    pub fn insert(&mut self, candidate: Candidate) {
        match &mut self.backing {
            Backing::Heap { heap, next_seq } => {
                heap.push(HeapEntry {
                    key: Reverse((candidate.score, *next_seq)),
                    candidate,
                });
                *next_seq += 1;
            }
            Backing::Sorted { items, dirty } => {
                items.push(candidate);
                *dirty = true;
            }
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Removes and returns the lowest-score candidate.
    pub fn pop_best(&mut self) -> Result<Candidate, PuzzleError> {
        match &mut self.backing {
            Backing::Heap { heap, .. } => heap
                .pop()
                .map(|entry| entry.candidate)
                .ok_or(PuzzleError::EmptyFrontier),
            Backing::Sorted { items, dirty } => {
                if items.is_empty() {
                    return Err(PuzzleError::EmptyFrontier);
                }
                // A list with no inserts since the last sort is still sorted.
                if *dirty {
                    *items = merge_sort(std::mem::take(items), |c| c.score);
                    *dirty = false;
                }
                Ok(items.remove(0))
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Heap { heap, .. } => heap.len(),
            Backing::Sorted { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size reached so far.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl Default for RankedWorklist {
    fn default() -> Self {
        Self::new(FrontierStrategy::default())
    }
}
