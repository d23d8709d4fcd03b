use cached::{Cached, SizedCache};
use log::{debug, trace};

use crate::element::{self, Element};
use crate::extract::extract;
use crate::table::Table;
use crate::Scanner;

// Distinct targets remembered per element sequence.
const CACHE_CAPACITY: usize = 16;

/// Answer to one subset-sum query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: usize,
    pub feasible: bool,
    /// Distinct subsets summing to `target`, saturating at `u64::MAX`.
    pub subset_count: u64,
    /// `None` when infeasible.
    pub min_cardinality: Option<usize>,
    /// Subsets of size `min_cardinality`, saturating at `u64::MAX`.
    pub min_card_subset_count: u64,
    /// Ascending indices of the lexicographically-first minimum-cardinality subset.
    pub subset: Option<Vec<usize>>,
}

impl Solution {
    /// Pair each index of the distinguished subset with its element.
    pub fn members<'a>(&'a self, elements: &'a [Element]) -> impl Iterator<Item = (usize, &'a Element)> + 'a {
        self.subset
            .iter()
            .flatten()
            .map(move |&i| (i, &elements[i]))
    }
}

/// Build the table for `target` and summarize it.
pub fn solve(elements: &[Element], target: usize) -> Solution {
    let table = Table::build(elements, target);
    let root = *table.root();
    let subset = extract(&table, elements);

    debug!(
        "target {}: feasible={} count={} min_card={:?} min_card_count={}",
        target,
        root.feasible(),
        root.subset_count(),
        root.min_cardinality(),
        root.min_card_subset_count()
    );

    Solution {
        target,
        feasible: root.feasible(),
        subset_count: root.subset_count(),
        min_cardinality: root.min_cardinality(),
        min_card_subset_count: root.min_card_subset_count(),
        subset,
    }
}

/// An element sequence with a cache of solved targets.
///
/// The cache is dropped whenever the sequence changes.
pub struct Instance {
    elements: Vec<Element>,
    solved: SizedCache<usize, Solution>,
}

impl Instance {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            solved: SizedCache::with_size(CACHE_CAPACITY),
        }
    }

    /// Read the element sequence from `input`; see [`element::read_elements`].
    pub fn read_from(input: &mut Scanner) -> std::io::Result<Self> {
        let elements = element::read_elements(input)?;
        debug!("read {} elements", elements.len());
        Ok(Self::new(elements))
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
        self.solved.cache_clear();
    }

    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        self.solved.cache_clear();
    }

    /// Solve for `target`, reusing the answer of an earlier identical query.
    pub fn solve(&mut self, target: usize) -> Solution {
        if let Some(hit) = self.solved.cache_get(&target) {
            trace!("cache hit for target {}", target);
            return hit.clone();
        }
        let solution = solve(&self.elements, target);
        self.solved.cache_set(target, solution.clone());
        solution
    }

    /// Solve for `target` without consulting or filling the cache.
    pub fn solve_uncached(&self, target: usize) -> Solution {
        solve(&self.elements, target)
    }
}
