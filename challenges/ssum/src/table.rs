// Subset-sum DP table.
//
//   elements = [12 alice, 9 bob, 22 cathy, 12 doug], target = 21
//
//   Rows are filled from the last element to the first, so row i summarizes
//   the elements i..n and row 0 summarizes all of them. Each row is computed
//   from the row below it; the row below the last element is the empty set.
//
//   row 3 {doug}                 : 21 infeasible
//   row 2 {cathy, doug}          : 21 infeasible
//   row 1 {bob, cathy, doug}     : 21 = 9 + 12           → {1, 3}
//   row 0 ...                    : 21 = 12 + 9  (include alice, 9 from row 1)
//                                  21 = 9 + 12  (exclude alice)
//                                  both have size 2, inclusion wins → {0, 1}
use log::debug;

use crate::Element;

/// DP state for one (row, partial sum) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    subset_count: u64,
    min_cardinality: Option<usize>,
    min_card_subset_count: u64,
    selected: bool,
}

impl Cell {
    /// No subset reaches this sum.
    pub const INFEASIBLE: Cell = Cell {
        subset_count: 0,
        min_cardinality: None,
        min_card_subset_count: 0,
        selected: false,
    };

    /// The sum zero, reached only by the empty subset.
    pub const EMPTY_SUBSET: Cell = Cell {
        subset_count: 1,
        min_cardinality: Some(0),
        min_card_subset_count: 1,
        selected: false,
    };

    pub fn feasible(&self) -> bool {
        self.min_cardinality.is_some()
    }

    /// Number of distinct subsets reaching this sum, saturating at `u64::MAX`.
    pub fn subset_count(&self) -> u64 {
        self.subset_count
    }

    pub fn min_cardinality(&self) -> Option<usize> {
        self.min_cardinality
    }

    /// Number of subsets of size `min_cardinality`, saturating at `u64::MAX`.
    pub fn min_card_subset_count(&self) -> u64 {
        self.min_card_subset_count
    }

    /// Whether the canonical minimum-cardinality solution takes this row's element.
    pub fn selected(&self) -> bool {
        self.selected
    }

    // Combine the exclude branch (same sum, row below) with the include branch
    // (sum minus this row's weight, row below). `include` is `None` when the
    // element does not fit.
    fn combine(exclude: Cell, include: Option<Cell>) -> Cell {
        let include = include.filter(Cell::feasible);
        let exclude_card = exclude.min_cardinality;
        let include_card = include.and_then(|c| c.min_cardinality).map(|k| k + 1);

        let min_cardinality = match (exclude_card, include_card) {
            (Some(e), Some(i)) => Some(e.min(i)),
            (e, i) => e.or(i),
        };
        let Some(min) = min_cardinality else {
            return Cell::INFEASIBLE;
        };

        let mut subset_count = exclude.subset_count;
        let mut min_card_subset_count = 0u64;
        if exclude_card == Some(min) {
            min_card_subset_count = exclude.min_card_subset_count;
        }
        if let Some(inc) = include {
            subset_count = subset_count.saturating_add(inc.subset_count);
            if include_card == Some(min) {
                min_card_subset_count = min_card_subset_count.saturating_add(inc.min_card_subset_count);
            }
        }

        // An unavailable exclude branch is infinitely costly.
        let selected = match (include_card, exclude_card) {
            (Some(i), Some(e)) => i <= e,
            (Some(_), None) => true,
            (None, _) => false,
        };

        Cell {
            subset_count,
            min_cardinality,
            min_card_subset_count,
            selected,
        }
    }
}

/// Completed DP table for one element sequence and one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    target: usize,
    // (rows + 1) x (target + 1), row major. The extra last row is the empty set.
    cells: Vec<Cell>,
}

/// Number of cells a table for `elements` x `target` occupies, or `None` on overflow.
pub fn cell_count(elements: usize, target: usize) -> Option<usize> {
    elements.checked_add(1)?.checked_mul(target.checked_add(1)?)
}

impl Table {
    /// Build the table for `elements` and `target`.
    ///
    /// Row `i` summarizes `elements[i..]`. Memory is `O(n * target)` cells.
    pub fn build(elements: &[Element], target: usize) -> Table {
        let rows = elements.len();
        let width = target + 1;
        debug!("building subset-sum table: {} rows x {} columns", rows, width);

        let mut cells = vec![Cell::INFEASIBLE; (rows + 1) * width];
        cells[rows * width] = Cell::EMPTY_SUBSET;

        for (i, element) in elements.iter().enumerate().rev() {
            let (head, tail) = cells.split_at_mut((i + 1) * width);
            let current = &mut head[i * width..];
            let below = &tail[..width];

            current[0] = Cell::EMPTY_SUBSET;
            for x in 1..width {
                // x >= 1, so a zero weight reads below[x] and never column 0.
                let include = (x >= element.weight).then(|| below[x - element.weight]);
                current[x] = Cell::combine(below[x], include);
            }
        }

        Table { rows, target, cells }
    }

    /// Number of element rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Cell for the elements `row..` and partial sum `sum`.
    ///
    /// `row == rows()` addresses the empty element set.
    ///
    /// # Panics
    ///
    /// Panics if `row > rows()` or `sum > target()`.
    pub fn cell(&self, row: usize, sum: usize) -> &Cell {
        assert!(row <= self.rows, "row {} out of range", row);
        assert!(sum <= self.target, "sum {} exceeds target {}", sum, self.target);
        &self.cells[row * (self.target + 1) + sum]
    }

    /// Cell covering every element at the full target.
    pub fn root(&self) -> &Cell {
        self.cell(0, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(weights: &[usize]) -> Vec<Element> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Element::new(w, format!("e{}", i)))
            .collect()
    }

    #[test]
    fn test_column_zero_is_empty_subset() {
        let table = Table::build(&elements(&[3, 0, 5, 3]), 8);
        for row in 0..=table.rows() {
            assert_eq!(*table.cell(row, 0), Cell::EMPTY_SUBSET);
        }
    }

    #[test]
    fn test_empty_elements() {
        let table = Table::build(&[], 4);
        assert_eq!(table.rows(), 0);
        assert!(!table.root().feasible());
        assert!(Table::build(&[], 0).root().feasible());
    }

    #[test]
    fn test_single_element_row() {
        let table = Table::build(&elements(&[4]), 6);
        let row: Vec<bool> = (0..=6).map(|x| table.cell(0, x).feasible()).collect();
        assert_eq!(row, [true, false, false, false, true, false, false]);
        let cell = table.cell(0, 4);
        assert_eq!(cell.min_cardinality(), Some(1));
        assert_eq!(cell.subset_count(), 1);
        assert!(cell.selected());
    }

    #[test]
    fn test_example_counts() {
        // 12 = {12} twice; 24 = {12, 12}; 21 = {12, 9} twice
        let table = Table::build(&elements(&[12, 9, 22, 12]), 24);

        let c12 = table.cell(0, 12);
        assert_eq!(c12.subset_count(), 2);
        assert_eq!(c12.min_cardinality(), Some(1));
        assert_eq!(c12.min_card_subset_count(), 2);

        let c21 = table.cell(0, 21);
        assert_eq!(c21.subset_count(), 2);
        assert_eq!(c21.min_cardinality(), Some(2));
        assert!(c21.selected());

        assert_eq!(table.cell(0, 24).min_cardinality(), Some(2));
        assert!(!table.cell(0, 23).feasible());
    }

    #[test]
    fn test_min_cardinality_counts_only_smallest() {
        // 6 = {6}, {1, 5}, {2, 4}, {1, 2, 3}
        let table = Table::build(&elements(&[1, 2, 3, 4, 5, 6]), 6);
        let root = table.root();
        assert_eq!(root.subset_count(), 4);
        assert_eq!(root.min_cardinality(), Some(1));
        assert_eq!(root.min_card_subset_count(), 1);
        // the lone size-one solution is the last element, so row 0 excludes
        assert!(!root.selected());
    }

    #[test]
    fn test_zero_weights_double_counts() {
        // 5 = {1}, {0, 1}, {1, 2}, {0, 1, 2}
        let table = Table::build(&elements(&[0, 5, 0]), 5);
        let root = table.root();
        assert_eq!(root.subset_count(), 4);
        assert_eq!(root.min_cardinality(), Some(1));
        assert_eq!(root.min_card_subset_count(), 1);
        assert!(!root.selected());
        assert!(table.cell(1, 5).selected());
        assert_eq!(*table.cell(0, 0), Cell::EMPTY_SUBSET);
    }

    #[test]
    fn test_counts_saturate() {
        // 70 unit weights reaching 35 is C(70, 35) > u64::MAX
        let table = Table::build(&elements(&[1; 70]), 35);
        assert_eq!(table.root().subset_count(), u64::MAX);
        assert_eq!(table.root().min_cardinality(), Some(35));
    }

    #[test]
    fn test_build_is_deterministic() {
        let elems = elements(&[7, 3, 3, 1, 9, 4]);
        assert_eq!(Table::build(&elems, 13), Table::build(&elems, 13));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(4, 12), Some(65));
        assert_eq!(cell_count(0, 0), Some(1));
        assert_eq!(cell_count(usize::MAX, 1), None);
    }
}
