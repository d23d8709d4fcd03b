use log::trace;

use crate::Element;
use crate::table::Table;

/// Reconstruct the lexicographically-first minimum-cardinality subset.
///
/// Returns the original indices in ascending order, an empty vector for a zero
/// target, or `None` when the table's root cell is infeasible. `elements` must
/// be the sequence the table was built from.
///
/// Row `i` of the table covers `elements[i..]`, so following the `selected`
/// markers from row 0 downwards takes the smallest index that still admits a
/// minimum-size completion at every step.
pub fn extract(table: &Table, elements: &[Element]) -> Option<Vec<usize>> {
    debug_assert_eq!(table.rows(), elements.len());
    let root = table.root();
    let size = root.min_cardinality()?;

    let mut remaining = table.target();
    let mut subset = Vec::with_capacity(size);
    for (i, element) in elements.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if table.cell(i, remaining).selected() {
            trace!("taking element {} ({}) at remaining sum {}", i, element.weight, remaining);
            subset.push(i);
            remaining -= element.weight;
        }
    }

    debug_assert_eq!(remaining, 0);
    debug_assert_eq!(subset.len(), size);
    Some(subset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Element> {
        vec![
            Element::new(12, "alice"),
            Element::new(9, "bob"),
            Element::new(22, "cathy"),
            Element::new(12, "doug"),
        ]
    }

    fn run(elements: &[Element], target: usize) -> Option<Vec<usize>> {
        extract(&Table::build(elements, target), elements)
    }

    #[test]
    fn test_prefers_earliest_index() {
        assert_eq!(run(&people(), 12), Some(vec![0]));
        assert_eq!(run(&people(), 21), Some(vec![0, 1]));
        assert_eq!(run(&people(), 34), Some(vec![0, 2]));
        assert_eq!(run(&people(), 55), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_zero_target_is_empty() {
        assert_eq!(run(&people(), 0), Some(vec![]));
        assert_eq!(run(&[], 0), Some(vec![]));
    }

    #[test]
    fn test_infeasible_is_none() {
        assert_eq!(run(&people(), 100), None);
        assert_eq!(run(&people(), 1), None);
        assert_eq!(run(&[], 3), None);
    }

    #[test]
    fn test_smaller_subset_beats_earlier_index() {
        // {0, 1, 2} is lexicographically smaller but {3} is the only size-one answer
        let elements: Vec<Element> = [1, 2, 3, 6]
            .iter()
            .map(|&w| Element::new(w, "x"))
            .collect();
        assert_eq!(run(&elements, 6), Some(vec![3]));
    }

    #[test]
    fn test_zero_weights_never_extracted() {
        let elements = vec![Element::new(0, "zero"), Element::new(4, "four"), Element::new(0, "nil")];
        assert_eq!(run(&elements, 4), Some(vec![1]));
    }
}
