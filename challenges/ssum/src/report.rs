use crate::{Element, Solution, Writer};

/// Render the textual report for `solution` over `elements`.
pub fn render(out: &mut Writer, elements: &[Element], solution: &Solution) {
    let min_card = solution
        .min_cardinality
        .map_or_else(|| "NONE".to_string(), |k| k.to_string());

    out.println("### REPORT ###");
    out.println(format!("  NUM ELEMS            : {}", elements.len()));
    out.println(format!("  TARGET               : {}", solution.target));
    out.println(format!("  FEASIBLE             : {}", if solution.feasible { "YES" } else { "NO" }));
    out.println(format!("  NUM-FEASIBLE         : {}", solution.subset_count));
    out.println(format!("  MIN-CARD-FEASIBLE    : {}", min_card));
    out.println(format!("  NUM-MIN-CARD-FEASIBLE: {}", solution.min_card_subset_count));

    if solution.subset.is_none() {
        out.println(format!("No subset totals {}.", solution.target));
        return;
    }

    out.println(format!("Lex-First Min-Card Subset Totaling {}:", solution.target));
    out.println(" {");
    for (id, element) in solution.members(elements) {
        out.println(format!("  {}   (  id: {}; val: {})", element.label, id, element.weight));
    }
    out.println(" }");
}
