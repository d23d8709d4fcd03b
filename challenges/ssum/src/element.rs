use log::debug;

use crate::Scanner;

/// A weighted, labeled member of the input collection.
///
/// An element is identified by its 0-based position in the input sequence;
/// that index is what solutions report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub weight: usize,
    pub label: String,
}

impl Element {
    pub fn new(weight: usize, label: impl Into<String>) -> Self {
        Self {
            weight,
            label: label.into(),
        }
    }
}

/// Read `<weight> <label>` pairs until end of input or the first malformed pair.
///
/// A weight token that is not an unsigned integer, or a weight without a label,
/// ends the sequence at the last complete pair. Only I/O failures are errors.
pub fn read_elements(input: &mut Scanner) -> std::io::Result<Vec<Element>> {
    let mut elements = Vec::new();

    while let Some(token) = input.next_token()? {
        let Ok(weight) = token.parse::<usize>() else {
            debug!("stopping at malformed weight {:?} after {} elements", token, elements.len());
            break;
        };
        let Some(label) = input.next_token()? else {
            debug!("stopping at weight {} without a label", weight);
            break;
        };
        elements.push(Element::new(weight, label));
    }

    Ok(elements)
}
