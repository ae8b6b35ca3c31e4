use std::collections::BTreeSet;

use log::trace;

pub const DEFAULT_NODE_LIMIT: usize = 10_000;

struct AssignmentSearch<'a> {
    options: &'a [Vec<String>],
    order: Vec<usize>,
    assigned: Vec<Option<&'a str>>,
    used: BTreeSet<&'a str>,
    nodes: usize,
    node_limit: usize,
}

impl<'a> AssignmentSearch<'a> {
    fn search(&mut self, depth: usize) -> bool {
        if depth == self.order.len() {
            return true;
        }
        let slot = self.order[depth];
        let options: &'a [Vec<String>] = self.options;
        for word in options[slot].iter().map(|w| w.as_str()) {
            if self.used.contains(word) {
                continue;
            }
            self.nodes += 1;
            if self.nodes > self.node_limit {
                return false;
            }
            self.used.insert(word);
            self.assigned[slot] = Some(word);
            if self.search(depth + 1) {
                return true;
            }
            self.used.remove(word);
            self.assigned[slot] = None;
        }
        false
    }
}

/// Picks one word per slot so that no word is used twice.
///
/// Slots are filled most constrained first (fewest options), backtracking on
/// dead ends. Option order within a slot is respected, so callers can shuffle
/// options to vary the result. Returns `None` when no assignment exists or the
/// search visits more than `node_limit` nodes.
pub fn find_distinct_assignment(options: &[Vec<String>], node_limit: usize) -> Option<Vec<String>> {
    let mut order: Vec<usize> = (0..options.len()).collect();
    order.sort_by_key(|&slot| options[slot].len());

    let mut search = AssignmentSearch {
        options,
        order,
        assigned: vec![None; options.len()],
        used: BTreeSet::new(),
        nodes: 0,
        node_limit,
    };
    let found = search.search(0);
    trace!(
        target: "assignment",
        "Distinct assignment over {} slots: {} after {} nodes",
        options.len(),
        if found { "found" } else { "none" },
        search.nodes
    );
    if !found {
        return None;
    }
    search
        .assigned
        .into_iter()
        .map(|w| w.map(|w| w.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(slots: &[&[&str]]) -> Vec<Vec<String>> {
        slots
            .iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_needs_backtracking() {
        // greedy in slot order would give A to slot 0 and strand slot 1
        let slots = options(&[&["A", "B"], &["A"], &["B", "C"]]);
        let assignment = find_distinct_assignment(&slots, DEFAULT_NODE_LIMIT).unwrap();
        assert_eq!(assignment, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_impossible() {
        let slots = options(&[&["A"], &["A"], &["B", "C"]]);
        assert_eq!(find_distinct_assignment(&slots, DEFAULT_NODE_LIMIT), None);
    }

    #[test]
    fn test_node_limit() {
        let slots = options(&[&["A", "B"], &["A", "B"], &["A", "B"]]);
        assert_eq!(find_distinct_assignment(&slots, DEFAULT_NODE_LIMIT), None);
        let easy = options(&[&["A"], &["B"]]);
        assert_eq!(find_distinct_assignment(&easy, 1), None);
        assert!(find_distinct_assignment(&easy, 2).is_some());
    }
}
