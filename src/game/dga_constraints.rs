use std::collections::BTreeMap;

use itertools::Itertools;

use crate::model::{Constraint, ConstraintKind, VisualSpec, WordEntry};

type BucketKey = (ConstraintKind, char);

#[derive(Debug)]
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        if ra < rb {
            self.parent[rb] = ra;
        } else {
            self.parent[ra] = rb;
        }
    }
}

/// Every letter-reveal constraint available for a word pool, grouped into
/// buckets of words sharing the same (kind, letter) pair.
#[derive(Debug, Clone)]
pub struct ConstraintSpace {
    pub words: Vec<String>,
    /// Candidate constraints per word, indexed like `words`.
    pub options: Vec<Vec<Constraint>>,
    buckets: BTreeMap<BucketKey, Vec<usize>>,
}

impl ConstraintSpace {
    pub fn build(entries: &[WordEntry]) -> Self {
        let mut buckets: BTreeMap<BucketKey, Vec<usize>> = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            for kind in ConstraintKind::all() {
                if let Some(ch) = kind.reveal(entry) {
                    buckets.entry((kind, ch)).or_default().push(index);
                }
            }
        }

        let options = entries
            .iter()
            .map(|entry| {
                ConstraintKind::all()
                    .into_iter()
                    .filter_map(|kind| {
                        let ch = kind.reveal(entry)?;
                        Some(Constraint {
                            kind,
                            revealed_char: ch,
                            visual_spec: VisualSpec::new(kind, ch),
                            target_word: entry.text.clone(),
                            overlap_score: buckets.get(&(kind, ch)).map_or(0, |b| b.len()),
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            words: entries.iter().map(|e| e.text.clone()).collect(),
            options,
            buckets,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Indices of the words sharing `constraint`'s (kind, letter) pair.
    pub fn bucket_members(&self, constraint: &Constraint) -> &[usize] {
        self.buckets
            .get(&(constraint.kind, constraint.revealed_char))
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    /// Sorted words matching `constraint`.
    pub fn matching_words(&self, constraint: &Constraint) -> Vec<String> {
        self.bucket_members(constraint)
            .iter()
            .map(|&i| self.words[i].clone())
            .sorted()
            .collect()
    }

    pub fn unique_options(&self, word: usize) -> Vec<&Constraint> {
        self.options[word].iter().filter(|c| !c.is_ambiguous()).collect()
    }

    pub fn ambiguous_options(&self, word: usize) -> Vec<&Constraint> {
        self.options[word].iter().filter(|c| c.is_ambiguous()).collect()
    }

    /// Connected components of the graph linking words that share any bucket
    /// of two or more words. Every word appears in exactly one component.
    pub fn ambiguity_components(&self) -> Vec<Vec<usize>> {
        let mut uf = UnionFind::new(self.len());
        for members in self.buckets.values().filter(|m| m.len() >= 2) {
            for &other in &members[1..] {
                uf.union(members[0], other);
            }
        }

        let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for word in 0..self.len() {
            components.entry(uf.find(word)).or_default().push(word);
        }
        let mut components: Vec<Vec<usize>> = components.into_values().collect();
        components.sort();
        components
    }

    /// Upper bound on ambiguous clues that still leaves every component one
    /// uniquely identifiable word.
    pub fn feasible_ambiguous_max(&self) -> usize {
        self.ambiguity_components()
            .iter()
            .map(|c| c.len().saturating_sub(1))
            .sum()
    }
}
