use std::collections::{BTreeMap, BTreeSet};

use crate::model::{CandidateAttributes, CandidateKind, ConstraintCandidate, WordEntry};

/// Attribute tuple `entry` contributes for `kind`, or `None` when the kind
/// needs a part-of-speech tag the entry lacks.
pub fn attributes_for(kind: CandidateKind, entry: &WordEntry) -> Option<CandidateAttributes> {
    let length = Some(entry.length);
    let start = Some(entry.start_char);
    let end = Some(entry.end_char);
    let pos = entry.pos_tag.clone();
    if kind.needs_pos() && pos.is_none() {
        return None;
    }

    let attributes = match kind {
        CandidateKind::Length => CandidateAttributes {
            length,
            ..Default::default()
        },
        CandidateKind::Start => CandidateAttributes {
            start,
            ..Default::default()
        },
        CandidateKind::End => CandidateAttributes {
            end,
            ..Default::default()
        },
        CandidateKind::StartEnd => CandidateAttributes {
            start,
            end,
            ..Default::default()
        },
        CandidateKind::LengthStart => CandidateAttributes {
            length,
            start,
            ..Default::default()
        },
        CandidateKind::LengthEnd => CandidateAttributes {
            length,
            end,
            ..Default::default()
        },
        CandidateKind::Pos => CandidateAttributes {
            pos,
            ..Default::default()
        },
        CandidateKind::PosStart => CandidateAttributes {
            pos,
            start,
            ..Default::default()
        },
        CandidateKind::PosEnd => CandidateAttributes {
            pos,
            end,
            ..Default::default()
        },
        CandidateKind::PosLength => CandidateAttributes {
            pos,
            length,
            ..Default::default()
        },
    };
    Some(attributes)
}

/// Every candidate constraint the pool supports, one per distinct
/// (kind, attribute tuple), ordered by kind then attributes.
pub fn build_candidates(entries: &[WordEntry]) -> Vec<ConstraintCandidate> {
    let mut buckets: BTreeMap<(CandidateKind, CandidateAttributes), BTreeSet<String>> =
        BTreeMap::new();
    for entry in entries {
        for kind in CandidateKind::all() {
            if let Some(attributes) = attributes_for(kind, entry) {
                buckets
                    .entry((kind, attributes))
                    .or_default()
                    .insert(entry.text.clone());
            }
        }
    }
    buckets
        .into_iter()
        .map(|((kind, attributes), words)| {
            ConstraintCandidate::new(kind, attributes, words.into_iter().collect())
        })
        .collect()
}
