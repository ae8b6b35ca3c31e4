use crate::model::{Band, CandidateKind, ConstraintCandidate, Difficulty};

#[derive(Debug, Clone, Copy)]
pub struct WeightedKind {
    pub kind: CandidateKind,
    pub weight: usize,
    /// Most candidates of this kind allowed on one board.
    pub cap: usize,
}

/// Which candidate kinds a difficulty may use, how often, and which
/// ambiguity bands it leans towards.
#[derive(Debug, Clone)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    pub kinds: Vec<WeightedKind>,
    pub high_band_weight: usize,
    pub medium_band_weight: usize,
    pub low_band_weight: usize,
}

const fn weighted(kind: CandidateKind, weight: usize, cap: usize) -> WeightedKind {
    WeightedKind { kind, weight, cap }
}

impl DifficultyProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                kinds: vec![
                    weighted(CandidateKind::Length, 4, 3),
                    weighted(CandidateKind::Start, 5, 4),
                    weighted(CandidateKind::End, 4, 4),
                ],
                high_band_weight: 6,
                medium_band_weight: 3,
                low_band_weight: 1,
            },
            Difficulty::Medium => Self {
                difficulty,
                kinds: vec![
                    weighted(CandidateKind::Length, 3, 2),
                    weighted(CandidateKind::Start, 3, 3),
                    weighted(CandidateKind::End, 3, 3),
                    weighted(CandidateKind::Pos, 3, 2),
                    weighted(CandidateKind::LengthStart, 2, 2),
                    weighted(CandidateKind::LengthEnd, 2, 2),
                    weighted(CandidateKind::PosStart, 2, 2),
                ],
                high_band_weight: 3,
                medium_band_weight: 4,
                low_band_weight: 2,
            },
            Difficulty::Hard => Self {
                difficulty,
                kinds: vec![
                    weighted(CandidateKind::Length, 1, 1),
                    weighted(CandidateKind::Start, 1, 2),
                    weighted(CandidateKind::End, 1, 2),
                    weighted(CandidateKind::Pos, 1, 1),
                    weighted(CandidateKind::StartEnd, 4, 3),
                    weighted(CandidateKind::LengthStart, 3, 2),
                    weighted(CandidateKind::LengthEnd, 3, 2),
                    weighted(CandidateKind::PosStart, 3, 2),
                    weighted(CandidateKind::PosEnd, 3, 2),
                    weighted(CandidateKind::PosLength, 3, 2),
                ],
                high_band_weight: 1,
                medium_band_weight: 3,
                low_band_weight: 6,
            },
        }
    }

    pub fn kind(&self, kind: CandidateKind) -> Option<&WeightedKind> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    pub fn is_eligible(&self, candidate: &ConstraintCandidate) -> bool {
        self.kind(candidate.kind).is_some()
    }

    pub fn cap(&self, kind: CandidateKind) -> usize {
        self.kind(kind).map_or(0, |k| k.cap)
    }

    pub fn band_weight(&self, band: Band) -> usize {
        match band {
            Band::High => self.high_band_weight,
            Band::Medium => self.medium_band_weight,
            Band::Low => self.low_band_weight,
        }
    }

    /// Sampling weight before the novelty bonus; zero for ineligible kinds.
    pub fn weight(&self, candidate: &ConstraintCandidate) -> usize {
        self.kind(candidate.kind)
            .map_or(0, |k| k.weight * self.band_weight(candidate.band))
    }
}
