mod distinct_assignment;
mod elimination;

pub use distinct_assignment::{find_distinct_assignment, DEFAULT_NODE_LIMIT};
pub use elimination::{simulate_elimination, EliminationOutcome, LetterReveal};
