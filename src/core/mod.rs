pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{Candidate, CandidateOrigin, Neighbor};
