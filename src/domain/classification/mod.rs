//! Externally supplied classification state.
//!
//! The disambiguation engine holds no session state of its own. The
//! surrounding pipeline passes these shapes in on every call: the live
//! candidate set from the retrieval subsystem, the answers collected so
//! far, and the extracted product profile.

mod answers;
mod candidate;
mod profile;

pub use answers::AnswerHistory;
pub use candidate::Candidate;
pub use profile::ProductProfile;
