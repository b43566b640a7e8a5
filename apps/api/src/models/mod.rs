pub mod application;
pub mod job;

pub use application::Candidate;
pub use job::JobPosting;
