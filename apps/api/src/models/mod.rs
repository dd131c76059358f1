pub mod job;
pub mod profile;

pub use job::{CompanySize, JobPosting, ModelError};
pub use profile::{Role, UserProfile, Vibe};
