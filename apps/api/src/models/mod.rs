pub mod catalog;
pub mod posting;
pub mod profile;

pub use posting::JobPosting;
pub use profile::{UserProfile, VisaStatus};
