pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{ApplicantInfo, JobApplication, JobApplicationRecord, JobSummary};
pub use repository::{ApplicationSearch, JobApplicationRepository};
pub use specifications::ApplicationOwnedSpec;
pub use value_objects::{ApplicationId, ApplicationStatus};
