pub mod admin;
pub mod applications;
pub mod jobs;
