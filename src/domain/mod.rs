pub mod activity;
pub mod errors;
pub mod job;
pub mod job_application;
pub mod stats;
pub mod user;
