pub mod activity;
pub mod applications;
pub mod export;
pub mod jobs;
pub mod stats;
