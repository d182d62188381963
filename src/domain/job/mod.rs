pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Job, JobUpdate, NewJob};
pub use repository::JobRepository;
pub use specifications::JobOwnedSpec;
pub use value_objects::{JobCategory, JobId};
