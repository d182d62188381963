pub mod entity;
pub mod repository;

pub use entity::{ActivityAction, ActivityLogEntry, NewActivityLogEntry, TargetType};
pub use repository::ActivityLogRepository;
