mod advanced;
mod dashboard;
mod service;

pub use service::StatsQueryService;
