mod by_job;
mod filter;
mod list;
mod service;

pub use filter::FilterApplicationsQuery;
pub use service::ApplicationQueryService;
