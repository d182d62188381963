mod clone;
mod create;
mod delete;
mod feature;
mod service;
mod update;

pub use create::CreateJobCommand;
pub use service::JobCommandService;
pub use update::UpdateJobCommand;
