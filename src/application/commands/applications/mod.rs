mod bulk_update;
mod delete;
mod service;
mod update_status;

pub use bulk_update::BulkUpdateStatusCommand;
pub use service::ApplicationCommandService;
pub use update_status::UpdateStatusCommand;
