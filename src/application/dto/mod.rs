pub mod activity;
pub mod applications;
pub mod auth;
pub mod jobs;
pub mod stats;

pub use activity::{ActivityLogDto, RequestOrigin};
pub use applications::{ApplicantDto, JobApplicationDto, JobRefDto, JobApplicationsDto, StatusTallyDto};
pub use auth::AuthenticatedUser;
pub use jobs::JobDto;
pub use stats::{AdvancedStatsDto, BasicStatsDto, DashboardStatsDto, RecentStatsDto, StatusBreakdownDto};
