mod dashboard;
mod session;

pub use dashboard::DashboardPage;
pub use session::{BrowserConfig, BrowserKind, new_session};
