//! Application pages module
//!
//! - Login page (`/`)
//! - Dashboard, the default success route
//! - Not found

mod dashboard;
mod login;
mod not_found;

pub use dashboard::DashboardPage;
pub use login::LoginActivity;
pub use not_found::NotFoundPage;
