//! View layer — page containers and the panels they render.
//!
//! Containers own their state and are mutated through `&mut self`. Every
//! fetch is split into a synchronous `begin_*` that hands out fencing tickets,
//! the network call, and an `apply_*` that drops stale results. The async
//! drivers (`refresh`, `mount`, ...) simply chain the three.

pub mod analytics;
pub mod dashboard;
pub mod ml_insights;
pub mod panels;
pub mod shell;
pub mod subscribe;
pub mod top_movers;

pub use analytics::AnalyticsPage;
pub use dashboard::{Dashboard, DashboardFetch};
pub use ml_insights::MlInsightsPage;
pub use shell::{NavItem, Route, Shell};
pub use subscribe::SubscriptionForm;
pub use top_movers::TopMoversPage;
