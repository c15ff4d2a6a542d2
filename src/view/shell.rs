//! Top-level shell — route selection and shared navigation.

use crate::client::CryptoClient;
use crate::view::analytics::AnalyticsPage;
use crate::view::dashboard::Dashboard;
use crate::view::ml_insights::MlInsightsPage;
use crate::view::subscribe::SubscriptionForm;
use crate::view::top_movers::TopMoversPage;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Analytics,
    MlInsights,
    TopMovers,
    Subscribe,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Analytics,
        Route::MlInsights,
        Route::TopMovers,
        Route::Subscribe,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Analytics => "/analytics",
            Route::MlInsights => "/ml",
            Route::TopMovers => "/top-movers",
            Route::Subscribe => "/subscribe",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Analytics => "Analytics",
            Route::MlInsights => "ML Insights",
            Route::TopMovers => "Top Movers",
            Route::Subscribe => "Daily Email Reports",
        }
    }

    /// Unknown paths land on the dashboard. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == trimmed)
            .unwrap_or_default()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub title: &'static str,
    pub active: bool,
}

/// Owns one container per page; only the active one is refreshed.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    route: Route,
    pub dashboard: Dashboard,
    pub analytics: AnalyticsPage,
    pub ml_insights: MlInsightsPage,
    pub top_movers: TopMoversPage,
    pub subscribe: SubscriptionForm,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::from_path(path);
        if route != self.route {
            tracing::debug!(from = %self.route, to = %route, "Navigating");
        }
        self.route = route;
        route
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn nav(&self) -> Vec<NavItem> {
        Route::ALL
            .into_iter()
            .map(|route| NavItem {
                route,
                title: route.title(),
                active: route == self.route,
            })
            .collect()
    }

    /// Run the active page's on-mount fetches, including an open coin manager.
    pub async fn refresh_active(&mut self, client: &CryptoClient) {
        match self.route {
            Route::Dashboard => {
                self.dashboard.refresh(client).await;
                if self.dashboard.coin_manager_open() {
                    self.dashboard.coin_manager_mut().refresh(client).await;
                }
            }
            Route::Analytics => {
                self.analytics.mount(client).await;
                if self.analytics.coin_manager_open() {
                    self.analytics.coin_manager_mut().refresh(client).await;
                }
            }
            Route::MlInsights => self.ml_insights.mount(client).await,
            Route::TopMovers => self.top_movers.refresh(client).await,
            // The form fetches nothing until submitted.
            Route::Subscribe => {}
        }
    }
}
