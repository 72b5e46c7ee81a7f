use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/achievements")]
    Achievements,
    #[at("/history")]
    History,
    #[at("/insights")]
    Insights,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Navigation entries in display order.
    pub const NAV: [Self; 4] = [
        Self::Dashboard,
        Self::Achievements,
        Self::History,
        Self::Insights,
    ];

    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Dashboard | Self::NotFound => "nav.dashboard",
            Self::Achievements => "nav.achievements",
            Self::History => "nav.history",
            Self::Insights => "nav.insights",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_round_trip_through_paths() {
        for route in Route::NAV {
            let path = route.to_path();
            assert_eq!(Route::recognize(&path), Some(route));
        }
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
