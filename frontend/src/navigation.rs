//! Client routes and the navigation port.

use std::fmt;

/// Pages reachable in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// User list.
    Home,
    /// Sign-in placeholder.
    Login,
    /// Registration form.
    Register,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Login, Route::Register];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    /// Resolve a location path. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Receives navigation requests from components.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// In-memory [`Navigator`] that records every visited route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    /// History positioned at `start`.
    pub fn starting_at(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    /// Current location.
    pub fn current(&self) -> Route {
        self.entries.last().copied().unwrap_or(Route::Home)
    }

    /// Every visited route, oldest first.
    pub fn entries(&self) -> &[Route] {
        &self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::starting_at(Route::Home)
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        self.entries.push(route);
    }
}

/// A labelled link in the layout header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Application title, linking home.
pub const TITLE: NavLink = NavLink {
    label: "Signup - User Registration",
    route: Route::Home,
};

/// Header navigation links in display order.
pub const HEADER_LINKS: [NavLink; 2] = [
    NavLink {
        label: "SignIn",
        route: Route::Login,
    },
    NavLink {
        label: "Register",
        route: Route::Register,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Some(Route::Home))]
    #[case("/login", Some(Route::Login))]
    #[case("/register", Some(Route::Register))]
    #[case("/users", None)]
    #[case("", None)]
    fn paths_resolve_to_routes(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[rstest]
    fn history_tracks_the_latest_route() {
        let mut history = History::starting_at(Route::Register);
        history.navigate(Route::Home);

        assert_eq!(history.current(), Route::Home);
        assert_eq!(history.entries(), &[Route::Register, Route::Home]);
    }

    #[rstest]
    fn header_links_point_at_sign_in_and_register() {
        let links: Vec<_> = HEADER_LINKS
            .iter()
            .map(|link| (link.label, link.route.path()))
            .collect();
        assert_eq!(links, vec![("SignIn", "/login"), ("Register", "/register")]);
        assert_eq!(TITLE.route, Route::Home);
    }
}
