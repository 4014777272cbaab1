//! Home page listing every registered user.

use std::fmt;

use tracing::warn;

use crate::api::{UserSummary, UsersApi};

/// Load state of the user list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    /// Fetch failed; holds the message to display.
    Failed(String),
    Loaded(Vec<UserSummary>),
}

/// User list page. Fetches once per instance.
#[derive(Debug)]
pub struct UserListPage {
    state: ListState,
    requested: bool,
}

impl UserListPage {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            requested: false,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetch the users on first call. Later calls return the settled state
    /// without touching the network.
    pub async fn load(&mut self, api: &dyn UsersApi) -> &ListState {
        if self.requested {
            return &self.state;
        }
        self.requested = true;
        self.state = match api.list_users().await {
            Ok(users) => ListState::Loaded(users),
            Err(error) => {
                warn!(%error, "listing users failed");
                ListState::Failed(error.to_string())
            }
        };
        &self.state
    }

    /// Card captions for the loaded users.
    pub fn cards(&self) -> Vec<String> {
        match &self.state {
            ListState::Loaded(users) => users
                .iter()
                .map(|user| format!("Email: {}", user.email))
                .collect(),
            ListState::Loading | ListState::Failed(_) => Vec::new(),
        }
    }
}

impl Default for UserListPage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserListPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ListState::Loading => f.write_str("Loading users..."),
            ListState::Failed(message) => write!(f, "Error: {message}"),
            ListState::Loaded(_) => {
                f.write_str("Users")?;
                for card in self.cards() {
                    write!(f, "\n{card}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::{StubUsersApi, user};
    use rstest::rstest;

    #[rstest]
    fn starts_loading() {
        let page = UserListPage::new();
        assert_eq!(page.state(), &ListState::Loading);
        assert_eq!(page.to_string(), "Loading users...");
    }

    #[tokio::test]
    async fn loaded_users_render_as_email_cards() {
        let api = StubUsersApi::new().listing(Ok(vec![user(1, "a@b.com"), user(2, "c@d.org")]));
        let mut page = UserListPage::new();

        page.load(&api).await;

        assert_eq!(page.cards(), vec!["Email: a@b.com", "Email: c@d.org"]);
        assert_eq!(page.to_string(), "Users\nEmail: a@b.com\nEmail: c@d.org");
    }

    #[rstest]
    #[case::status(ApiError::status(503, None), "HTTP error! status: 503")]
    #[case::transport(ApiError::transport("connection refused"), "connection refused")]
    #[tokio::test]
    async fn failures_become_an_error_state(#[case] error: ApiError, #[case] expected: &str) {
        let api = StubUsersApi::new().listing(Err(error));
        let mut page = UserListPage::new();

        let state = page.load(&api).await.clone();

        assert_eq!(state, ListState::Failed(expected.to_owned()));
        assert_eq!(page.to_string(), format!("Error: {expected}"));
        assert!(page.cards().is_empty());
    }

    #[tokio::test]
    async fn fetches_exactly_once() {
        let api = StubUsersApi::new().listing(Ok(vec![user(1, "a@b.com")]));
        let mut page = UserListPage::new();

        page.load(&api).await;
        page.load(&api).await;

        assert_eq!(api.list_calls(), 1);
    }
}
