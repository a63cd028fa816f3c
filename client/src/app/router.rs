//! # Root Router
//!
//! Session state machine deciding between the Login screen and the tabbed shell.
//!
//! ```text
//!            token present
//!  Checking ───────────────► Authenticated
//!     │                         ▲      │
//!     │ no token        login   │      │ logout / missing session /
//!     ▼                 success │      │ repeated 401-403
//!  Unauthenticated ─────────────┘      │
//!     ▲                                │
//!     └────────────────────────────────┘
//! ```
//!
//! Transitions that do not apply to the current state are ignored and logged.

/// Router states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Checking,
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone)]
pub struct Router {
    state: RouteState,
    consecutive_auth_failures: u32,
    auth_failure_threshold: u32,
}

impl Router {
    pub fn new(auth_failure_threshold: u32) -> Self {
        Self {
            state: RouteState::Checking,
            consecutive_auth_failures: 0,
            auth_failure_threshold: auth_failure_threshold.max(1),
        }
    }

    pub fn state(&self) -> RouteState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == RouteState::Authenticated
    }

    /// Result of the startup session read. Only valid while `Checking`.
    pub fn session_checked(&mut self, has_token: bool) -> bool {
        let target = if has_token {
            RouteState::Authenticated
        } else {
            RouteState::Unauthenticated
        };
        self.transition(RouteState::Checking, target, "session_checked")
    }

    pub fn login_succeeded(&mut self) -> bool {
        self.transition(RouteState::Unauthenticated, RouteState::Authenticated, "login_succeeded")
    }

    /// Explicit logout, or a screen reported a missing session
    pub fn logout(&mut self) -> bool {
        self.transition(RouteState::Authenticated, RouteState::Unauthenticated, "logout")
    }

    /// Count one 401/403. Returns true when the threshold forced a logout.
    pub fn record_auth_failure(&mut self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.consecutive_auth_failures += 1;
        tracing::warn!(
            failures = self.consecutive_auth_failures,
            threshold = self.auth_failure_threshold,
            "Authenticated call rejected"
        );
        if self.consecutive_auth_failures >= self.auth_failure_threshold {
            return self.logout();
        }
        false
    }

    /// Any accepted authenticated call clears the failure streak
    pub fn record_success(&mut self) {
        self.consecutive_auth_failures = 0;
    }

    pub fn consecutive_auth_failures(&self) -> u32 {
        self.consecutive_auth_failures
    }

    fn transition(&mut self, from: RouteState, to: RouteState, trigger: &'static str) -> bool {
        if self.state != from {
            tracing::debug!(state = ?self.state, trigger, "Ignoring router transition");
            return false;
        }
        tracing::info!(from = ?from, to = ?to, trigger, "Router transition");
        self.state = to;
        self.consecutive_auth_failures = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_resolves_by_token_presence() {
        let mut router = Router::new(2);
        assert_eq!(router.state(), RouteState::Checking);
        assert!(router.session_checked(true));
        assert_eq!(router.state(), RouteState::Authenticated);

        let mut router = Router::new(2);
        assert!(router.session_checked(false));
        assert_eq!(router.state(), RouteState::Unauthenticated);
    }

    #[test]
    fn test_invalid_transitions_ignored() {
        let mut router = Router::new(2);
        assert!(!router.login_succeeded()); // still checking
        assert!(!router.logout());
        router.session_checked(true);
        assert!(!router.login_succeeded());
        assert!(!router.session_checked(false));
        assert!(router.is_authenticated());
    }

    #[test]
    fn test_login_then_logout() {
        let mut router = Router::new(2);
        router.session_checked(false);
        assert!(router.login_succeeded());
        assert!(router.logout());
        assert_eq!(router.state(), RouteState::Unauthenticated);
    }

    #[test]
    fn test_auth_failure_threshold() {
        let mut router = Router::new(2);
        router.session_checked(true);

        assert!(!router.record_auth_failure());
        router.record_success();
        assert_eq!(router.consecutive_auth_failures(), 0);

        assert!(!router.record_auth_failure());
        assert!(router.record_auth_failure());
        assert_eq!(router.state(), RouteState::Unauthenticated);
        assert_eq!(router.consecutive_auth_failures(), 0);
    }

    #[test]
    fn test_failures_ignored_when_logged_out() {
        let mut router = Router::new(1);
        router.session_checked(false);
        assert!(!router.record_auth_failure());
        assert_eq!(router.consecutive_auth_failures(), 0);
    }
}
