//! Hash-based routing between the three screens.

use crate::utils::dom;

/// Top-level screens, addressed by URL hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// "Choose a path" screen: `#/` or empty hash
    #[default]
    Landing,
    /// Simulated terminal: `#/terminal`
    Terminal,
    /// Profile page: `#/profile`
    Profile,
}

impl Route {
    /// Parse URL hash into Route. Unknown paths fall back to the landing screen.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');

        match path.to_ascii_lowercase().as_str() {
            "terminal" => Self::Terminal,
            "profile" => Self::Profile,
            _ => Self::Landing,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Landing => "#/",
            Self::Terminal => "#/terminal",
            Self::Profile => "#/profile",
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::current_hash())
    }

    /// Update the browser hash; `hashchange` keeps back/forward in sync.
    pub fn push(self) {
        dom::set_hash(self.to_hash());
    }
}
