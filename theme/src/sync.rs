//! Storage ports plus the bootstrap and toggle actions that keep them consistent.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three places hold the preference on the client: the `theme` cookie (also
//! seen by the server), the client-local store, and the dark class on the
//! document root. [`ThemeStores::bootstrap`] runs once per page load before
//! any handler is attached; [`ThemeStores::toggle`] runs on user clicks.
//!
//! TRADE-OFFS
//! ==========
//! The three toggle writes have no shared transaction. Each is attempted
//! independently, failures are logged and reported, and nothing is rolled
//! back.

use crate::ThemePreference;

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Failure writing one of the preference stores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store does not exist in this environment (no window, no document,
    /// storage disabled, server-side render).
    #[error("{0} is unavailable")]
    Unavailable(StoreKind),
    /// The store exists but refused the write.
    #[error("{store} rejected write: {reason}")]
    Rejected { store: StoreKind, reason: String },
}

/// Identifies which store an error or failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Cookie,
    Local,
    Marker,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cookie => "cookie store",
            Self::Local => "local store",
            Self::Marker => "dom theme marker",
        })
    }
}

/// The server-visible `theme` cookie.
pub trait CookieStore {
    /// Current cookie value; `None` when absent or not a valid preference.
    fn theme(&self) -> Option<ThemePreference>;
    fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError>;
}

/// Client-only persistent key/value store (`localStorage` in a browser).
pub trait LocalStore {
    /// Current stored value; `None` when absent or not a valid preference.
    fn theme(&self) -> Option<ThemePreference>;
    fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError>;
}

/// The "dark mode active" marker on the document root.
pub trait DomThemeMarker {
    /// What is currently painted; `None` when there is no document.
    fn theme(&self) -> Option<ThemePreference>;
    fn set_theme(&self, theme: ThemePreference) -> Result<(), StoreError>;
}

/// What the page-load sync should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Leave every store untouched.
    None,
    /// Copy the client-local preference into the (absent) cookie.
    PromoteLocal(ThemePreference),
}

/// Decide the page-load sync from the current cookie and local values.
///
/// The local value is promoted only when the cookie is absent; an existing
/// cookie always wins.
#[must_use]
pub fn bootstrap_sync(cookie: Option<ThemePreference>, local: Option<ThemePreference>) -> BootstrapAction {
    match (cookie, local) {
        (None, Some(local)) => BootstrapAction::PromoteLocal(local),
        _ => BootstrapAction::None,
    }
}

/// One failed write during a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub store: StoreKind,
    pub error: StoreError,
}

/// Result of [`ThemeStores::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The new preference, returned even when some writes failed.
    pub theme: ThemePreference,
    /// Writes that did not succeed, in attempt order.
    pub failures: Vec<WriteFailure>,
}

impl ToggleOutcome {
    /// True when all three stores were written.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The three preference stores, injected together.
#[derive(Debug, Clone, Default)]
pub struct ThemeStores<C, L, D> {
    pub cookie: C,
    pub local: L,
    pub marker: D,
}

impl<C, L, D> ThemeStores<C, L, D>
where
    C: CookieStore,
    L: LocalStore,
    D: DomThemeMarker,
{
    #[must_use]
    pub fn new(cookie: C, local: L, marker: D) -> Self {
        Self { cookie, local, marker }
    }

    /// Page-load sync. Never touches the DOM marker, so the first paint stays
    /// exactly what the server rendered.
    ///
    /// Returns the action taken. A failed cookie write is logged and the
    /// action is still reported; the next page load retries it.
    pub fn bootstrap(&self) -> BootstrapAction {
        let action = bootstrap_sync(self.cookie.theme(), self.local.theme());
        if let BootstrapAction::PromoteLocal(theme) = action {
            match self.cookie.set_theme(theme) {
                Ok(()) => tracing::debug!(%theme, "promoted local theme into cookie"),
                Err(e) => tracing::warn!(error = %e, %theme, "failed to promote local theme into cookie"),
            }
        }
        action
    }

    /// Flip the preference and write it to marker, local store, and cookie.
    pub fn toggle(&self, current: ThemePreference) -> ToggleOutcome {
        let theme = current.toggled();
        let writes = [
            (StoreKind::Marker, self.marker.set_theme(theme)),
            (StoreKind::Local, self.local.set_theme(theme)),
            (StoreKind::Cookie, self.cookie.set_theme(theme)),
        ];

        let failures: Vec<WriteFailure> = writes
            .into_iter()
            .filter_map(|(store, result)| result.err().map(|error| WriteFailure { store, error }))
            .collect();

        for failure in &failures {
            tracing::warn!(store = %failure.store, error = %failure.error, %theme, "theme toggle write failed");
        }
        if failures.is_empty() {
            tracing::debug!(%theme, "theme toggled");
        }

        ToggleOutcome { theme, failures }
    }
}
