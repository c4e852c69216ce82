//! Auth session ownership and change notifications.
//!
//! The hosted service owns authentication entirely; this module holds the
//! resulting session as a single owned value with an explicit
//! subscribe/unsubscribe lifecycle rather than ambient global state.
//! Subscribers observe `(user, loading)` snapshots through a watch
//! channel; dropping a watcher unsubscribes it.

pub mod gateway;

pub use gateway::{AuthGateway, RestAuthGateway};

use tokio::sync::watch;

use crate::listings::error::ListingError;

/// A signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable user identifier; stamped onto every write.
    pub id: String,
    /// Email address when the service discloses it.
    pub email: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token for authenticated requests.
    pub access_token: String,
    /// The signed-in user.
    pub user: AuthenticatedUser,
}

/// Auth state change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A session was established.
    SignedIn(Session),
    /// The session ended.
    SignedOut,
    /// The session's token was replaced.
    TokenRefreshed(Session),
}

/// Snapshot republished to subscribers on every auth change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// The signed-in user, if any.
    pub user: Option<AuthenticatedUser>,
    /// True until the first event or initial session check resolves.
    pub loading: bool,
}

/// Owns the current session and republishes changes to subscribers.
pub struct SessionHolder {
    publisher: watch::Sender<SessionState>,
    session: Option<Session>,
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHolder {
    /// Creates a holder in the initial signed-out, loading state.
    #[must_use]
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(SessionState {
            user: None,
            loading: true,
        });
        Self {
            publisher,
            session: None,
        }
    }

    /// The current published snapshot.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.publisher.borrow().clone()
    }

    /// The full session, including the access token.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The access token of the current session, if signed in.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.access_token.as_str())
    }

    /// Subscribes to session changes; dropping the watcher unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            receiver: self.publisher.subscribe(),
        }
    }

    /// Applies an auth change notification and republishes the snapshot.
    ///
    /// Any applied event also clears the initial loading flag.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => {
                let user = session.user.clone();
                self.session = Some(session);
                self.publish(Some(user));
            }
            AuthEvent::SignedOut => {
                self.session = None;
                self.publish(None);
            }
        }
    }

    /// Resolves the initial session check, clearing the loading flag.
    pub fn resolve_initial(&mut self, session: Option<Session>) {
        match session {
            Some(session) => self.apply(AuthEvent::SignedIn(session)),
            None => self.publish(None),
        }
    }

    /// Signs in through the gateway and applies the resulting session.
    ///
    /// # Errors
    ///
    /// Propagates the auth service's error unmodified.
    pub async fn sign_in<Gateway>(
        &mut self,
        gateway: &Gateway,
        email: &str,
        password: &str,
    ) -> Result<(), ListingError>
    where
        Gateway: AuthGateway + ?Sized,
    {
        let session = gateway.sign_in(email, password).await?;
        self.apply(AuthEvent::SignedIn(session));
        Ok(())
    }

    /// Registers a new account; applies a session when one is issued
    /// immediately.
    ///
    /// # Errors
    ///
    /// Propagates the auth service's error unmodified.
    pub async fn sign_up<Gateway>(
        &mut self,
        gateway: &Gateway,
        email: &str,
        password: &str,
    ) -> Result<(), ListingError>
    where
        Gateway: AuthGateway + ?Sized,
    {
        match gateway.sign_up(email, password).await? {
            Some(session) => self.apply(AuthEvent::SignedIn(session)),
            None => self.resolve_initial(None),
        }
        Ok(())
    }

    /// Signs out through the gateway and clears the session.
    ///
    /// # Errors
    ///
    /// Propagates the auth service's error unmodified; the local session
    /// is kept when revocation fails.
    pub async fn sign_out<Gateway>(&mut self, gateway: &Gateway) -> Result<(), ListingError>
    where
        Gateway: AuthGateway + ?Sized,
    {
        if let Some(session) = &self.session {
            gateway.sign_out(&session.access_token).await?;
        }
        self.apply(AuthEvent::SignedOut);
        Ok(())
    }

    fn publish(&self, user: Option<AuthenticatedUser>) {
        self.publisher.send_replace(SessionState {
            user,
            loading: false,
        });
    }
}

/// Subscription to session changes.
///
/// Dropping the watcher ends the subscription.
pub struct SessionWatcher {
    receiver: watch::Receiver<SessionState>,
}

impl SessionWatcher {
    /// The latest published snapshot.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.receiver.borrow().clone()
    }

    /// Waits for the next published change.
    ///
    /// Returns false when the holder has been dropped and no further
    /// changes can arrive.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}
