//! The admin gate: one shared secret, one boolean grant.
//!
//! The password comes from configuration and is hashed once at startup;
//! a successful check stores the grant in the cookie session for the
//! rest of the page session. There is deliberately no lockout, rate
//! limit, or server-side session record: this gate is a placeholder for
//! a real credential mechanism and the rest of the code treats it as
//! such.

use actix_session::Session;

use super::password;

const GRANT_KEY: &str = "admin_granted";

/// The startup-hashed admin credential, shared with handlers as app
/// data.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    hash: String,
}

impl AdminCredential {
    pub fn new(password: &str) -> Result<Self, String> {
        Ok(Self { hash: password::hash_password(password)? })
    }

    /// Compare a submitted password against the configured secret.
    pub fn verify(&self, submitted: &str) -> Result<bool, String> {
        password::verify_password(submitted, &self.hash)
    }
}

pub fn grant(session: &Session) {
    let _ = session.insert(GRANT_KEY, true);
}

pub fn revoke(session: &Session) {
    session.remove(GRANT_KEY);
}

pub fn is_admin(session: &Session) -> bool {
    session.get::<bool>(GRANT_KEY).unwrap_or(None).unwrap_or(false)
}
