//! Login session and user directory
//!
//! One actor is logged in at a time. Logging in picks the directory user for
//! the requested role; logging out writes the user, with its current
//! balance, back to the directory.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::info;

use crate::error::{MarketError, MarketResult};
use crate::types::{Role, User};

#[derive(Debug, Default)]
pub struct Session {
    directory: Mutex<HashMap<String, User>>,
    current: Mutex<Option<User>>,
}

impl Session {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            directory: Mutex::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
            current: Mutex::new(None),
        }
    }

    /// Log in as the directory user holding `role`
    pub fn login(&self, role: Role) -> MarketResult<User> {
        let mut current = self.current.lock();
        let mut directory = self.directory.lock();

        if let Some(previous) = current.take() {
            directory.insert(previous.id.clone(), previous);
        }

        let mut candidates: Vec<&User> = directory.values().filter(|u| u.role == role).collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        let user = candidates
            .first()
            .map(|u| (*u).clone())
            .ok_or_else(|| MarketError::NotFound {
                kind: "user",
                id: role.to_string(),
            })?;

        info!("{} logged in as {}", user.name, role);
        *current = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&self) -> Option<User> {
        let mut current = self.current.lock();
        let user = current.take()?;
        self.directory.lock().insert(user.id.clone(), user.clone());
        info!("{} logged out", user.name);
        Some(user)
    }

    pub fn current(&self) -> MarketResult<User> {
        self.current.lock().clone().ok_or(MarketError::NotLoggedIn)
    }

    /// Run `f` against the logged-in user, keeping any balance change
    pub fn with_current<R>(&self, f: impl FnOnce(&mut User) -> MarketResult<R>) -> MarketResult<R> {
        let mut current = self.current.lock();
        let user = current.as_mut().ok_or(MarketError::NotLoggedIn)?;
        f(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User {
                id: "u1".to_string(),
                name: "DataCorp Solutions".to_string(),
                role: Role::Requester,
                balance: 2500.0,
            },
            User {
                id: "u2".to_string(),
                name: "ScrapeMaster99".to_string(),
                role: Role::Hunter,
                balance: 145.5,
            },
        ]
    }

    #[test]
    fn test_login_by_role() {
        let session = Session::new(users());
        assert_eq!(session.current().unwrap_err(), MarketError::NotLoggedIn);

        let user = session.login(Role::Hunter).unwrap();
        assert_eq!(user.id, "u2");
        assert_eq!(session.current().unwrap().name, "ScrapeMaster99");
    }

    #[test]
    fn test_balance_survives_logout() {
        let session = Session::new(users());
        session.login(Role::Requester).unwrap();
        session
            .with_current(|u| {
                u.balance -= 100.0;
                Ok(())
            })
            .unwrap();
        session.login(Role::Hunter).unwrap();
        assert!(session.logout().is_some());
        assert!(session.logout().is_none());

        let requester = session.login(Role::Requester).unwrap();
        assert_eq!(requester.balance, 2400.0);
    }

    #[test]
    fn test_unknown_role_user() {
        let session = Session::new(Vec::new());
        assert!(matches!(
            session.login(Role::Hunter),
            Err(MarketError::NotFound { kind: "user", .. })
        ));
    }
}
