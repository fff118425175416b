//! Account flows: login, signup, password reset, verification and signout.
//!
//! Every flow follows the same order: the rate limiter is checked first, then
//! the required status, then the form values. Only after all of them pass is
//! the limiter engaged and the backend called. Validation and transport
//! failures leave a short message in [`AuthState::error`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result, TransportError, ValidationError};
use crate::limiter::RateLimiter;
use crate::types::{AccountConfig, AppConfig};
use crate::validate;

pub const AUTHENTICATE_PATH: &str = "/authenticate";
pub const FORGOT_PATH: &str = "/forgot";
pub const VERIFY_PATH: &str = "/verify";
pub const DELETE_PATH: &str = "/delete";
pub const RESEND_PATH: &str = "/resend";

/// The account backend. Any 2xx response is success.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn post_json(&self, path: &str, body: &Value) -> std::result::Result<(), TransportError>;

    async fn post(&self, path: &str) -> std::result::Result<(), TransportError>;

    async fn delete(&self, path: &str) -> std::result::Result<(), TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    SignedIn,
    Verifying,
    VerifyingForgot,
    VerifyingUpdate,
}

impl Status {
    pub const ALL: &'static [Status] = &[
        Status::SignedIn,
        Status::Verifying,
        Status::VerifyingForgot,
        Status::VerifyingUpdate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::SignedIn => "signed_in",
            Status::Verifying => "verifying",
            Status::VerifyingForgot => "verifying_forgot",
            Status::VerifyingUpdate => "verifying_update",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "status",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthAction {
    Login,
    Signup,
}

/// Status flags, the latest error message and the shared cool-down.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    statuses: BTreeSet<Status>,
    error: String,
    limiter: RateLimiter,
}

impl AuthState {
    pub fn status(&self, status: Status) -> bool {
        self.statuses.contains(&status)
    }

    pub fn set_status(&mut self, status: Status, value: bool) {
        if value {
            self.statuses.insert(status);
        } else {
            self.statuses.remove(&status);
        }
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    pub fn is_limited(&self) -> bool {
        self.limiter.is_limited()
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

enum Call<'a> {
    Json(&'a str, Value),
    Post(&'a str),
    Delete(&'a str),
}

pub struct Auth<B: Backend> {
    backend: B,
    state: AuthState,
    account: AccountConfig,
    cooldown: Duration,
}

impl<B: Backend> Auth<B> {
    pub fn new(backend: B, config: &AppConfig) -> Self {
        Self {
            backend,
            state: AuthState::default(),
            account: config.account.clone(),
            cooldown: config.limits.auth_cooldown(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AuthState {
        &mut self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.ensure_not_limited()?;
        self.check(validate::email(email, &self.account))?;
        self.check(validate::password(password, &self.account))?;

        let body = credentials(email, password, AuthAction::Login);
        self.send(Call::Json(AUTHENTICATE_PATH, body)).await?;
        self.transition(&[Status::Verifying], &[]);
        Ok(())
    }

    pub async fn signup(&mut self, email: &str, password: &str, confirm: &str) -> Result<()> {
        self.ensure_not_limited()?;
        self.check(validate::email(email, &self.account))?;
        self.check(validate::password(password, &self.account))?;
        self.check(validate::confirmation(password, confirm))?;

        let body = credentials(email, password, AuthAction::Signup);
        self.send(Call::Json(AUTHENTICATE_PATH, body)).await?;
        self.transition(&[Status::Verifying], &[]);
        Ok(())
    }

    /// Starts a password reset for `email`.
    pub async fn forgot(&mut self, email: &str) -> Result<()> {
        self.ensure_not_limited()?;
        self.check(validate::email(email, &self.account))?;

        self.send(Call::Json(FORGOT_PATH, json!({ "token": email })))
            .await?;
        self.transition(&[Status::VerifyingForgot], &[]);
        Ok(())
    }

    pub async fn verify(&mut self, code: &str) -> Result<()> {
        self.ensure_not_limited()?;
        self.require(Status::Verifying)?;
        self.check(validate::code(code, &self.account))?;

        self.send(Call::Json(VERIFY_PATH, json!({ "token": code })))
            .await?;
        self.transition(&[Status::SignedIn], &[Status::Verifying]);
        Ok(())
    }

    /// Confirms the reset code, unlocking `update`.
    pub async fn verify_forget(&mut self, code: &str) -> Result<()> {
        self.ensure_not_limited()?;
        self.require(Status::VerifyingForgot)?;
        self.check(validate::code(code, &self.account))?;

        self.send(Call::Json(VERIFY_PATH, json!({ "token": code })))
            .await?;
        self.transition(&[Status::VerifyingUpdate], &[Status::VerifyingForgot]);
        Ok(())
    }

    pub async fn update(&mut self, new_password: &str) -> Result<()> {
        self.ensure_not_limited()?;
        self.require(Status::VerifyingUpdate)?;
        self.check(validate::password(new_password, &self.account))?;

        self.send(Call::Json(VERIFY_PATH, json!({ "token": new_password })))
            .await?;
        self.transition(&[Status::SignedIn], &[Status::VerifyingUpdate]);
        Ok(())
    }

    pub async fn signout(&mut self) -> Result<()> {
        self.ensure_not_limited()?;
        self.require(Status::SignedIn)?;

        self.send(Call::Delete(DELETE_PATH)).await?;
        self.transition(&[], &[Status::SignedIn]);
        Ok(())
    }

    /// Requests a new code. Only allowed once the resend countdown reached 0.
    pub async fn resend(&mut self, remaining_secs: u64) -> Result<()> {
        if remaining_secs != 0 {
            return Err(Error::Limited);
        }
        self.ensure_not_limited()?;

        self.send(Call::Post(RESEND_PATH)).await
    }

    fn ensure_not_limited(&self) -> Result<()> {
        if self.state.is_limited() {
            return Err(Error::Limited);
        }
        Ok(())
    }

    fn require(&self, status: Status) -> Result<()> {
        if !self.state.status(status) {
            return Err(Error::NotPermitted);
        }
        Ok(())
    }

    fn check(&mut self, outcome: std::result::Result<(), ValidationError>) -> Result<()> {
        outcome.map_err(|err| {
            self.state.set_error(err.to_string());
            Error::Validation(err)
        })
    }

    async fn send(&mut self, call: Call<'_>) -> Result<()> {
        self.state.limiter.engage(self.cooldown);

        let (path, outcome) = match call {
            Call::Json(path, body) => (path, self.backend.post_json(path, &body).await),
            Call::Post(path) => (path, self.backend.post(path).await),
            Call::Delete(path) => (path, self.backend.delete(path).await),
        };

        match outcome {
            Ok(()) => {
                self.state.clear_error();
                Ok(())
            }
            Err(err) => {
                tracing::warn!("{path} failed: {err}");
                self.state
                    .set_error(err.user_message(self.account.error_max_chars));
                Err(Error::Transport(err))
            }
        }
    }

    fn transition(&mut self, set: &[Status], clear: &[Status]) {
        for &status in clear {
            self.state.set_status(status, false);
        }
        for &status in set {
            self.state.set_status(status, true);
        }
        tracing::info!(?set, ?clear, "auth status changed");
    }
}

fn credentials(email: &str, password: &str, action: AuthAction) -> Value {
    json!({
        "email": email,
        "password": password,
        "action": action,
    })
}
