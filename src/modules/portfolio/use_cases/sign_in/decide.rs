// Soft sign-in gate.
//
// Literal comparison against the configured operator plus a token shape check. This
// unlocks the editor; it does not prove the token can write. The contents API does that
// on every commit.

use crate::modules::portfolio::core::session::{OperatorIdentity, Session, WriteToken};
use crate::modules::portfolio::use_cases::sign_in::command::SignIn;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static TOKEN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(gh[pousr]_[A-Za-z0-9]+|github_pat_[A-Za-z0-9_]+)$")
        .expect("token pattern is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid GitHub Token format (starts with ghp_...)")]
    InvalidTokenFormat,
}

pub fn is_write_token_format(token: &str) -> bool {
    TOKEN_FORMAT.is_match(token)
}

pub fn authenticate(identity: &OperatorIdentity, command: SignIn) -> Result<Session, AuthError> {
    if command.username != identity.username || command.password != identity.password {
        return Err(AuthError::InvalidCredentials);
    }
    if !is_write_token_format(&command.write_token) {
        return Err(AuthError::InvalidTokenFormat);
    }
    Ok(Session {
        username: command.username,
        write_token: WriteToken::new(command.write_token),
    })
}
