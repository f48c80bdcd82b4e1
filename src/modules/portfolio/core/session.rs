use std::fmt;

/// Contents API access token captured at sign-in. The value is never printed through `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct WriteToken(String);

impl WriteToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WriteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriteToken(***)")
    }
}

/// The configured operator the sign-in form is compared against.
#[derive(Clone, PartialEq, Eq)]
pub struct OperatorIdentity {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for OperatorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorIdentity")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Transient admin session. Holding one only means the sign-in form was passed;
/// whether the token may actually write is decided by the contents API on every commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub write_token: WriteToken,
}
