use serde::Deserialize;

/// What the operator typed into the sign-in form.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignIn {
    pub username: String,
    pub password: String,
    #[serde(rename = "token")]
    pub write_token: String,
}

impl std::fmt::Debug for SignIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignIn")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
