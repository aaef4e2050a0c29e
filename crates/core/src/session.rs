//! The session gate.
//!
//! "Logging in" sets a single boolean flag cookie; there is no credential
//! check, expiry or token validation. The flag stays set until logout clears
//! it.

/// Cookie name holding the session flag.
pub const SESSION_KEY: &str = "def_auth_session";

/// The only value that counts as logged in.
pub const SESSION_VALUE: &str = "true";

/// Lifetime given to the flag cookie so it survives browser restarts
/// (ten years, in seconds).
pub const PERSISTENT_MAX_AGE_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Whether a stored flag value means "logged in".
pub fn is_authenticated(value: Option<&str>) -> bool {
    value == Some(SESSION_VALUE)
}

/// Extract the value of cookie `name` from a raw `Cookie` header.
pub fn cookie_value<'a>(name: &str, cookie_header: &'a str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

/// Build the `Set-Cookie` value that stores the flag.
pub fn set_cookie(secure: bool) -> String {
    format!(
        "{SESSION_KEY}={SESSION_VALUE}; Path=/; HttpOnly; SameSite=Lax; Max-Age={PERSISTENT_MAX_AGE_SECS}{}",
        secure_attr(secure)
    )
}

/// Build the `Set-Cookie` value that removes the flag.
pub fn clear_cookie(secure: bool) -> String {
    format!(
        "{SESSION_KEY}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
        secure_attr(secure)
    )
}

fn secure_attr(secure: bool) -> &'static str {
    if secure {
        "; Secure"
    } else {
        ""
    }
}
