//! Credential loading from flags and the environment.

use anyhow::{bail, Result};
use magpie_fetch::{FetchError, SessionAuth};

use crate::Cli;

/// The bearer token the provider's public web app ships with.
const DEFAULT_BEARER: &str = "AAAAAAAAAAAAAAAAAAAAANRILgAAAAAAnNwIzUejRCOuH5E6I8xnZz4puTs%3D1Zv7ttfk8LF81IUq16cHjhLTvJu4FA33AGWWjCpTnA";

/// Builds session auth from CLI flags, falling back to the environment.
///
/// The cookie must contain `auth_token` and `ct0`; the CSRF token defaults
/// to the cookie's `ct0` value when neither the flag nor `MAGPIE_CSRF`
/// provides it.
pub fn session_auth(cli: &Cli) -> Result<SessionAuth> {
    let cookie = match cli.cookie.clone().or_else(|| env_var("MAGPIE_COOKIE")) {
        Some(cookie) => cookie,
        None => bail!("No cookie given: pass --cookie or set MAGPIE_COOKIE"),
    };

    if !cookie.contains("auth_token=") {
        bail!("Cookie is missing auth_token: copy the full Cookie header from a logged-in session");
    }

    let csrf = match cli
        .csrf
        .clone()
        .or_else(|| env_var("MAGPIE_CSRF"))
        .or_else(|| cookie_value(&cookie, "ct0"))
    {
        Some(csrf) => csrf,
        None => bail!("No CSRF token: pass --csrf, set MAGPIE_CSRF, or include ct0 in the cookie"),
    };

    let bearer = cli
        .bearer
        .clone()
        .or_else(|| env_var("MAGPIE_BEARER"))
        .unwrap_or_else(|| DEFAULT_BEARER.to_string());

    Ok(SessionAuth::new(bearer, cookie, csrf))
}

/// Whether an error chain bottoms out in a credentials problem.
pub fn is_credentials_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<FetchError>(),
            Some(FetchError::Credentials(_))
        )
    })
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn cookie_value(cookie: &str, name: &str) -> Option<String> {
    cookie.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

// ============================================================================
// Tests
// ============================================================================
