/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses `env_var`, falling back to `default`
///
/// Unset and blank variables give the default silently; a value that fails to parse is
/// logged and also gives the default.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Display,
{
    get_env_or_none(env_var).unwrap_or(default)
}

/// Reads and parses `env_var`; `None` when unset, blank or unparseable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Display,
{
    let raw = env::var(env_var).ok()?;
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", env_var, raw, e);
            None
        }
    }
}
