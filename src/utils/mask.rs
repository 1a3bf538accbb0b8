use crate::constants::TOKEN_MASK_PREFIX;

/// Shortens a credential for logs and `Debug` output
///
/// Keeps the first few characters so two tokens can still be told apart.
///
/// ```rust
/// use careermate_client::utils::mask::mask_token;
///
/// assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbGci...");
/// assert_eq!(mask_token("A1"), "***");
/// ```
#[must_use]
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= TOKEN_MASK_PREFIX {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(TOKEN_MASK_PREFIX).collect();
    format!("{prefix}...")
}
