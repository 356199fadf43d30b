//! Authentication provider handling
//!
//! The catalog is either open (`no-auth`) or sits behind an SSO provider, in
//! which case every request carries the configured secret as a bearer token.

use std::str::FromStr;

/// Authentication mode configured for the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthProvider {
    #[default]
    NoAuth,
    Google,
    Okta,
    Auth0,
    CustomOidc,
    /// Provider name this client has no special handling for
    Other(String),
}

impl AuthProvider {
    /// Whether requests must carry a bearer token
    pub fn requires_token(&self) -> bool {
        !matches!(self, AuthProvider::NoAuth)
    }
}

impl FromStr for AuthProvider {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "" | "no-auth" => AuthProvider::NoAuth,
            "google" => AuthProvider::Google,
            "okta" => AuthProvider::Okta,
            "auth0" => AuthProvider::Auth0,
            "custom-oidc" => AuthProvider::CustomOidc,
            _ => AuthProvider::Other(s.trim().to_string()),
        })
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthProvider::NoAuth => write!(f, "no-auth"),
            AuthProvider::Google => write!(f, "google"),
            AuthProvider::Okta => write!(f, "okta"),
            AuthProvider::Auth0 => write!(f, "auth0"),
            AuthProvider::CustomOidc => write!(f, "custom-oidc"),
            AuthProvider::Other(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_providers() {
        assert_eq!("no-auth".parse::<AuthProvider>().unwrap(), AuthProvider::NoAuth);
        assert_eq!("Google".parse::<AuthProvider>().unwrap(), AuthProvider::Google);
        assert_eq!(" okta ".parse::<AuthProvider>().unwrap(), AuthProvider::Okta);
        assert_eq!(
            "custom-oidc".parse::<AuthProvider>().unwrap(),
            AuthProvider::CustomOidc
        );
    }

    #[test]
    fn test_unknown_provider_kept_verbatim() {
        let provider: AuthProvider = "azure".parse().unwrap();
        assert_eq!(provider, AuthProvider::Other("azure".to_string()));
        assert_eq!(provider.to_string(), "azure");
        assert!(provider.requires_token());
    }

    #[test]
    fn test_no_auth_needs_no_token() {
        assert!(!AuthProvider::NoAuth.requires_token());
        assert!(AuthProvider::Google.requires_token());
    }
}
