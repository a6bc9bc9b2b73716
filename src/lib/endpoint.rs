//! URL construction for the hosted auth API. Kept free of browser types so the
//! exact request targets are covered by native tests.

use url::form_urlencoded::Serializer;

pub const SIGNUP_PATH: &str = "/auth/v1/signup";
pub const TOKEN_PATH: &str = "/auth/v1/token";
pub const RECOVER_PATH: &str = "/auth/v1/recover";
pub const USER_PATH: &str = "/auth/v1/user";

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Appends form-encoded query parameters to a URL.
pub fn with_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = Serializer::new(String::new()).extend_pairs(params).finish();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

pub fn signup_url(base_url: &str) -> String {
    build_url_with_base(base_url, SIGNUP_PATH)
}

pub fn password_grant_url(base_url: &str) -> String {
    with_query(
        &build_url_with_base(base_url, TOKEN_PATH),
        &[("grant_type", "password")],
    )
}

pub fn recover_url(base_url: &str, redirect_to: &str) -> String {
    with_query(
        &build_url_with_base(base_url, RECOVER_PATH),
        &[("redirect_to", redirect_to)],
    )
}

pub fn user_url(base_url: &str) -> String {
    build_url_with_base(base_url, USER_PATH)
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, password_grant_url, recover_url, signup_url, with_query};

    #[test]
    fn build_url_joins_without_double_slashes() {
        assert_eq!(
            build_url_with_base(" https://abc.supabase.co/ ", "/auth/v1/signup"),
            "https://abc.supabase.co/auth/v1/signup"
        );
        assert_eq!(build_url_with_base("", "/auth/v1/user"), "/auth/v1/user");
    }

    #[test]
    fn signup_and_token_targets() {
        assert_eq!(
            signup_url("https://abc.supabase.co"),
            "https://abc.supabase.co/auth/v1/signup"
        );
        assert_eq!(
            password_grant_url("https://abc.supabase.co"),
            "https://abc.supabase.co/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn recover_url_encodes_redirect_target() {
        assert_eq!(
            recover_url("https://abc.supabase.co", "http://localhost:3000/reset-password"),
            "https://abc.supabase.co/auth/v1/recover?redirect_to=http%3A%2F%2Flocalhost%3A3000%2Freset-password"
        );
    }

    #[test]
    fn with_query_appends_to_existing_query() {
        assert_eq!(with_query("/x?a=1", &[("b", "2 3")]), "/x?a=1&b=2+3");
        assert_eq!(with_query("/x", &[]), "/x");
    }
}
