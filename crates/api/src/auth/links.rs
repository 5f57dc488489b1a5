//! Login/logout URLs pointing at the identity provider.

use url::form_urlencoded;

/// Login page URL that sends the browser back to `referrer` afterwards.
pub fn login_url(base: &str, referrer: Option<&str>) -> String {
    with_continue(base, referrer)
}

/// Logout page URL that sends the browser back to `referrer` afterwards.
pub fn logout_url(base: &str, referrer: Option<&str>) -> String {
    with_continue(base, referrer)
}

fn with_continue(base: &str, referrer: Option<&str>) -> String {
    let Some(referrer) = referrer.filter(|r| !r.is_empty()) else {
        return base.to_string();
    };

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("continue", referrer)
        .finish();
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}
