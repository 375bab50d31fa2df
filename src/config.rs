pub const SIGN_IN_URL: &str = "https://login.atlastraining.io";
pub const CHECKOUT_URL: &str = "https://secure.atlastraining.io";
pub const CONTACT_EMAIL: &str = "admin@atlastraining.io";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://atlastraining.io"
}

pub fn contact_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
