/// Visible fraction at which an animated block starts counting up.
pub const REVEAL_THRESHOLD: f64 = 0.35;

pub const SALES_EMAIL: &str = "sales@emailstack.ai";
pub const SUPPORT_EMAIL: &str = "support@emailstack.ai";

/// Login page of the admin app. Override at build time with
/// `EMAILSTACK_ADMIN_LOGIN_URL`.
#[cfg(debug_assertions)]
pub fn admin_login_url() -> &'static str {
    option_env!("EMAILSTACK_ADMIN_LOGIN_URL").unwrap_or("http://localhost:3000/login") // admin app running locally
}

#[cfg(not(debug_assertions))]
pub fn admin_login_url() -> &'static str {
    option_env!("EMAILSTACK_ADMIN_LOGIN_URL").unwrap_or("/login")
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
