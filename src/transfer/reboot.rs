//! Device reboot over HTTP.

use super::Credentials;
use crate::Result;

/// Path of the reboot command on the device's web interface.
pub const REBOOT_PATH: &str = "/dev/sys/reboot";

/// Builds the reboot URL for `host`.
///
/// ```
/// use iconlib::transfer::reboot_url;
///
/// assert_eq!(reboot_url("192.168.1.7"), "http://192.168.1.7/dev/sys/reboot");
/// ```
pub fn reboot_url(host: &str) -> String {
    format!("http://{}{}", host.trim_end_matches('/'), REBOOT_PATH)
}

/// Asks the device at `host` to reboot and returns the response body.
///
/// The body is returned whatever the status code; a non-success status is
/// logged as a warning.
///
/// # Errors
///
/// Returns [`Error::Http`](crate::Error::Http) if the request fails or the
/// body cannot be read.
pub fn reboot(host: &str, credentials: &Credentials) -> Result<String> {
    let url = reboot_url(host);
    log::debug!("GET {}", url);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .basic_auth(&credentials.username, Some(credentials.password.as_str()))
        .send()?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Reboot request returned {}", status);
    }

    Ok(response.text()?)
}
