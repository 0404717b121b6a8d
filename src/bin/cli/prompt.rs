//! Interactive prompts for device access.

use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use rpassword::prompt_password;

use iconlib::transfer::{Credentials, Password};

/// Asks for the device login. Returns `None` if the prompt was aborted.
pub fn prompt_credentials() -> Option<Credentials> {
    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Username")
        .interact_text()
        .ok()?;

    let password = match prompt_password("Password: ") {
        Ok(pwd) => Password::new(pwd),
        Err(e) => {
            eprintln!("Error reading password: {}", e);
            return None;
        }
    };

    Some(Credentials::new(username, password))
}

/// Asks whether the device should be rebooted. Defaults to no.
pub fn confirm_reboot() -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Reboot Miniserver?")
        .default(false)
        .interact()
        .unwrap_or(false)
}
