//! Pushing a library to the device.
//!
//! The device accepts its icon library over FTP and picks it up after a
//! reboot, which is triggered through its HTTP interface. Both calls are
//! blocking and use the same [`Credentials`].
//!
//! ```rust,no_run
//! use iconlib::transfer::{Credentials, DEFAULT_REMOTE_PATH, reboot, upload};
//!
//! let creds = Credentials::new("admin", "secret");
//! let report = upload("192.168.1.7", "IconLibrary.zip", DEFAULT_REMOTE_PATH, &creds)?;
//! println!("sent {} bytes", report.bytes);
//! println!("{}", reboot("192.168.1.7", &creds)?);
//! # Ok::<(), iconlib::Error>(())
//! ```

mod credentials;
mod ftp;
mod reboot;

pub use credentials::{Credentials, Password};
pub use ftp::{
    DEFAULT_REMOTE_PATH, FTP_PORT, UploadReport, UploadSession, upload, upload_from_reader,
};
pub use reboot::{REBOOT_PATH, reboot, reboot_url};
