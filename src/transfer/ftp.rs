//! Library upload over FTP.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use suppaftp::FtpStream;
use suppaftp::types::FileType;

use super::Credentials;
use crate::Result;

/// Default FTP control port.
pub const FTP_PORT: u16 = 21;

/// Where the device expects its icon library.
pub const DEFAULT_REMOTE_PATH: &str = "/sys/IconLibrary.zip";

/// Result of a successful upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Banner sent by the server on connect.
    pub welcome: Option<String>,
    /// Bytes transferred.
    pub bytes: u64,
}

/// Uploads a local file to `dest` on `host`.
///
/// `host` may carry a port (`"192.168.1.7:2121"`); port 21 is used otherwise.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if `source` cannot be opened and
/// [`Error::Transfer`](crate::Error::Transfer) for any FTP failure.
pub fn upload(
    host: &str,
    source: impl AsRef<Path>,
    dest: &str,
    credentials: &Credentials,
) -> Result<UploadReport> {
    let mut reader = BufReader::new(File::open(source.as_ref())?);
    upload_from_reader(host, &mut reader, dest, credentials)
}

/// Uploads everything `reader` yields to `dest` on `host`.
pub fn upload_from_reader<R: Read>(
    host: &str,
    reader: &mut R,
    dest: &str,
    credentials: &Credentials,
) -> Result<UploadReport> {
    let mut session = UploadSession::connect(host, credentials)?;
    let bytes = session.store(dest, reader)?;
    let welcome = session.welcome().map(str::to_string);
    session.close();
    Ok(UploadReport { welcome, bytes })
}

/// A logged-in FTP session.
///
/// The server's banner is available as soon as the session is open, so it
/// can be shown before a transfer that may still fail.
pub struct UploadSession {
    stream: FtpStream,
    welcome: Option<String>,
}

impl UploadSession {
    /// Connects to `host`, logs in and switches to binary mode.
    pub fn connect(host: &str, credentials: &Credentials) -> Result<Self> {
        let address = ftp_address(host);
        log::debug!("Connecting to {}", address);

        let mut stream = FtpStream::connect(address.as_str())?;
        stream.login(credentials.username.as_str(), credentials.password.as_str())?;
        let welcome = stream.get_welcome_msg().map(|msg| msg.trim_end().to_string());
        if let Some(banner) = &welcome {
            log::info!("{}", banner);
        }
        stream.transfer_type(FileType::Binary)?;

        Ok(Self { stream, welcome })
    }

    /// Banner sent by the server on connect.
    pub fn welcome(&self) -> Option<&str> {
        self.welcome.as_deref()
    }

    /// Stores everything `reader` yields at `dest`, returning the byte count.
    pub fn store<R: Read>(&mut self, dest: &str, reader: &mut R) -> Result<u64> {
        let bytes = self.stream.put_file(dest, reader)?;
        log::info!("Stored {} bytes at {}", bytes, dest);
        Ok(bytes)
    }

    /// Ends the session. A failed QUIT is only logged.
    pub fn close(mut self) {
        if let Err(e) = self.stream.quit() {
            log::warn!("FTP quit failed: {}", e);
        }
    }
}

/// Appends the default port unless `host` already names one.
fn ftp_address(host: &str) -> String {
    if let Some(rest) = host.strip_prefix('[') {
        return if rest.contains("]:") {
            host.to_string()
        } else {
            format!("{}:{}", host, FTP_PORT)
        };
    }
    match host.matches(':').count() {
        0 => format!("{}:{}", host, FTP_PORT),
        1 => host.to_string(),
        _ => format!("[{}]:{}", host, FTP_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;
    use std::net::TcpListener;

    #[test]
    fn test_ftp_address() {
        assert_eq!(ftp_address("192.168.1.7"), "192.168.1.7:21");
        assert_eq!(ftp_address("miniserver.local"), "miniserver.local:21");
        assert_eq!(ftp_address("192.168.1.7:2121"), "192.168.1.7:2121");
        assert_eq!(ftp_address("fe80::1"), "[fe80::1]:21");
        assert_eq!(ftp_address("[fe80::1]:2121"), "[fe80::1]:2121");
        assert_eq!(ftp_address("[fe80::1]"), "[fe80::1]:21");
    }

    #[test]
    fn test_upload_missing_source() {
        let creds = Credentials::new("admin", "admin");
        let err = upload("127.0.0.1", "/nonexistent/IconLibrary.zip", DEFAULT_REMOTE_PATH, &creds)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_upload_connection_refused() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let creds = Credentials::new("admin", "admin");
        let mut data = Cursor::new(b"zip".to_vec());

        let err = upload_from_reader(
            &format!("127.0.0.1:{}", port),
            &mut data,
            DEFAULT_REMOTE_PATH,
            &creds,
        )
        .unwrap_err();
        assert!(err.is_transport_error());
    }
}
