//! Transfer client integration tests.
//!
//! A minimal FTP server and HTTP endpoint run on loopback threads so the
//! upload and reboot paths can be exercised without a device.

#![cfg(feature = "transfer")]

use std::io::{BufRead, BufReader, Cursor, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use iconlib::transfer::{Credentials, DEFAULT_REMOTE_PATH, UploadSession, reboot, upload};
use tempfile::TempDir;

struct ServerLog {
    commands: Vec<String>,
    received: Vec<u8>,
}

fn reply(stream: &mut TcpStream, line: &str) {
    stream.write_all(line.as_bytes()).unwrap();
    stream.write_all(b"\r\n").unwrap();
    stream.flush().unwrap();
}

/// Serves one passive-mode FTP session. STOR is accepted or refused with 553.
fn spawn_ftp_server(accept_store: bool) -> (String, JoinHandle<ServerLog>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let handle = thread::spawn(move || {
        let (mut control, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(control.try_clone().unwrap());
        let mut data_listener: Option<TcpListener> = None;
        let mut log = ServerLog {
            commands: Vec::new(),
            received: Vec::new(),
        };

        reply(&mut control, "220 Miniserver FTP ready");
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim_end().to_string();
            let verb = line
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_ascii_uppercase();
            log.commands.push(line);

            match verb.as_str() {
                "USER" => reply(&mut control, "331 Password required"),
                "PASS" => reply(&mut control, "230 Logged in"),
                "TYPE" => reply(&mut control, "200 Type set"),
                "PASV" => {
                    let data = TcpListener::bind("127.0.0.1:0").unwrap();
                    let port = data.local_addr().unwrap().port();
                    reply(
                        &mut control,
                        &format!(
                            "227 Entering Passive Mode (127,0,0,1,{},{})",
                            port >> 8,
                            port & 0xff
                        ),
                    );
                    data_listener = Some(data);
                }
                "STOR" if !accept_store => {
                    data_listener = None;
                    reply(&mut control, "553 Permission denied");
                }
                "STOR" => {
                    let data = data_listener.take().unwrap();
                    reply(&mut control, "150 Opening data connection");
                    let (mut stream, _) = data.accept().unwrap();
                    stream.read_to_end(&mut log.received).unwrap();
                    reply(&mut control, "226 Transfer complete");
                }
                "QUIT" => {
                    reply(&mut control, "221 Bye");
                    break;
                }
                _ => reply(&mut control, "502 Not implemented"),
            }
        }
        log
    });

    (address, handle)
}

/// Answers one HTTP request and returns its head.
fn spawn_http_server(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    (address, handle)
}

#[test]
fn test_upload_stores_library() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("IconLibrary.zip");
    let payload: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&source, &payload).unwrap();

    let (address, server) = spawn_ftp_server(true);
    let creds = Credentials::new("admin", "secret");
    let report = upload(&address, &source, DEFAULT_REMOTE_PATH, &creds).unwrap();
    let log = server.join().unwrap();

    assert_eq!(report.bytes, payload.len() as u64);
    assert!(
        report
            .welcome
            .as_deref()
            .is_some_and(|w| w.contains("Miniserver FTP ready"))
    );
    assert_eq!(log.received, payload);
    assert!(log.commands.contains(&"USER admin".to_string()));
    assert!(log.commands.contains(&"PASS secret".to_string()));
    assert!(log.commands.contains(&"STOR /sys/IconLibrary.zip".to_string()));
}

#[test]
fn test_banner_is_available_before_a_refused_store() {
    let (address, server) = spawn_ftp_server(false);
    let creds = Credentials::new("admin", "secret");

    let mut session = UploadSession::connect(&address, &creds).unwrap();
    assert!(
        session
            .welcome()
            .is_some_and(|w| w.contains("Miniserver FTP ready"))
    );

    let mut data = Cursor::new(b"zip".to_vec());
    let err = session.store(DEFAULT_REMOTE_PATH, &mut data).unwrap_err();
    assert!(err.is_transport_error());
    session.close();

    let log = server.join().unwrap();
    assert!(log.received.is_empty());
    assert!(log.commands.contains(&"STOR /sys/IconLibrary.zip".to_string()));
}

#[test]
fn test_upload_to_nothing_is_transport_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("IconLibrary.zip");
    std::fs::write(&source, b"zip").unwrap();
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let creds = Credentials::new("admin", "secret");
    let err = upload(&format!("127.0.0.1:{}", port), &source, DEFAULT_REMOTE_PATH, &creds)
        .unwrap_err();
    assert!(err.is_transport_error());
}

#[test]
fn test_reboot_sends_basic_auth() {
    let (address, server) = spawn_http_server("200 OK", "<LL control=\"dev/sys/reboot\" Code=\"200\"/>");
    let creds = Credentials::new("admin", "secret");

    let body = reboot(&address, &creds).unwrap();
    let head = server.join().unwrap();

    assert_eq!(body, "<LL control=\"dev/sys/reboot\" Code=\"200\"/>");
    assert!(head.starts_with("GET /dev/sys/reboot HTTP/1.1"));
    // admin:secret
    assert!(
        head.to_ascii_lowercase()
            .contains("authorization: basic ywrtaw46c2vjcmv0")
    );
}

#[test]
fn test_reboot_returns_body_on_error_status() {
    let (address, server) = spawn_http_server("401 Unauthorized", "denied");
    let creds = Credentials::new("admin", "wrong");

    let body = reboot(&address, &creds).unwrap();
    let _ = server.join().unwrap();
    assert_eq!(body, "denied");
}
