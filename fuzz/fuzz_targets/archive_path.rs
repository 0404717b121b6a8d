//! Fuzz target for ArchivePath::new with arbitrary string input.
//!
//! Run with: cargo +nightly fuzz run archive_path
//!
//! Accepted paths must stay relative, free of `.`/`..` segments and NUL bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(path_str) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(path) = iconlib::ArchivePath::new(path_str) else {
        return;
    };

    let s = path.as_str();
    assert!(!s.starts_with('/'), "Absolute path accepted: {:?}", s);
    assert!(!s.contains('\0'), "NUL byte accepted: {:?}", s);
    assert!(
        s.split('/').all(|seg| !seg.is_empty() && seg != "." && seg != ".."),
        "Bad segment accepted: {:?}",
        s
    );
});
