//! Fuzz target for IconLibrary::open with arbitrary byte input.
//!
//! Run with: cargo +nightly fuzz run library_open

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // We don't care about the result - we're looking for panics or hangs
    if let Ok(library) = iconlib::IconLibrary::open(Cursor::new(data)) {
        let _ = library.version();
        let _ = library.write_to(Cursor::new(Vec::new()));
    }
});
