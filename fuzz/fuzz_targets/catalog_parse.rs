//! Fuzz target for IconCatalog::parse with arbitrary byte input.
//!
//! Run with: cargo +nightly fuzz run catalog_parse
//!
//! Any catalog that parses must serialize, and the serialized form must parse
//! back to the same icons.

#![no_main]

use iconlib::{CatalogIcon, IconCatalog, IconDescriptor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut catalog) = IconCatalog::parse("IconLibrary.xml", data) else {
        return;
    };

    let before: Vec<String> = catalog.icon_ids().into_iter().map(String::from).collect();
    let bytes = catalog.to_bytes().expect("parsed catalog must serialize");
    let reparsed = IconCatalog::parse("IconLibrary.xml", &bytes).expect("output must reparse");
    assert_eq!(reparsed.icon_ids(), before);

    let icon = CatalogIcon::new(
        &IconDescriptor::new(1, "fuzz.svg", "unused"),
        &["custom".to_string()],
        true,
        true,
    );
    let _ = catalog.insert(&icon, true);
    let bytes = catalog.to_bytes().expect("edited catalog must serialize");
    let edited = IconCatalog::parse("IconLibrary.xml", &bytes).expect("edited output must reparse");
    assert_eq!(edited.icon_ids().iter().filter(|id| **id == "x-fuzz.svg").count(), 1);
});
