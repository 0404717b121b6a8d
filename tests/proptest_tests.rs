//! Property-based tests using proptest.
//!
//! These tests verify invariants of identifier generation, file-name parsing,
//! and catalog insertion using randomly generated inputs.

use proptest::prelude::*;

use iconlib::ident::{ICON_UUID_BASE, ICON_UUID_SUFFIX};
use iconlib::{CatalogIcon, IconCatalog, IconDescriptor, icon_uuid, parse_icon_file_name};

/// Strategy for icon names as they appear after the numeric prefix.
fn icon_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,15}\\.svg"
}

proptest! {
    /// The prefix is the OR-ed index in uppercase hex and the tail is fixed.
    #[test]
    fn uuid_layout(index in any::<u32>()) {
        let uuid = icon_uuid(index);
        prop_assert_eq!(uuid.len(), 8 + ICON_UUID_SUFFIX.len());
        prop_assert_eq!(&uuid[..8], format!("{:08X}", index | ICON_UUID_BASE));
        prop_assert!(uuid.ends_with(ICON_UUID_SUFFIX));
        prop_assert!(uuid.starts_with('1') || index & 0xE000_0000 != 0);
    }

    /// Indices below the base never share an identifier.
    #[test]
    fn uuid_distinct_below_base(a in 0u32..ICON_UUID_BASE, b in 0u32..ICON_UUID_BASE) {
        prop_assume!(a != b);
        prop_assert_ne!(icon_uuid(a), icon_uuid(b));
    }

    /// A numeric prefix is split off and the rest returned unchanged.
    #[test]
    fn prefixed_names_parse(index in any::<u32>(), name in icon_name_strategy()) {
        let file = format!("{}.{}", index, name);
        prop_assert_eq!(parse_icon_file_name(&file), (Some(index), name.as_str()));
    }

    /// Names starting with a letter never yield an index.
    #[test]
    fn unprefixed_names_are_left_alone(name in icon_name_strategy()) {
        prop_assert_eq!(parse_icon_file_name(&name), (None, name.as_str()));
    }

    /// Inserting a set of icons twice without force adds each exactly once.
    #[test]
    fn insert_is_idempotent(indices in proptest::collection::btree_set(1u32..1000, 0..20)) {
        let mut catalog = IconCatalog::parse(
            "IconLibrary.xml",
            b"<?xml version=\"1.0\"?>\n<IconLibrary>\n</IconLibrary>\n",
        ).unwrap();
        let tags = vec!["custom".to_string()];
        let icons: Vec<CatalogIcon> = indices
            .iter()
            .map(|i| {
                let desc = IconDescriptor::new(*i, &format!("icon{}.svg", i), "unused");
                CatalogIcon::new(&desc, &tags, true, true)
            })
            .collect();

        for _ in 0..2 {
            for icon in &icons {
                let _ = catalog.insert(icon, false);
            }
        }
        prop_assert_eq!(catalog.icon_count(), indices.len());

        let reparsed = IconCatalog::parse("IconLibrary.xml", &catalog.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(reparsed.icon_count(), indices.len());
    }

    /// Forced inserts keep the count and leave one entry per Id.
    #[test]
    fn forced_insert_keeps_count(indices in proptest::collection::btree_set(1u32..1000, 1..20)) {
        let mut catalog = IconCatalog::parse("IconLibrary.xml", b"<IconLibrary/>").unwrap();
        let tags = vec!["custom".to_string()];
        for i in &indices {
            let desc = IconDescriptor::new(*i, &format!("icon{}.svg", i), "unused");
            let _ = catalog.insert(&CatalogIcon::new(&desc, &tags, true, true), false);
        }
        for i in &indices {
            let desc = IconDescriptor::new(*i, &format!("icon{}.svg", i), "unused");
            let _ = catalog.insert(&CatalogIcon::new(&desc, &tags, false, true), true);
        }

        let mut ids = catalog.icon_ids();
        prop_assert_eq!(ids.len(), indices.len());
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), indices.len());
    }
}
