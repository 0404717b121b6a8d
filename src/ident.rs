//! Deterministic identifiers for custom icons.
//!
//! Vendor icons carry random UUIDs. Icons added by this crate get an
//! identifier derived from their index, OR-ed with [`ICON_UUID_BASE`] so that
//! every generated identifier lands in the `1xxxxxxx-00FF-...` block and can be
//! told apart from vendor ones at a glance.

/// High bits OR-ed into every icon index.
pub const ICON_UUID_BASE: u32 = 0x1000_0000;

/// Fixed tail shared by every generated identifier.
pub const ICON_UUID_SUFFIX: &str = "-00FF-0000-0000000000000000";

/// Returns the catalog `uuid` for the icon at `index`.
///
/// ```
/// use iconlib::icon_uuid;
///
/// assert_eq!(icon_uuid(1), "10000001-00FF-0000-0000000000000000");
/// assert_eq!(icon_uuid(0xABC), "10000ABC-00FF-0000-0000000000000000");
/// ```
pub fn icon_uuid(index: u32) -> String {
    format!("{:08X}{}", index | ICON_UUID_BASE, ICON_UUID_SUFFIX)
}
