//! The gear catalog: canonical ids, display-label resolution, and the
//! static warning table.
//!
//! Warnings are keyed by canonical id, never by translated text, so a
//! catalog update cannot detach a warning from its item.

use varsel_idf::GearWarning;
use varsel_types::MessageCatalog;

/// Canonical id of the satellite phone. Selecting it makes the contact
/// number field mandatory.
pub const SAT_PHONE_ID: &str = "gear9";

/// Canonical ids of the gear catalog, in catalog order.
pub const CATALOG_IDS: [&str; 14] = [
    "gear1", "gear2", "gear3", "gear4", "gear5", "gear6", "gear7", "gear8", "gear9", "gear10",
    "gear11", "gear12", "gear13", "gear14",
];

/// Items that carry a safety warning. At most one warning per id.
const WARNING_IDS: [&str; 3] = ["gear1", "gear7", "gear13"];

/// Resolves a display label back to its canonical id under the active
/// catalog. Custom free-form gear resolves to `None`.
pub fn canonical_id(label: &str, catalog: &MessageCatalog) -> Option<&'static str> {
    CATALOG_IDS
        .iter()
        .copied()
        .find(|id| catalog.lookup(id) == Some(label))
}

/// Looks up the warning for a canonical id, localizing its title and
/// description through the catalog.
pub fn warning_for(id: &'static str, catalog: &MessageCatalog) -> Option<GearWarning> {
    if !WARNING_IDS.contains(&id) {
        return None;
    }
    let description_key = format!("{}warning", id);
    Some(GearWarning {
        canonical_id: id,
        title: catalog.get(id).to_string(),
        description: catalog.get(&description_key).to_string(),
    })
}
