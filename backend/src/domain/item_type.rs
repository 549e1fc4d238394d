//! Checklist catalogue shown on the deposit form.

use serde::Serialize;

/// A depositable item kind and the icon the kiosk renders for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemType {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name, used as the deposited item name.
    pub name: &'static str,
    /// Icon key understood by the UI.
    pub icon: &'static str,
}

impl ItemType {
    const fn new(id: &'static str, name: &'static str, icon: &'static str) -> Self {
        Self { id, name, icon }
    }
}

/// Item kinds offered on the checklist, in display order.
pub const ITEM_TYPES: [ItemType; 6] = [
    ItemType::new("mobile", "Mobile", "smartphone"),
    ItemType::new("earphones", "Earphones", "headphones"),
    ItemType::new("headset", "Headset", "headphones"),
    ItemType::new("watch", "Watch", "watch"),
    ItemType::new("charger", "Charger", "plug"),
    ItemType::new("powerbank", "Powerbank", "battery"),
];
