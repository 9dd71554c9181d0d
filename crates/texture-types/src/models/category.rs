//! Fixed texture categories offered as quick-search chips.

use serde::Serialize;

/// A quick-search category. The label doubles as the query text.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const TEXTURE_CATEGORIES: &[Category] = &[
    Category { id: "wood", label: "Wood", icon: "🪵" },
    Category { id: "stone", label: "Stone", icon: "🪨" },
    Category { id: "metal", label: "Metal", icon: "⚙️" },
    Category { id: "fabric", label: "Fabric", icon: "🧵" },
    Category { id: "concrete", label: "Concrete", icon: "🏗️" },
    Category { id: "brick", label: "Brick", icon: "🧱" },
    Category { id: "marble", label: "Marble", icon: "💎" },
    Category { id: "grass", label: "Grass", icon: "🌿" },
    Category { id: "sand", label: "Sand", icon: "🏖️" },
    Category { id: "leather", label: "Leather", icon: "👜" },
    Category { id: "tile", label: "Tile", icon: "🔲" },
    Category { id: "rust", label: "Rust", icon: "🔶" },
    Category { id: "bark", label: "Bark", icon: "🌳" },
    Category { id: "plaster", label: "Plaster", icon: "🏠" },
    Category { id: "asphalt", label: "Asphalt", icon: "🛣️" },
];

impl Category {
    /// Look up a category by id (case-insensitive).
    pub fn find(id: &str) -> Option<&'static Category> {
        TEXTURE_CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
    }
}
