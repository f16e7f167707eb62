//! Category list in homepage display order.

use super::types::{CategoryDescriptor, ALL_CATEGORY};

pub const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor { id: ALL_CATEGORY, icon: "🧰" },
    CategoryDescriptor { id: "formatting", icon: "🧹" },
    CategoryDescriptor { id: "encoding", icon: "🔐" },
    CategoryDescriptor { id: "conversion", icon: "🔄" },
    CategoryDescriptor { id: "generators", icon: "🎲" },
    CategoryDescriptor { id: "text", icon: "📝" },
    CategoryDescriptor { id: "image", icon: "🖼️" },
];

/// Returns every category, starting with the `all` wildcard.
pub fn all_categories() -> &'static [CategoryDescriptor] {
    CATEGORIES
}

pub fn find_category(id: &str) -> Option<&'static CategoryDescriptor> {
    CATEGORIES.iter().find(|category| category.id == id)
}
