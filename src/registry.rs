// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct CategoryMeta {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

// Fixed at build time; the last entry is the catch-all bucket.
pub static CATEGORIES: [CategoryMeta; 8] = [
    CategoryMeta {
        key: "food",
        name: "Food & Dining",
        icon: "🍽️",
        color: "#e07a5f",
    },
    CategoryMeta {
        key: "transport",
        name: "Transportation",
        icon: "🚗",
        color: "#81a1c1",
    },
    CategoryMeta {
        key: "shopping",
        name: "Shopping",
        icon: "🛍️",
        color: "#b893a3",
    },
    CategoryMeta {
        key: "utilities",
        name: "Utilities",
        icon: "⚡",
        color: "#f2cc8f",
    },
    CategoryMeta {
        key: "entertainment",
        name: "Entertainment",
        icon: "🎬",
        color: "#a8a3c7",
    },
    CategoryMeta {
        key: "health",
        name: "Healthcare",
        icon: "🏥",
        color: "#7a9b76",
    },
    CategoryMeta {
        key: "education",
        name: "Education",
        icon: "📚",
        color: "#5a9b9b",
    },
    CategoryMeta {
        key: "other",
        name: "Other",
        icon: "📋",
        color: "#d4b896",
    },
];

static BY_KEY: Lazy<HashMap<&'static str, &'static CategoryMeta>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.key, c)).collect());

pub fn lookup(key: &str) -> Option<&'static CategoryMeta> {
    BY_KEY.get(key).copied()
}

pub fn contains(key: &str) -> bool {
    BY_KEY.contains_key(key)
}

/// Resolves a key recorded by some other build of the ledger; anything
/// unrecognized lands in the catch-all bucket.
pub fn lookup_or_other(key: &str) -> &'static CategoryMeta {
    lookup(key).unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}
