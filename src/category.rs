// SPDX-License-Identifier: PMPL-1.0-or-later
//! The six element categories that require an accessible name.

use serde::{Deserialize, Serialize};

/// Element category driving selection and validator dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `<button>`
    Button,
    /// `<input>` other than `type="hidden"`
    Input,
    /// `<textarea>`
    Textarea,
    /// `<select>`
    Select,
    /// `<img>`
    Image,
    /// `<a>`, with or without `href`
    Link,
}

impl Category {
    /// All categories, in snapshot order
    pub const ALL: [Category; 6] = [
        Category::Button,
        Category::Input,
        Category::Textarea,
        Category::Select,
        Category::Image,
        Category::Link,
    ];

    /// HTML tag name for this category
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Button => "button",
            Category::Input => "input",
            Category::Textarea => "textarea",
            Category::Select => "select",
            Category::Image => "img",
            Category::Link => "a",
        }
    }

    /// CSS selector used to collect elements of this category
    pub fn selector(&self) -> &'static str {
        match self {
            Category::Input => r#"input:not([type="hidden"])"#,
            other => other.tag(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
