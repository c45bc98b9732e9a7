// SPDX-License-Identifier: PMPL-1.0-or-later
//! Aria Tree Inspector - accessible-name auditor for HTML documents
//!
//! Scans a document for elements that need an accessible name, checks each
//! one against the rule for its category, and grades the page by the share
//! of elements that pass.
//!
//! ## Pipeline
//!
//! - **Collector** ([`collector`]): snapshots buttons, inputs, textareas,
//!   selects, images and links, with their associated labels
//! - **Rules** ([`rules`]): one pure validator per [`category::Category`]
//! - **Score** ([`score`]): percentage of passing elements and letter grade
//! - **Report** ([`report`]): console banner or JSON
//!
//! ```
//! use aria_tree_inspector::scanner::inspect_html;
//!
//! let summary = inspect_html(r#"<img src="cat.jpg" alt="cat photo">"#);
//! assert_eq!(summary.score, 100);
//! ```

pub mod category;
pub mod collector;
pub mod config;
pub mod dom;
pub mod error;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod score;
