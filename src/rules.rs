// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessible-name rule engine.
//!
//! One validator per [`Category`]. A validator answers a single question:
//! does this element expose at least the minimum accessible name for its
//! kind? Every rule is a pure OR-chain over the element's own attributes,
//! text, and associated labels.
//!
//! | Category | Passes when |
//! |----------|-------------|
//! | `img`      | `aria-hidden` present, or non-empty `alt` |
//! | `button`   | visible text, `aria-label`, or `aria-labelledby` |
//! | `a`        | truthy `aria-hidden`, visible text, `aria-label`, or `aria-labelledby` |
//! | `input`    | a label, `type="hidden"`, `type="image"` with `alt`, or `aria-label`/`-labelledby`/`-describedby` |
//! | `textarea` | a label, `aria-label`, or `aria-labelledby` |
//! | `select`   | same as `textarea` |

use crate::category::Category;
use crate::dom::ElementHandle;

/// A validator for exactly one category
pub type ValidationRule = for<'a> fn(&ElementHandle<'a>) -> bool;

/// The validator registered for `category`
pub fn rule_for(category: Category) -> ValidationRule {
    match category {
        Category::Button => validate_button,
        Category::Input => validate_input,
        Category::Textarea => validate_textarea,
        Category::Select => validate_select,
        Category::Image => validate_image,
        Category::Link => validate_link,
    }
}

/// Run the validator for `category` against `element`
pub fn validate(element: &ElementHandle<'_>, category: Category) -> bool {
    rule_for(category)(element)
}

/// `<img>`: decorative, or has non-empty alt text
pub fn validate_image(element: &ElementHandle<'_>) -> bool {
    if element.has_attr("aria-hidden") {
        return true;
    }

    // alt="" is flagged here; only aria-hidden marks an image decorative
    match element.attr("alt") {
        Some(alt) => !alt.is_empty(),
        None => false,
    }
}

/// `<button>`: visible text or an ARIA label
pub fn validate_button(element: &ElementHandle<'_>) -> bool {
    element.has_visible_text() || has_aria_label(element)
}

/// `<a>`: hidden from assistive technology, visible text, or an ARIA label.
///
/// Any non-empty `aria-hidden` value counts as hidden, including `"false"`.
/// An empty `aria-hidden=""` does not.
pub fn validate_link(element: &ElementHandle<'_>) -> bool {
    let hidden = element
        .attr("aria-hidden")
        .map(|value| !value.is_empty())
        .unwrap_or(false);

    hidden || element.has_visible_text() || has_aria_label(element)
}

/// `<input>`: labelled, hidden, an image input with alt, or described via ARIA.
///
/// Hidden inputs never reach this rule through the collector, but a handle
/// built directly still short-circuits here. The `type` keywords are matched
/// exactly as written, so `type="IMAGE"` is judged like any other input.
pub fn validate_input(element: &ElementHandle<'_>) -> bool {
    if !element.labels().is_empty() {
        return true;
    }

    match element.attr("type") {
        Some("hidden") => true,
        // Image inputs are judged on alt alone; an empty alt is accepted
        Some("image") => element.has_attr("alt"),
        _ => has_aria_label(element) || element.has_attr("aria-describedby"),
    }
}

/// `<textarea>`: labelled or carries an ARIA label
pub fn validate_textarea(element: &ElementHandle<'_>) -> bool {
    !element.labels().is_empty() || has_aria_label(element)
}

/// `<select>`: same rule as `<textarea>`
pub fn validate_select(element: &ElementHandle<'_>) -> bool {
    validate_textarea(element)
}

fn has_aria_label(element: &ElementHandle<'_>) -> bool {
    element.has_attr("aria-label") || element.has_attr("aria-labelledby")
}
