// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only views over parsed document nodes.
//!
//! An [`ElementHandle`] wraps a `scraper` element together with the
//! `<label>` elements associated with it, so that validators can answer
//! every question they need without walking the document themselves.

use scraper::{ElementRef, Html};

/// Elements that can be associated with a `<label>`
const LABELABLE_ELEMENTS: &[&str] = &[
    "button", "input", "meter", "output", "progress", "select", "textarea",
];

/// Borrowed, read-only reference to an element in a parsed document
#[derive(Debug, Clone)]
pub struct ElementHandle<'a> {
    element: ElementRef<'a>,
    labels: Vec<ElementRef<'a>>,
}

impl<'a> ElementHandle<'a> {
    /// Build a handle for a single element, resolving its labels against `document`.
    ///
    /// Prefer [`LabelIndex::handle`] when building many handles from the same
    /// document; this rebuilds the index on every call.
    pub fn resolve(document: &'a Html, element: ElementRef<'a>) -> Self {
        LabelIndex::build(document).handle(element)
    }

    /// Local tag name, lowercased by the parser
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Attribute value, `None` when absent
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Whether the attribute exists, regardless of its value
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// The element's `id`, if any
    pub fn id(&self) -> Option<&'a str> {
        self.element.value().id()
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self) -> String {
        self.element.text().collect()
    }

    /// Whether the text content is non-empty once trimmed
    pub fn has_visible_text(&self) -> bool {
        !self.text_content().trim().is_empty()
    }

    /// Labels whose labeled control is this element, in document order
    pub fn labels(&self) -> &[ElementRef<'a>] {
        &self.labels
    }

    /// The underlying `scraper` element
    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

/// Label-to-control associations for one document.
///
/// A label with a `for` attribute labels the first element carrying that
/// `id`, as long as it is labelable. A label without `for` labels its first
/// labelable descendant.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex<'a> {
    /// `(control, label)` pairs in label document order
    associations: Vec<(ElementRef<'a>, ElementRef<'a>)>,
}

impl<'a> LabelIndex<'a> {
    /// Resolve every `<label>` in the document to its labeled control
    pub fn build(document: &'a Html) -> Self {
        let root = document.root_element();
        let associations = root
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "label")
            .filter_map(|label| labeled_control(root, label).map(|control| (control, label)))
            .collect();

        Self { associations }
    }

    /// Labels associated with `element`
    pub fn labels_for(&self, element: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        self.associations
            .iter()
            .filter(|(control, _)| *control == element)
            .map(|(_, label)| *label)
            .collect()
    }

    /// Wrap `element` in a handle carrying its resolved labels
    pub fn handle(&self, element: ElementRef<'a>) -> ElementHandle<'a> {
        ElementHandle {
            element,
            labels: self.labels_for(element),
        }
    }

    /// Number of labels that resolved to a control
    pub fn len(&self) -> usize {
        self.associations.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }
}

/// Whether `element` can be the labeled control of a `<label>`
pub fn is_labelable(element: ElementRef<'_>) -> bool {
    let name = element.value().name();
    if name == "input" {
        return !type_is(element, "hidden");
    }
    LABELABLE_ELEMENTS.contains(&name)
}

fn type_is(element: ElementRef<'_>, keyword: &str) -> bool {
    element
        .value()
        .attr("type")
        .map(|t| t.eq_ignore_ascii_case(keyword))
        .unwrap_or(false)
}

fn labeled_control<'a>(root: ElementRef<'a>, label: ElementRef<'a>) -> Option<ElementRef<'a>> {
    match label.value().attr("for") {
        Some("") => None,
        Some(target) => root
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(target))
            .filter(|el| is_labelable(*el)),
        None => label
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| is_labelable(*el)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_label_for_resolves_by_id() {
        let html = r#"<label for="name">Name</label><input id="name">"#;
        let document = Html::parse_document(html);
        let handle = ElementHandle::resolve(&document, first(&document, "input"));
        assert_eq!(handle.labels().len(), 1);
    }

    #[test]
    fn test_wrapping_label_resolves_first_labelable_descendant() {
        let html = r#"<label>Pick <select id="a"></select><textarea id="b"></textarea></label>"#;
        let document = Html::parse_document(html);
        let index = LabelIndex::build(&document);
        assert_eq!(index.handle(first(&document, "select")).labels().len(), 1);
        assert!(index.handle(first(&document, "textarea")).labels().is_empty());
    }

    #[test]
    fn test_label_for_missing_id_has_no_control() {
        let html = r#"<label for="nope">Name <input id="name"></label>"#;
        let document = Html::parse_document(html);
        let handle = ElementHandle::resolve(&document, first(&document, "input"));
        assert!(handle.labels().is_empty());
    }

    #[test]
    fn test_label_for_non_labelable_target() {
        let html = r#"<label for="box">Box</label><div id="box"></div>"#;
        let document = Html::parse_document(html);
        assert!(LabelIndex::build(&document).is_empty());
    }

    #[test]
    fn test_label_for_uses_first_matching_id() {
        let html = r#"<label for="dup">Dup</label><input id="dup"><input id="dup">"#;
        let document = Html::parse_document(html);
        let index = LabelIndex::build(&document);
        let selector = Selector::parse("input").unwrap();
        let counts: Vec<usize> = document
            .select(&selector)
            .map(|el| index.labels_for(el).len())
            .collect();
        assert_eq!(counts, vec![1, 0]);
    }

    #[test]
    fn test_multiple_labels_for_one_control() {
        let html = r#"
            <label for="email">Email</label>
            <label>Work email <input id="email" type="email"></label>
        "#;
        let document = Html::parse_document(html);
        let handle = ElementHandle::resolve(&document, first(&document, "input"));
        assert_eq!(handle.labels().len(), 2);
    }

    #[test]
    fn test_hidden_input_is_not_labelable() {
        let html = r#"<label>Token <input type="HIDDEN" name="csrf"></label>"#;
        let document = Html::parse_document(html);
        let input = first(&document, "input");
        assert!(!is_labelable(input));
        assert!(ElementHandle::resolve(&document, input).labels().is_empty());
    }

    #[test]
    fn test_text_content_and_attributes() {
        let html = r#"<button id="go" aria-label="">  <span> Go </span> </button>"#;
        let document = Html::parse_document(html);
        let handle = ElementHandle::resolve(&document, first(&document, "button"));
        assert_eq!(handle.tag_name(), "button");
        assert_eq!(handle.id(), Some("go"));
        assert!(handle.has_attr("aria-label"));
        assert_eq!(handle.attr("aria-label"), Some(""));
        assert!(!handle.has_attr("aria-labelledby"));
        assert_eq!(handle.text_content().trim(), "Go");
        assert!(handle.has_visible_text());
    }
}
