// SPDX-License-Identifier: PMPL-1.0-or-later
//! Element collector.
//!
//! Queries a parsed document once for every [`Category`] and freezes the
//! result into an [`ElementSnapshot`]. Later stages only read the snapshot.

use crate::category::Category;
use crate::dom::{ElementHandle, LabelIndex};
use scraper::{Html, Selector};
use tracing::debug;

/// Point-in-time collection of categorized elements
#[derive(Debug, Clone)]
pub struct ElementSnapshot<'a> {
    groups: Vec<(Category, Vec<ElementHandle<'a>>)>,
    count: usize,
}

impl<'a> ElementSnapshot<'a> {
    /// Elements collected for `category`, in document order
    pub fn get(&self, category: Category) -> &[ElementHandle<'a>] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, elements)| elements.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate categories in snapshot order with their elements
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ElementHandle<'a>])> + '_ {
        self.groups
            .iter()
            .map(|(category, elements)| (*category, elements.as_slice()))
    }

    /// Total number of collected elements across all categories
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Collect every element requiring an accessible name
pub fn collect(document: &Html) -> ElementSnapshot<'_> {
    let labels = LabelIndex::build(document);
    debug!("Resolved {} label association(s)", labels.len());
    let mut groups = Vec::with_capacity(Category::ALL.len());
    let mut count = 0;

    for category in Category::ALL {
        let selector = Selector::parse(category.selector()).expect("valid selector");
        let elements: Vec<ElementHandle<'_>> = document
            .select(&selector)
            .map(|element| labels.handle(element))
            .collect();

        debug!("Collected {} <{}> element(s)", elements.len(), category);
        count += elements.len();
        groups.push((category, elements));
    }

    ElementSnapshot { groups, count }
}
