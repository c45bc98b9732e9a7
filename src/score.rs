// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scoring: run every collected element through its rule and grade the page.

use crate::category::Category;
use crate::collector::ElementSnapshot;
use crate::rules;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Letter grade derived from the percentage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 65% or below
    F,
    /// 66% to 75%
    D,
    /// 76% to 85%
    C,
    /// 86% to 95%
    B,
    /// Above 95%
    A,
}

impl Grade {
    /// Map a score to its grade. Boundary values belong to the lower grade.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=65 => Grade::F,
            66..=75 => Grade::D,
            76..=85 => Grade::C,
            86..=95 => Grade::B,
            _ => Grade::A,
        }
    }

    /// Single-letter form
    pub fn letter(&self) -> &'static str {
        match self {
            Grade::F => "F",
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
        }
    }

    /// Human-readable verdict shown next to the letter
    pub fn descriptor(&self) -> &'static str {
        match self {
            Grade::F => "Very bad",
            Grade::D => "Bad",
            Grade::C => "Decent",
            Grade::B => "Good",
            Grade::A => "Very good!",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.letter(), self.descriptor())
    }
}

/// An element that failed its category's rule
#[derive(Debug, Clone, Copy)]
pub struct Failure<'a> {
    /// Category whose rule rejected the element
    pub category: Category,
    /// The rejected element, borrowed from the parsed document
    pub element: ElementRef<'a>,
}

impl<'a> Failure<'a> {
    /// Local tag name of the failing element
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }
}

/// Outcome of one audit pass over a snapshot
#[derive(Debug, Clone)]
pub struct AuditResult<'a> {
    /// Elements checked
    pub total: usize,
    /// Failing elements, in category then document order
    pub failures: Vec<Failure<'a>>,
    /// Percentage of passing elements, rounded up
    pub score: u32,
    /// Letter grade for `score`
    pub grade: Grade,
}

impl<'a> AuditResult<'a> {
    /// Number of elements missing an accessible name
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Tag names of failing elements, in failure order
    pub fn failing_tags(&self) -> Vec<&'a str> {
        self.failures.iter().map(|f| f.tag_name()).collect()
    }

    /// Detach the result from the parsed document
    pub fn summary(&self) -> AuditSummary {
        AuditSummary {
            total: self.total,
            failure_count: self.failures.len(),
            score: self.score,
            grade: self.grade,
            failures: self
                .failures
                .iter()
                .map(|f| FailedElement {
                    tag: f.tag_name().to_string(),
                    category: f.category,
                    id: f.element.value().id().map(String::from),
                })
                .collect(),
        }
    }
}

/// Owned, serializable form of an [`AuditResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Elements checked
    pub total: usize,
    /// Elements missing an accessible name
    pub failure_count: usize,
    /// Percentage of passing elements, rounded up
    pub score: u32,
    pub grade: Grade,
    pub failures: Vec<FailedElement>,
}

impl AuditSummary {
    /// Tag names of failing elements, in failure order
    pub fn failing_tags(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.tag.as_str()).collect()
    }
}

/// A failing element as recorded in a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedElement {
    pub tag: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Percentage of passing elements, rounded up.
///
/// An empty document has nothing to fail and scores 100.
pub fn score(total: usize, failures: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let passed = total.saturating_sub(failures);
    let percent = (passed * 100 + total - 1) / total;
    percent as u32
}

/// Validate every element in the snapshot and grade the result
pub fn audit<'a>(snapshot: &ElementSnapshot<'a>) -> AuditResult<'a> {
    let mut failures = Vec::new();

    for (category, elements) in snapshot.iter() {
        for element in elements {
            if !rules::validate(element, category) {
                debug!("<{}> is missing an accessible name", category);
                failures.push(Failure {
                    category,
                    element: element.element(),
                });
            }
        }
    }

    let total = snapshot.count();
    let score = score(total, failures.len());
    let grade = Grade::from_score(score);

    info!(
        "Checked {} element(s), {} missing attributes, score {}%",
        total,
        failures.len(),
        score
    );

    AuditResult {
        total,
        failures,
        score,
        grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::collect;
    use scraper::Html;

    fn audit_html(html: &str) -> AuditSummary {
        let document = Html::parse_document(html);
        let snapshot = collect(&document);
        audit(&snapshot).summary()
    }

    #[test]
    fn test_grade_boundaries() {
        let cases = [
            (0, Grade::F),
            (65, Grade::F),
            (66, Grade::D),
            (75, Grade::D),
            (76, Grade::C),
            (85, Grade::C),
            (86, Grade::B),
            (95, Grade::B),
            (96, Grade::A),
            (100, Grade::A),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::F.to_string(), "\"F\" - Very bad");
        assert_eq!(Grade::D.to_string(), "\"D\" - Bad");
        assert_eq!(Grade::C.to_string(), "\"C\" - Decent");
        assert_eq!(Grade::B.to_string(), "\"B\" - Good");
        assert_eq!(Grade::A.to_string(), "\"A\" - Very good!");
    }

    #[test]
    fn test_score_rounds_up() {
        assert_eq!(score(3, 1), 67);
        assert_eq!(score(3, 2), 34);
        assert_eq!(score(4, 2), 50);
        assert_eq!(score(25, 18), 28);
        assert_eq!(score(1, 1), 0);
        assert_eq!(score(1, 0), 100);
        assert_eq!(score(7, 0), 100);
    }

    #[test]
    fn test_empty_document_scores_perfect() {
        assert_eq!(score(0, 0), 100);
        let summary = audit_html("<html><body><p>Just text</p></body></html>");
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failure_count, 0);
        assert_eq!(summary.score, 100);
        assert_eq!(summary.grade, Grade::A);
    }

    #[test]
    fn test_single_described_image() {
        let summary = audit_html(r#"<img src="cat.jpg" alt="cat photo">"#);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.failure_count, 0);
        assert_eq!(summary.score, 100);
        assert_eq!(summary.grade, Grade::A);
    }

    #[test]
    fn test_single_undescribed_image() {
        let summary = audit_html(r#"<img src="cat.jpg">"#);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.failure_count, 1);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.grade, Grade::F);
    }

    #[test]
    fn test_mixed_document() {
        let summary = audit_html(
            r#"
            <button>Submit</button>
            <img src="cat.jpg">
            <a href="/" aria-label="Home"></a>
            <select><option>One</option></select>
            "#,
        );
        assert_eq!(summary.total, 4);
        assert_eq!(summary.failure_count, 2);
        assert_eq!(summary.score, 50);
        assert_eq!(summary.grade, Grade::F);
        // select is collected before img
        assert_eq!(summary.failing_tags(), vec!["select", "img"]);
    }

    #[test]
    fn test_hidden_input_not_counted() {
        let summary = audit_html(r#"<input type="hidden" name="csrf"><input aria-label="Name">"#);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.failure_count, 0);
    }

    #[test]
    fn test_failure_order_follows_categories_then_document() {
        let summary = audit_html(
            r#"
            <a id="l1" href="/"></a>
            <img id="i1">
            <button id="b1"></button>
            <img id="i2">
            <input id="n1">
            "#,
        );
        let ids: Vec<_> = summary.failures.iter().filter_map(|f| f.id.as_deref()).collect();
        assert_eq!(ids, vec!["b1", "n1", "i1", "i2", "l1"]);
    }

    #[test]
    fn test_failing_tags_match_failure_count() {
        let document = Html::parse_document(
            r#"<button></button><textarea></textarea><a></a><img alt="ok">"#,
        );
        let snapshot = collect(&document);
        let result = audit(&snapshot);
        assert_eq!(result.failing_tags().len(), result.failure_count());
        assert_eq!(result.failure_count(), 3);
        assert_eq!(result.summary().failures.len(), result.failure_count());
    }

    #[test]
    fn test_audit_is_idempotent() {
        let document = Html::parse_document(
            r#"<button>Go</button><img><label>Name <input></label><a href="/top"></a>"#,
        );
        let snapshot = collect(&document);
        let first = audit(&snapshot).summary();
        let second = audit(&snapshot).summary();
        assert_eq!(first, second);
        assert_eq!(first, audit(&collect(&document)).summary());
    }
}
