//! Content checks for parsed flashcards.

use crate::types::{Flashcards, IssueKind, ValidationIssue, ValidationLimits};

/// Validate pairs with the default limits.
pub fn validate(cards: &Flashcards) -> Vec<ValidationIssue> {
    validate_with(cards, &ValidationLimits::default())
}

/// Validate pairs. Each rule is checked independently, so one pair may
/// produce several issues. Results are ordered by term, then rule.
pub fn validate_with(cards: &Flashcards, limits: &ValidationLimits) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = cards
        .iter()
        .flat_map(|(term, definition)| {
            check_pair(term, definition, limits)
                .into_iter()
                .map(move |kind| ValidationIssue {
                    term: term.clone(),
                    kind,
                })
        })
        .collect();
    issues.sort_by(|a, b| a.term.cmp(&b.term).then(a.kind.cmp(&b.kind)));
    issues
}

fn check_pair(term: &str, definition: &str, limits: &ValidationLimits) -> Vec<IssueKind> {
    let mut kinds = Vec::new();
    if term.trim().is_empty() {
        kinds.push(IssueKind::EmptyTerm);
    }
    if definition.trim().is_empty() {
        kinds.push(IssueKind::EmptyDefinition);
    }
    if term.chars().count() > limits.max_term_len {
        kinds.push(IssueKind::TermTooLong);
    }
    if definition.chars().count() > limits.max_definition_len {
        kinds.push(IssueKind::DefinitionTooLong);
    }
    kinds
}
