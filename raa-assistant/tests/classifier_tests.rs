//! Decision-table tests for the intent classifier.

use raa_assistant::IntentClassifier;
use raa_core::IntentLabel;

#[test]
fn analytics_signal_alone_routes_to_analytics() {
    let classifier = IntentClassifier::default();
    assert_eq!(classifier.classify("profitability of banks"), IntentLabel::Analytics);
}

#[test]
fn document_signal_alone_routes_to_document() {
    let classifier = IntentClassifier::default();
    assert_eq!(
        classifier.classify("what are the key risks mentioned by EBA"),
        IntentLabel::Document
    );
}

#[test]
fn both_signals_route_to_hybrid() {
    let classifier = IntentClassifier::default();
    assert_eq!(classifier.classify("profitability and regulatory risks"), IntentLabel::Hybrid);
}

#[test]
fn unrecognized_query_defaults_to_document() {
    let classifier = IntentClassifier::default();
    assert_eq!(classifier.classify(""), IntentLabel::Document);
    assert_eq!(classifier.classify("tell me something interesting"), IntentLabel::Document);
}

#[test]
fn matching_is_case_insensitive() {
    let classifier = IntentClassifier::default();
    assert_eq!(classifier.classify("PROFITABILITY outlook"), IntentLabel::Analytics);
    assert_eq!(classifier.classify("What does the EBA report say?"), IntentLabel::Document);
}

#[test]
fn signal_lists_are_a_swappable_policy() {
    let classifier = IntentClassifier::with_signals(
        vec!["headcount".to_string()],
        vec!["handbook".to_string()],
    );
    assert_eq!(classifier.classify("headcount by branch"), IntentLabel::Analytics);
    assert_eq!(classifier.classify("what does the handbook require"), IntentLabel::Document);
    // The default vocabulary no longer applies once replaced.
    assert_eq!(classifier.classify("profitability of banks"), IntentLabel::Document);
}
