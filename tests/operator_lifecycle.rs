// End-to-end tests for the topic-modeling operator lifecycle:
// open → accept× → input_exhausted → has_next/next → close.

use kiln::operator::row::Row;
use kiln::operator::topic_model::TopicModelOperator;
use kiln::operator::traits::Operator;

fn framework_args(num_topics: Option<&str>) -> Vec<String> {
    let mut args = vec!["reserved".to_string()];
    if let Some(n) = num_topics {
        args.push(n.to_string());
    }
    args
}

fn run(rows: &[&str], num_topics: Option<&str>) -> Vec<String> {
    let mut op = TopicModelOperator::new();
    op.open(&framework_args(num_topics)).unwrap();
    for &row in rows {
        op.accept(Row::single(row), 0).unwrap();
    }
    op.input_exhausted().unwrap();
    let mut outputs = Vec::new();
    while op.has_next() {
        outputs.push(op.next().unwrap().output);
    }
    op.close().unwrap();
    outputs
}

/// Pull the quoted terms out of a `weight*"term" + ...` topic string.
fn quoted_terms(topic: &str) -> Vec<String> {
    topic
        .split(" + ")
        .map(|expr| {
            let (_, term) = expr.split_once('*').expect("weight*term expression");
            term.trim_matches('"').to_string()
        })
        .collect()
}

#[test]
fn end_to_end_two_topics() {
    let outputs = run(&["cat dog", "dog bird", "cat bird fish"], Some("2"));
    assert_eq!(outputs.len(), 2);

    let vocab = ["cat", "dog", "bird", "fish"];
    for topic in &outputs {
        assert!(!topic.is_empty());
        let terms = quoted_terms(topic);
        assert!(!terms.is_empty());
        for term in terms {
            assert!(vocab.contains(&term.as_str()), "unexpected term {term:?}");
        }
    }
}

#[test]
fn produces_exactly_k_output_rows() {
    for k in 1usize..=4 {
        let arg = k.to_string();
        let outputs = run(
            &["cat dog", "dog bird fish", "cat bird", "fish dog cat"],
            Some(arg.as_str()),
        );
        assert_eq!(outputs.len(), k, "expected {k} topics");
    }
}

#[test]
fn defaults_to_five_topics_without_argument() {
    let outputs = run(
        &["cat dog bird", "dog bird fish", "cat fish", "bird cat dog", "fish dog"],
        None,
    );
    assert_eq!(outputs.len(), 5);
}

#[test]
fn deterministic_across_runs() {
    let rows = ["cat dog", "dog bird", "cat bird fish"];
    let a = run(&rows, Some("2"));
    let b = run(&rows, Some("2"));
    assert_eq!(a, b, "fixed seed should make runs identical");
}

#[test]
fn malformed_topic_count_fails_at_open() {
    let mut op = TopicModelOperator::new();
    assert!(op.open(&framework_args(Some("abc"))).is_err());
}

#[test]
fn empty_input_fails_at_exhaustion() {
    let mut op = TopicModelOperator::new();
    op.open(&framework_args(Some("2"))).unwrap();
    let err = op.input_exhausted().unwrap_err();
    assert!(err.to_string().contains("empty collection"));
}

#[test]
fn whitespace_only_rows_fail_at_exhaustion() {
    // Rows are accepted (they tokenize to empty documents) but the
    // resulting collection has no terms to train on.
    let mut op = TopicModelOperator::new();
    op.open(&framework_args(Some("2"))).unwrap();
    op.accept(Row::single("   \t  "), 0).unwrap();
    assert!(op.input_exhausted().is_err());
}

#[test]
fn drained_operator_has_no_more_rows() {
    let mut op = TopicModelOperator::new();
    op.open(&framework_args(Some("2"))).unwrap();
    op.accept(Row::single("cat dog"), 0).unwrap();
    op.accept(Row::single("dog bird"), 0).unwrap();
    op.input_exhausted().unwrap();
    while op.has_next() {
        op.next();
    }
    assert!(op.next().is_none());
    op.close().unwrap();
}
