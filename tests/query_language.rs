//! Query language behaviour over an in-memory index

use rindex::index::ReverseIndex;
use rindex::query::{compile, complete, evaluate, Query};
use rindex::DocumentSet;

fn library() -> ReverseIndex {
    ReverseIndex::from_postings(vec![
        ("rust".to_string(), vec!["1.txt", "3.txt", "5.txt"]),
        ("python".to_string(), vec!["2.txt"]),
        ("programming".to_string(), vec!["1.txt", "2.txt", "3.txt", "4.txt"]),
        ("systems".to_string(), vec!["1.txt", "3.txt"]),
        ("web".to_string(), vec!["4.txt"]),
        ("cargo".to_string(), vec!["5.txt"]),
    ])
}

fn run(input: &str) -> Vec<String> {
    let compiled = compile(input);
    assert!(compiled.lex_errors.is_empty(), "lex errors in {:?}", input);
    evaluate(&compiled.query.unwrap(), &library())
        .into_iter()
        .collect()
}

#[test]
fn test_conjunction_and_disjunction() {
    assert_eq!(run("rust AND systems"), vec!["1.txt", "3.txt"]);
    assert_eq!(run("python OR web"), vec!["2.txt", "4.txt"]);
    assert_eq!(run("programming AND NOT rust"), vec!["2.txt", "4.txt"]);
}

#[test]
fn test_left_to_right_evaluation() {
    // (rust OR python) AND systems
    assert_eq!(run("rust OR python AND systems"), vec!["1.txt", "3.txt"]);
    // rust OR (python AND systems)
    assert_eq!(run("rust OR (python AND systems)"), vec!["1.txt", "3.txt", "5.txt"]);
}

#[test]
fn test_difference_is_not_symmetric() {
    assert_eq!(run("rust AND NOT programming"), vec!["5.txt"]);
    assert_eq!(run("programming AND NOT rust"), vec!["2.txt", "4.txt"]);
}

#[test]
fn test_de_morgan_over_universe() {
    let universe = "(rust OR python OR programming OR systems OR web OR cargo)";
    let lhs = run(&format!("{} AND NOT (rust OR web)", universe));
    let rhs = run(&format!(
        "({u} AND NOT rust) AND ({u} AND NOT web)",
        u = universe
    ));
    assert_eq!(lhs, rhs);
    assert_eq!(lhs, vec!["2.txt"]);
}

#[test]
fn test_absent_terms_contribute_nothing() {
    for term in ["java", "Rust", "rus", "rusty"] {
        let query = Query::literal(term);
        assert_eq!(evaluate(&query, &library()), DocumentSet::new());
    }
}

#[test]
fn test_grammar_errors_produce_no_answer() {
    for input in ["NOT rust", "rust NOT web", "rust AND", "(rust", "rust web", ""] {
        let compiled = compile(input);
        assert!(compiled.query.is_err(), "{:?} should not parse", input);
    }
}

#[test]
fn test_lex_errors_do_not_stop_parsing() {
    let compiled = compile("rust AND systems!");
    assert_eq!(compiled.lex_errors.len(), 1);
    let docs: Vec<String> = evaluate(&compiled.query.unwrap(), &library())
        .into_iter()
        .collect();
    assert_eq!(docs, vec!["1.txt", "3.txt"]);
}

#[test]
fn test_completion_candidates() {
    assert_eq!(complete("pro", &library()), vec!["programming"]);
    assert_eq!(complete("A", &library()), vec!["AND"]);
    assert!(complete("x", &library()).is_empty());
}
