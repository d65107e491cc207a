//! Set-algebra evaluation of a query against an index snapshot

use roaring::RoaringBitmap;

use super::ast::Query;
use crate::index::{DocumentSet, ReverseIndex};

/// Evaluates queries against a read-only index
///
/// Unknown terms, including terms pruned from the vocabulary, match nothing.
#[derive(Clone, Copy, Debug)]
pub struct QueryEvaluator<'a> {
    index: &'a ReverseIndex,
}

impl<'a> QueryEvaluator<'a> {
    pub fn new(index: &'a ReverseIndex) -> Self {
        Self { index }
    }

    /// Execute the query and return matching document numbers as a bitmap
    pub fn execute(&self, query: &Query) -> RoaringBitmap {
        match query {
            Query::Literal(term) => self.index.postings(term).cloned().unwrap_or_default(),
            Query::And(left, right) => self.execute(left) & self.execute(right),
            Query::Or(left, right) => self.execute(left) | self.execute(right),
            Query::AndNot(left, right) => self.execute(left) - self.execute(right),
        }
    }

    /// Execute the query and return the matching document ids
    pub fn evaluate(&self, query: &Query) -> DocumentSet {
        self.index.resolve(&self.execute(query))
    }
}

/// Evaluate a query against an index
pub fn evaluate(query: &Query, index: &ReverseIndex) -> DocumentSet {
    QueryEvaluator::new(index).evaluate(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::lexer::Lexer;
    use crate::query::parser::parse;

    fn example_index() -> ReverseIndex {
        ReverseIndex::from_postings(vec![
            ("dog".to_string(), vec!["a.txt"]),
            ("cat".to_string(), vec!["a.txt", "b.txt"]),
            ("bird".to_string(), vec!["b.txt"]),
        ])
    }

    fn run(input: &str, index: &ReverseIndex) -> Vec<String> {
        let query = parse(&Lexer::tokenize(input).tokens).unwrap();
        evaluate(&query, index).into_iter().collect()
    }

    fn lit(term: &str) -> Query {
        Query::literal(term)
    }

    #[test]
    fn test_example_queries() {
        let index = example_index();
        assert_eq!(run("cat AND dog", &index), vec!["a.txt"]);
        assert_eq!(run("cat OR bird", &index), vec!["a.txt", "b.txt"]);
        assert_eq!(run("cat AND NOT dog", &index), vec!["b.txt"]);
    }

    #[test]
    fn test_unknown_term_is_empty() {
        let index = example_index();
        assert!(run("fish", &index).is_empty());
        assert!(run("fish AND cat", &index).is_empty());
        assert_eq!(run("fish OR bird", &index), vec!["b.txt"]);
        assert_eq!(run("bird AND NOT fish", &index), vec!["b.txt"]);
    }

    #[test]
    fn test_literal_is_exact_match() {
        let index = example_index();
        assert!(run("Cat", &index).is_empty());
        assert!(run("ca", &index).is_empty());
    }

    #[test]
    fn test_and_or_commutative() {
        let index = example_index();
        let evaluator = QueryEvaluator::new(&index);
        for (l, r) in [("cat", "dog"), ("dog", "bird"), ("cat", "fish")] {
            assert_eq!(
                evaluator.evaluate(&Query::and(lit(l), lit(r))),
                evaluator.evaluate(&Query::and(lit(r), lit(l)))
            );
            assert_eq!(
                evaluator.evaluate(&Query::or(lit(l), lit(r))),
                evaluator.evaluate(&Query::or(lit(r), lit(l)))
            );
        }
    }

    #[test]
    fn test_and_or_associative() {
        let index = example_index();
        let evaluator = QueryEvaluator::new(&index);
        let (a, b, c) = (lit("cat"), lit("dog"), lit("bird"));

        assert_eq!(
            evaluator.evaluate(&Query::and(Query::and(a.clone(), b.clone()), c.clone())),
            evaluator.evaluate(&Query::and(a.clone(), Query::and(b.clone(), c.clone())))
        );
        assert_eq!(
            evaluator.evaluate(&Query::or(Query::or(a.clone(), b.clone()), c.clone())),
            evaluator.evaluate(&Query::or(a, Query::or(b, c)))
        );
    }

    #[test]
    fn test_and_not_not_commutative() {
        let index = example_index();
        assert_eq!(run("cat AND NOT dog", &index), vec!["b.txt"]);
        assert!(run("dog AND NOT cat", &index).is_empty());
    }

    #[test]
    fn test_empty_set_identities() {
        let index = example_index();
        let cat = run("cat", &index);

        assert!(run("cat AND fish", &index).is_empty());
        assert_eq!(run("cat OR fish", &index), cat);
        assert_eq!(run("cat AND NOT fish", &index), cat);
        assert!(run("fish AND NOT cat", &index).is_empty());
        assert!(run("cat AND NOT cat", &index).is_empty());
    }

    #[test]
    fn test_grouping() {
        let index = example_index();
        assert_eq!(run("cat AND NOT (dog OR bird)", &index), Vec::<String>::new());
        assert_eq!(run("(cat AND NOT dog) OR dog", &index), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_empty_index() {
        let index = ReverseIndex::new();
        assert!(run("cat OR dog", &index).is_empty());
    }
}
