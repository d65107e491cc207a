//! Abstract syntax tree for boolean queries

use std::fmt;

/// Binary operators of the query language
///
/// `AndNot` is written as the two keywords `AND NOT` but is a single
/// operator; `NOT` has no meaning on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    AndNot,
}

impl Operator {
    /// Build the node this operator produces
    pub fn apply(self, left: Query, right: Query) -> Query {
        let (left, right) = (Box::new(left), Box::new(right));
        match self {
            Operator::And => Query::And(left, right),
            Operator::Or => Query::Or(left, right),
            Operator::AndNot => Query::AndNot(left, right),
        }
    }

    /// Keyword spelling of the operator
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::AndNot => "AND NOT",
        }
    }
}

/// Parsed query, built once per query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A term, looked up at evaluation time
    Literal(String),
    /// Intersection
    And(Box<Query>, Box<Query>),
    /// Union
    Or(Box<Query>, Box<Query>),
    /// Difference, left minus right
    AndNot(Box<Query>, Box<Query>),
}

impl Query {
    pub fn literal(term: impl Into<String>) -> Self {
        Query::Literal(term.into())
    }

    pub fn and(left: Query, right: Query) -> Self {
        Operator::And.apply(left, right)
    }

    pub fn or(left: Query, right: Query) -> Self {
        Operator::Or.apply(left, right)
    }

    pub fn and_not(left: Query, right: Query) -> Self {
        Operator::AndNot.apply(left, right)
    }

    /// Get the query type name for debugging and logging
    pub fn query_type(&self) -> &'static str {
        match self {
            Query::Literal(_) => "literal",
            Query::And(..) => "and",
            Query::Or(..) => "or",
            Query::AndNot(..) => "and_not",
        }
    }

    /// Operator and operands of an internal node
    pub fn as_binary(&self) -> Option<(Operator, &Query, &Query)> {
        match self {
            Query::Literal(_) => None,
            Query::And(l, r) => Some((Operator::And, l, r)),
            Query::Or(l, r) => Some((Operator::Or, l, r)),
            Query::AndNot(l, r) => Some((Operator::AndNot, l, r)),
        }
    }

    /// Term literals from left to right
    pub fn terms(&self) -> Vec<&str> {
        let mut terms = Vec::new();
        self.collect_terms(&mut terms);
        terms
    }

    fn collect_terms<'a>(&'a self, terms: &mut Vec<&'a str>) {
        match self {
            Query::Literal(term) => terms.push(term),
            Query::And(l, r) | Query::Or(l, r) | Query::AndNot(l, r) => {
                l.collect_terms(terms);
                r.collect_terms(terms);
            }
        }
    }
}

/// Fully parenthesized form; parses back to the same tree
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Query::Literal(term) = self {
            return f.write_str(term);
        }
        match self.as_binary() {
            Some((op, left, right)) => write!(f, "({} {} {})", left, op.keyword(), right),
            None => Ok(()),
        }
    }
}
