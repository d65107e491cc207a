//! Interactive query session over a loaded index
//!
//! The session reads one query per line, evaluates it to completion and prints
//! the matching documents before reading the next line. Query errors are
//! reported and the loop carries on; only end of input ends the session.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::index::{read_index_file, DocumentSet, ReverseIndex};
use crate::query::{compile, complete, LexError, QueryEvaluator};
use crate::Result;

/// Prompt printed before each query
pub const PROMPT: &str = "> ";

/// Result of running one query line
#[derive(Debug)]
pub struct QueryOutcome {
    pub lex_errors: Vec<LexError>,
    /// Matching documents, or the parse error that left the query unanswered
    pub result: Result<DocumentSet>,
}

impl QueryOutcome {
    pub fn documents(&self) -> Option<&DocumentSet> {
        self.result.as_ref().ok()
    }
}

/// Query session holding an immutable index snapshot
#[derive(Debug)]
pub struct QuerySession {
    index: ReverseIndex,
}

impl QuerySession {
    pub fn new(index: ReverseIndex) -> Self {
        Self { index }
    }

    /// Load the index file and open a session over it
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(read_index_file(path)?))
    }

    pub fn index(&self) -> &ReverseIndex {
        &self.index
    }

    /// Lex, parse and evaluate one query string
    pub fn execute(&self, input: &str) -> QueryOutcome {
        let compiled = compile(input);
        let result = compiled.query.map(|query| {
            debug!("Evaluating {}", query);
            QueryEvaluator::new(&self.index).evaluate(&query)
        });

        if let Err(e) = &result {
            debug!("Query {:?} failed: {}", input, e);
        }

        QueryOutcome {
            lex_errors: compiled.lex_errors,
            result,
        }
    }

    /// Completion candidates for a partial word
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        complete(prefix, &self.index)
    }

    /// Read queries from `input` until it ends, writing answers to `output`
    ///
    /// Blank lines are skipped. Query errors are written to `output` and never
    /// end the loop; only I/O failures do.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        let mut queries = 0usize;

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let query = line.trim_end_matches(['\n', '\r']);
            if query.trim().is_empty() {
                continue;
            }

            let outcome = self.execute(query);
            for error in &outcome.lex_errors {
                writeln!(output, "{}", error)?;
            }
            match &outcome.result {
                Ok(documents) => writeln!(output, "{}", format_documents(documents))?,
                Err(e) => writeln!(output, "{}", e)?,
            }
            queries += 1;
        }

        info!("Session ended after {} queries", queries);
        Ok(())
    }
}

/// Render a document set as `{a.txt, b.txt}`
pub fn format_documents(documents: &DocumentSet) -> String {
    let joined: Vec<&str> = documents.iter().map(String::as_str).collect();
    format!("{{{}}}", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuerySession {
        QuerySession::new(ReverseIndex::from_postings(vec![
            ("dog".to_string(), vec!["a.txt"]),
            ("cat".to_string(), vec!["a.txt", "b.txt"]),
            ("bird".to_string(), vec!["b.txt"]),
        ]))
    }

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        session().run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_execute() {
        let session = session();
        let outcome = session.execute("cat AND NOT dog");
        assert!(outcome.lex_errors.is_empty());
        let docs: Vec<&String> = outcome.documents().unwrap().iter().collect();
        assert_eq!(docs, vec!["b.txt"]);
    }

    #[test]
    fn test_execute_parse_error() {
        let outcome = session().execute("NOT dog");
        assert!(outcome.documents().is_none());
        assert!(outcome.result.unwrap_err().is_query_local());
    }

    #[test]
    fn test_execute_reports_lex_errors_and_continues() {
        let outcome = session().execute("cat AND $dog");
        assert_eq!(outcome.lex_errors.len(), 1);
        assert_eq!(outcome.lex_errors[0].character, '$');
        assert_eq!(outcome.documents().unwrap().len(), 1);
    }

    #[test]
    fn test_format_documents() {
        let docs: DocumentSet = ["b.txt", "a.txt"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_documents(&docs), "{a.txt, b.txt}");
        assert_eq!(format_documents(&DocumentSet::new()), "{}");
    }

    #[test]
    fn test_run_loop() {
        let output = run_script("cat OR bird\nfish AND cat\n");
        assert_eq!(output, "> {a.txt, b.txt}\n> {}\n> \n");
    }

    #[test]
    fn test_run_survives_errors() {
        let output = run_script("NOT dog\n\ncat AND dog\n");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("> Query parse error"));
        assert_eq!(lines[1], "> > {a.txt}");
    }

    #[test]
    fn test_run_without_trailing_newline() {
        let output = run_script("dog");
        assert_eq!(output, "> {a.txt}\n> \n");
    }

    #[test]
    fn test_oversized_queries_rejected_and_session_continues() {
        let deep = format!("{}cat{}", "(".repeat(200_000), ")".repeat(200_000));
        let long = vec!["cat"; 200_000].join(" OR ");
        let session = session();

        for query in [&deep, &long] {
            let outcome = session.execute(query);
            assert!(outcome.lex_errors.is_empty());
            assert!(outcome.result.unwrap_err().is_query_local());
        }

        let script = format!("{}\n{}\ncat AND dog\n", deep, long);
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("> Query parse error"));
        assert!(lines[1].starts_with("> Query parse error"));
        assert_eq!(lines[2], "> {a.txt}");
    }

    #[test]
    fn test_complete() {
        let candidates = session().complete("c");
        assert_eq!(candidates, vec!["cat"]);
    }
}
