//! Text serialization of a reverse index
//!
//! One line per term, `term:doc1,doc2,doc3`, terms ascending and documents
//! ascending within a line. Only the first `:` of a line is significant.
//! Neither separator can be escaped, so terms containing `:` and document ids
//! containing `:` or `,` are rejected on encode instead of being written out
//! as an index that would read back differently.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info};

use super::reverse_index::ReverseIndex;
use crate::error::RindexError;
use crate::Result;

const TERM_SEPARATOR: char = ':';
const DOCUMENT_SEPARATOR: char = ',';

/// Write an index in the text format
pub fn encode<W: Write>(index: &ReverseIndex, mut writer: W) -> Result<()> {
    for (term, docs) in index.iter() {
        validate_term(term)?;
        for doc in &docs {
            validate_document(doc)?;
        }
        let docs = docs.join(DOCUMENT_SEPARATOR.to_string().as_str());
        writeln!(writer, "{}{}{}", term, TERM_SEPARATOR, docs)?;
    }
    writer.flush()?;
    Ok(())
}

/// Encode an index into a string
pub fn encode_to_string(index: &ReverseIndex) -> Result<String> {
    let mut buf = Vec::new();
    encode(index, &mut buf)?;
    String::from_utf8(buf).map_err(|e| RindexError::UnencodableEntry(e.to_string()))
}

/// Read an index in the text format
///
/// Blank lines are skipped. `term:` yields an empty posting set.
pub fn decode<R: BufRead>(reader: R) -> Result<ReverseIndex> {
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }

        let (term, docs) =
            line.split_once(TERM_SEPARATOR)
                .ok_or_else(|| RindexError::MalformedIndex {
                    line: line_no + 1,
                    reason: format!("missing '{}' separator", TERM_SEPARATOR),
                })?;
        if term.is_empty() {
            return Err(RindexError::MalformedIndex {
                line: line_no + 1,
                reason: "empty term".to_string(),
            });
        }

        let docs = docs
            .split(DOCUMENT_SEPARATOR)
            .filter(|doc| !doc.is_empty())
            .map(str::to_string)
            .collect();
        entries.push((term.to_string(), docs));
    }

    Ok(ReverseIndex::from_postings(entries))
}

/// Decode an index from a string
pub fn decode_str(data: &str) -> Result<ReverseIndex> {
    decode(data.as_bytes())
}

/// Persist an index, replacing `path` only once the whole index is written
pub fn write_index_file(index: &ReverseIndex, path: &Path) -> Result<()> {
    let tmp_path = temporary_path(path);
    let write_result = std::fs::File::create(&tmp_path)
        .map_err(RindexError::from)
        .and_then(|file| {
            let mut writer = std::io::BufWriter::new(file);
            encode(index, &mut writer)?;
            writer
                .into_inner()
                .map_err(|e| RindexError::Io(e.into_error()))?
                .sync_all()?;
            Ok(())
        });

    if let Err(e) = write_result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    std::fs::rename(&tmp_path, path)?;
    info!(
        "Wrote index with {} terms to {:?}",
        index.term_count(),
        path
    );
    Ok(())
}

/// Load an index file
pub fn read_index_file(path: &Path) -> Result<ReverseIndex> {
    let file = std::fs::File::open(path)?;
    let index = decode(BufReader::new(file))?;
    info!(
        "Loaded index with {} terms over {} documents from {:?}",
        index.term_count(),
        index.document_count(),
        path
    );
    Ok(index)
}

fn temporary_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    let tmp = path.with_file_name(name);
    debug!("Staging index at {:?}", tmp);
    tmp
}

fn validate_term(term: &str) -> Result<()> {
    if term.is_empty() {
        return Err(RindexError::UnencodableEntry("empty term".to_string()));
    }
    if term.contains(TERM_SEPARATOR) || term.contains(['\n', '\r']) {
        return Err(RindexError::UnencodableEntry(format!(
            "term {:?} contains a separator",
            term
        )));
    }
    Ok(())
}

fn validate_document(doc: &str) -> Result<()> {
    if doc.is_empty() {
        return Err(RindexError::UnencodableEntry(
            "empty document id".to_string(),
        ));
    }
    if doc.contains([TERM_SEPARATOR, DOCUMENT_SEPARATOR, '\n', '\r']) {
        return Err(RindexError::UnencodableEntry(format!(
            "document id {:?} contains a separator",
            doc
        )));
    }
    Ok(())
}
