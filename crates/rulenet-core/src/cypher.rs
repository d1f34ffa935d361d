//! Cypher text helpers: identifier quoting, script splitting, and the
//! read-only guard used before running agent-supplied queries.

use crate::error::{Result, RuleNetError};

/// Single-token clauses that write to the database or change its schema.
const WRITE_KEYWORDS: &[&str] = &[
    "CREATE", "MERGE", "DELETE", "DETACH", "SET", "REMOVE", "DROP", "FOREACH",
];

/// Two-token sequences that are refused even though each word alone is harmless.
const WRITE_PHRASES: &[(&str, &str)] = &[("LOAD", "CSV"), ("CALL", "DBMS")];

/// Quote a label, relationship type, or property key with backticks.
///
/// Embedded backticks are doubled, so any non-empty name is safe to splice
/// into a query.
pub fn quote_identifier(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(RuleNetError::InvalidIdentifier(name.to_string()));
    }
    Ok(format!("`{}`", name.replace('`', "``")))
}

/// Render a label list as `:`A`:`B``.
pub fn label_clause(labels: &[String]) -> Result<String> {
    let mut clause = String::new();
    for label in labels {
        clause.push(':');
        clause.push_str(&quote_identifier(label)?);
    }
    Ok(clause)
}

/// Split a `;`-separated script into trimmed, non-empty statements.
pub fn split_script(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uppercased word tokens of a query. Anything other than letters, digits,
/// and `_` separates tokens, so `apoc.create.node` yields `CREATE`.
fn tokens(cypher: &str) -> Vec<String> {
    cypher
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Dotted names that follow a `CALL`, e.g. `db.index.fulltext.createNodeIndex`.
fn procedure_names(cypher: &str) -> Vec<&str> {
    let words: Vec<&str> = cypher
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
        .filter(|w| !w.is_empty())
        .collect();

    words
        .windows(2)
        .filter(|pair| pair[0].eq_ignore_ascii_case("CALL"))
        .map(|pair| pair[1])
        .collect()
}

/// Uppercased camelCase / snake_case pieces of one name segment:
/// `createNodeIndex` yields `CREATE`, `NODE`, `INDEX`.
fn name_pieces(segment: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in segment.chars() {
        if c == '_' {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_uppercase());
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Whether the query contains no write or admin clause.
///
/// Clauses match on whole tokens: `OFFSET` or a property named `asset` do not
/// trip the `SET` check. Procedure names after `CALL` are also split at case
/// changes, so `db.createLabel` and `apoc.refactor.mergeNodes` are refused. A
/// keyword inside a string literal still refuses the query.
pub fn is_read_only(cypher: &str) -> bool {
    let toks = tokens(cypher);

    if toks.iter().any(|t| WRITE_KEYWORDS.contains(&t.as_str())) {
        return false;
    }

    let writes_via_phrase = toks.windows(2).any(|pair| {
        WRITE_PHRASES
            .iter()
            .any(|(a, b)| pair[0] == *a && pair[1] == *b)
    });
    if writes_via_phrase {
        return false;
    }

    !procedure_names(cypher).iter().any(|name| {
        name.split('.')
            .flat_map(name_pieces)
            .any(|piece| WRITE_KEYWORDS.contains(&piece.as_str()))
    })
}

/// Append `LIMIT {default_limit}` when the query has no LIMIT clause.
pub fn ensure_limit(cypher: &str, default_limit: u32) -> String {
    if tokens(cypher).iter().any(|t| t == "LIMIT") {
        return cypher.to_string();
    }
    let body = cypher.trim_end().trim_end_matches(';').trim_end();
    format!("{body}\nLIMIT {default_limit}")
}

/// Shorten a statement for log output.
pub fn truncate_for_log(stmt: &str, max_chars: usize) -> String {
    if stmt.chars().count() <= max_chars {
        return stmt.to_string();
    }
    let head: String = stmt.chars().take(max_chars).collect();
    format!("{head}...")
}
