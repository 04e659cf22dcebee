use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use entail::builder::LineKind;

/// Reads and categorizes the lines of the file at `path`.
pub fn categorized_lines(path: &Path) -> std::io::Result<Vec<(LineKind, String)>> {
    let file = File::open(path)?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(categorize(&line?));
    }

    Ok(lines)
}

/// Categorizes one raw line.
///
/// A `#` starts a comment running to the end of the line; the content handed to the library is comment-free.
pub fn categorize(raw: &str) -> (LineKind, String) {
    let line = match raw.find('#') {
        Some(index) => &raw[..index],
        None => raw,
    };
    let line = line.trim();

    if line.is_empty() {
        return match raw.contains('#') {
            true => (LineKind::Comment, String::new()),
            false => (LineKind::Empty, String::new()),
        };
    }

    if let Some(facts) = line.strip_prefix('=') {
        return (LineKind::Fact, facts.trim().to_string());
    }

    if let Some(queries) = line.strip_prefix('?') {
        return (LineKind::Query, queries.trim().to_string());
    }

    if line.contains("=>") {
        return (LineKind::Rule, line.to_string());
    }

    (LineKind::Unknown, line.to_string())
}
