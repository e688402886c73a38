mod classify;
pub mod cli;
mod close;
mod complete;
pub mod error;
pub mod options;
mod scan;
pub mod stream;
mod token;

pub use complete::CompletionLogEntry;
pub use error::{CompleteError, CompleteErrorKind};
pub use options::{DanglingKeyPolicy, Options};
pub use stream::StreamCompleter;

/// Complete a truncated JSON fragment into the best-effort valid JSON text
/// it was converging toward: unterminated strings are closed, dangling
/// values become `null`, trailing separators are elided and every open
/// container is closed in nesting order. An empty fragment completes to the
/// literal `null`.
pub fn complete_to_string(fragment: &str, opts: &Options) -> Result<String, CompleteError> {
    complete::complete_to_string(fragment, opts)
}

use std::io::Write;

/// Complete a truncated JSON fragment and write the result into an
/// `io::Write`. The output is assembled in memory first; this only spares
/// the caller the final copy.
pub fn complete_to_writer<W: Write>(
    fragment: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), CompleteError> {
    let s = complete_to_string(fragment, opts)?;
    writer.write_all(s.as_bytes()).map_err(CompleteError::write)
}

/// Convenience: feed a sequence of UTF-8 chunks through a
/// [`StreamCompleter`] and return the completion of the accumulated
/// fragment.
pub fn complete_chunks_to_string<'a, I>(chunks: I, opts: &Options) -> Result<String, CompleteError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut c = StreamCompleter::new(opts.clone());
    let mut out = String::new();
    for chunk in chunks {
        out = c.push(chunk)?;
    }
    if out.is_empty() {
        out = c.flush()?;
    }
    Ok(out)
}

#[cfg(feature = "serde")]
/// Complete and then parse into `serde_json::Value`.
pub fn complete_to_value(
    fragment: &str,
    opts: &Options,
) -> Result<serde_json::Value, CompleteError> {
    let s = complete_to_string(fragment, opts)?;
    let v = serde_json::from_str(&s).map_err(|e| CompleteError::validation(s, &e))?;
    Ok(v)
}

/// Complete a truncated JSON fragment and return both the result and a log
/// of the repairs that were performed.
pub fn complete_to_string_with_log(
    fragment: &str,
    opts: &Options,
) -> Result<(String, Vec<CompletionLogEntry>), CompleteError> {
    complete::complete_to_string_with_log(fragment, opts)
}

#[cfg(test)]
mod tests;
