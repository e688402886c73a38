use crate::error::CompleteError;
use crate::{Options, complete_to_string};

/// Accumulates a monotonically growing prefix and re-runs the completer on
/// the whole buffer at every push.
///
/// The completer itself keeps no state between calls, so each `push`
/// re-scans from the start of the accumulated fragment; over a whole stream
/// that costs time quadratic in the stream length. Callers needing true
/// incremental behavior would have to carry the scanner's end-of-call state
/// across calls themselves; this wrapper deliberately does not.
pub struct StreamCompleter {
    opts: Options,
    buf: String,
}

impl StreamCompleter {
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            buf: String::new(),
        }
    }

    /// Append a chunk and return the completion of everything received so
    /// far.
    pub fn push(&mut self, chunk: &str) -> Result<String, CompleteError> {
        self.buf.push_str(chunk);
        complete_to_string(&self.buf, &self.opts)
    }

    /// Complete the accumulated fragment one last time and reset the buffer.
    pub fn flush(&mut self) -> Result<String, CompleteError> {
        let out = complete_to_string(&self.buf, &self.opts)?;
        self.buf.clear();
        Ok(out)
    }

    /// The raw fragment accumulated so far.
    pub fn fragment(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
