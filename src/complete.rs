use crate::close::close;
use crate::error::CompleteError;
use crate::options::Options;
use crate::scan::scan;

/// One repair performed while completing a fragment. All entries are
/// informational; a repair that can be logged here never fails the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

pub(crate) struct Logger<'a> {
    enable: bool,
    window: usize,
    input: &'a str,
    pub(crate) entries: Vec<CompletionLogEntry>,
}

impl<'a> Logger<'a> {
    fn new(enable: bool, window: usize, input: &'a str) -> Self {
        Self {
            enable,
            window,
            input,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn log(&mut self, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(CompletionLogEntry {
                position,
                message,
                context: context_at(self.input, position, self.window),
            });
        }
    }
}

#[inline]
fn context_at(input: &str, pos: usize, window: usize) -> String {
    let mut p = pos.min(input.len());
    while p > 0 && !input.is_char_boundary(p) {
        p -= 1;
    }
    let start = input[..p]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(p, |(i, _)| i);
    let end = input[p..]
        .char_indices()
        .nth(window)
        .map_or(input.len(), |(i, _)| p + i);
    input[start..end].to_string()
}

pub(crate) fn complete_to_string(input: &str, opts: &Options) -> Result<String, CompleteError> {
    let mut logger = Logger::new(false, opts.log_context_window, input);
    run(input, opts, &mut logger)
}

pub(crate) fn complete_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<CompletionLogEntry>), CompleteError> {
    let mut logger = Logger::new(true, opts.log_context_window, input);
    let out = run(input, opts, &mut logger)?;
    Ok((out, logger.entries))
}

fn run(input: &str, opts: &Options, logger: &mut Logger) -> Result<String, CompleteError> {
    let state = scan(input, logger);
    close(state, input.len(), opts, logger)
}
