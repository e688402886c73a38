#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum DanglingKeyPolicy {
    /// Drop a dangling member separator: `{"a":1,` completes to `{"a":1}`.
    Elide,
    /// Synthesize an empty-string member instead: `{"a":1,"": null}`.
    EmptyKey,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Parse the assembled output with serde_json before returning it.
    /// On parse failure the completer reports a typed `Validation` error
    /// instead of handing back broken text. Requires the `serde` feature;
    /// without it the flag is inert.
    pub validate_output: bool,
    /// Record a completion log describing each repair performed. Use
    /// `complete_to_string_with_log` to retrieve the entries.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many characters are captured on both sides of the
    /// position.
    pub log_context_window: usize,
    /// What to do with an object left dangling right after a `,` with no
    /// following key text. The default elides the separator; the
    /// alternative pads with an empty-string key.
    pub dangling_key_policy: DanglingKeyPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            validate_output: true,
            logging: false,
            log_context_window: 10,
            dangling_key_policy: DanglingKeyPolicy::Elide,
        }
    }
}
