use crate::complete::Logger;
use crate::error::CompleteError;
use crate::options::{DanglingKeyPolicy, Options};
use crate::scan::{Container, Expect, ScanState};

/// Resolve whatever the scan left pending, then unwind the container stack.
/// Runs once, after the fragment is exhausted.
pub(crate) fn close(
    mut state: ScanState,
    end: usize,
    opts: &Options,
    logger: &mut Logger,
) -> Result<String, CompleteError> {
    if !state.token.is_empty() {
        let was_key = state.expect == Expect::Key;
        let open_key_string = was_key && state.in_string && state.in_key;
        state.flush_token(end, logger);
        if was_key {
            // A completed trailing token in key position is a member with no
            // value yet; every object member needs one.
            state.out.push_str(": null");
            if open_key_string {
                logger.log(end, "closed partial key and inserted null value");
            } else {
                logger.log(end, "inserted null value for dangling key");
            }
        }
    } else if state.expect == Expect::Value {
        state.out.push_str("null");
        logger.log(end, "inserted null for dangling value");
    } else if state.out.ends_with(',') {
        // A dangling separator with nothing after it. Canonical policy is to
        // elide; the empty-key alternative only applies inside an object.
        match (state.stack.last(), opts.dangling_key_policy) {
            (Some(Container::Object), DanglingKeyPolicy::EmptyKey) => {
                state.out.push_str("\"\": null");
                logger.log(end, "synthesized empty key for dangling separator");
            }
            _ => {
                state.out.pop();
                logger.log(end, "elided trailing comma");
            }
        }
    }

    while let Some(kind) = state.stack.pop() {
        let closer = kind.closer();
        state.out.push(closer);
        match kind {
            Container::Object => logger.log(end, "inserted missing '}'"),
            Container::Array => logger.log(end, "inserted missing ']'"),
        }
    }

    if state.out.is_empty() {
        state.out.push_str("null");
    }

    #[cfg(feature = "serde")]
    if opts.validate_output
        && let Err(e) = serde_json::from_str::<serde_json::Value>(&state.out)
    {
        return Err(CompleteError::validation(state.out, &e));
    }
    #[cfg(not(feature = "serde"))]
    let _ = opts.validate_output;

    Ok(state.out)
}
