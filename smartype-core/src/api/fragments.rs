//! Rewriting text that spans several markup fragments
//!
//! A caller holding adjacent text nodes joins them with the separator,
//! rewrites the joined string so rules can see across node boundaries, then
//! splits the result back into one piece per node.

use crate::api::{transform, Error, Options, Result};

/// Join fragments with the separator
///
/// Fails if any fragment already contains the separator, since the result
/// could not be split back unambiguously.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S], options: &Options) -> Result<String> {
    if let Some(fragment) = fragments
        .iter()
        .position(|f| f.as_ref().contains(options.separator))
    {
        tracing::warn!(fragment, "separator collides with fragment content");
        return Err(Error::SeparatorInContent { fragment });
    }

    let capacity = fragments.iter().map(|f| f.as_ref().len() + 4).sum();
    let mut joined = String::with_capacity(capacity);
    for (index, fragment) in fragments.iter().enumerate() {
        if index > 0 {
            joined.push(options.separator);
        }
        joined.push_str(fragment.as_ref());
    }
    Ok(joined)
}

/// Split rewritten text back into `expected` fragments
pub fn split_fragments(text: &str, expected: usize, options: &Options) -> Result<Vec<String>> {
    if expected == 0 {
        return if text.is_empty() {
            Ok(Vec::new())
        } else {
            Err(Error::FragmentMismatch { expected, found: 1 })
        };
    }

    let pieces: Vec<String> = text.split(options.separator).map(str::to_string).collect();
    if pieces.len() != expected {
        tracing::warn!(expected, found = pieces.len(), "fragment count changed");
        return Err(Error::FragmentMismatch {
            expected,
            found: pieces.len(),
        });
    }
    Ok(pieces)
}

/// Run the full pipeline across fragment boundaries
///
/// Piece `i` of the result is the rewritten fragment `i`.
pub fn transform_fragments<S: AsRef<str>>(
    fragments: &[S],
    options: &Options,
) -> Result<Vec<String>> {
    let joined = join_fragments(fragments, options)?;
    let rewritten = transform(&joined, options);
    split_fragments(&rewritten, fragments.len(), options)
}
