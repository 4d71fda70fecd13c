//! Overlapping fixed-size segmentation of document text.

/// Window size used for corpus documents, in characters.
pub const MAX_CHARS: usize = 1000;
/// Overlap carried between consecutive windows, in characters.
pub const OVERLAP_CHARS: usize = 200;

/// Split `text` into overlapping windows of at most `max_chars` characters.
///
/// Windows are counted in characters and sliced on char boundaries, so
/// multi-byte UTF-8 never splits mid-character. Consecutive windows share
/// `overlap_chars` characters. A text shorter than `max_chars` yields one
/// window equal to the whole text; empty text yields nothing.
///
/// Invariant: the window start strictly advances on every non-final
/// iteration. Parameter combinations that would stall (`overlap_chars >=
/// max_chars`, or `max_chars == 0`) degrade to zero-overlap progression so
/// the loop always terminates.
pub fn chunk_text(text: &str, max_chars: usize, overlap_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let max_chars = max_chars.max(1);

    // Byte offset of every char boundary so windows can slice safely.
    let bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let n = bounds.len();
    let byte_at = |char_pos: usize| {
        if char_pos >= n {
            text.len()
        } else {
            bounds[char_pos]
        }
    };

    let mut chunks = Vec::new();
    let mut start = 0usize;
    loop {
        let end = (start + max_chars).min(n);
        chunks.push(text[byte_at(start)..byte_at(end)].to_string());
        if end == n {
            break;
        }
        start = if overlap_chars >= max_chars {
            // Overlap would swallow the whole window; fall back to no overlap.
            end
        } else {
            end - overlap_chars
        };
    }
    chunks
}
