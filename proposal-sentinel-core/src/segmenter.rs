// Sentence segmentation
//
// Boundary heuristic only: a sentence ends right after '.', '!' or '?' when
// whitespace follows. Abbreviations ("e.g. this") and quoted punctuation get
// split too. Excerpt matching downstream is tuned to these fragment sizes, so
// keep the behavior rough.

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into trimmed, non-empty sentences in document order.
pub fn segment(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let Some(&(next_idx, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        push_piece(&mut sentences, &text[start..idx + c.len_utf8()]);

        // Consume the whole whitespace run; the next sentence starts after it
        start = next_idx;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            start = ws_idx + ws.len_utf8();
            chars.next();
        }
    }

    push_piece(&mut sentences, &text[start..]);
    tracing::trace!(count = sentences.len(), "segmented text");
    sentences
}

fn push_piece(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

/// Whitespace-delimited token count, the word measure used by every rule.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
