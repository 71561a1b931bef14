/// Splits rendered chat markup into messages under a platform's character
/// limit, optionally without breaking fenced code blocks
pub struct MessageSplitter {
    max_chars: usize,
    format_aware: bool,
}

impl MessageSplitter {
    pub fn new(max_chars: usize, format_aware: bool) -> Self {
        Self {
            max_chars: max_chars.max(1),
            format_aware,
        }
    }

    /// Split text into chunks of at most `max_chars` characters
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < text.len() {
            // Byte offset of the first character past the limit
            let Some(max_end) = text[start..]
                .char_indices()
                .nth(self.max_chars)
                .map(|(i, _)| start + i)
            else {
                chunks.push(&text[start..]);
                break;
            };

            let split_at = self.find_safe_split_point(text, start, max_end);
            chunks.push(&text[start..split_at]);
            start = split_at;
        }

        if chunks.is_empty() {
            chunks.push(text);
        }
        chunks
    }

    /// Find a safe point to split the text. Every candidate lies on a char
    /// boundary and strictly after `start`.
    fn find_safe_split_point(&self, text: &str, start: usize, max_end: usize) -> usize {
        let window = &text[start..max_end];

        if self.format_aware {
            if let Some(pos) = self.find_code_block_boundary(text, start, max_end) {
                return pos;
            }
        }

        let boundaries: [(&str, usize); 4] = [("\n\n", 2), ("\n", 1), (". ", 2), (" ", 1)];
        for (pattern, skip) in boundaries {
            if let Some(pos) = window.rfind(pattern) {
                let candidate = start + pos + skip;
                if !self.format_aware || !is_inside_code_block(text, candidate) {
                    return candidate;
                }
            }
        }

        // Last resort: hard split at the limit
        max_end
    }

    /// Find a split point that keeps a code fence whole
    fn find_code_block_boundary(&self, text: &str, start: usize, max_end: usize) -> Option<usize> {
        let window = &text[start..max_end];

        if is_inside_code_block(text, start) {
            let pos = window.find("```")?;
            let end_pos = start + pos + 3;
            if end_pos < max_end && text.as_bytes().get(end_pos) == Some(&b'\n') {
                return Some(end_pos + 1);
            }
            return Some(end_pos);
        }

        // Outside a block: split before the next fence opens
        let pos = window.find("```")?;
        if pos == 0 {
            return None;
        }
        window[..pos].rfind('\n').map(|nl| start + nl + 1)
    }
}

/// An odd number of fences before `position` means it is inside a block
fn is_inside_code_block(text: &str, position: usize) -> bool {
    text[..position].matches("```").count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_split_needed() {
        let splitter = MessageSplitter::new(100, false);
        assert_eq!(splitter.split("Short text"), vec!["Short text"]);
        assert_eq!(splitter.split(""), vec![""]);
    }

    #[test]
    fn test_split_at_newline() {
        let splitter = MessageSplitter::new(20, false);
        let chunks = splitter.split("First line\nSecond line here\nThird");
        assert_eq!(chunks, vec!["First line\n", "Second line here\n", "Third"]);
    }

    #[test]
    fn test_split_at_paragraph() {
        let splitter = MessageSplitter::new(30, false);
        let chunks = splitter.split("First para\n\nSecond para here is longer");
        assert_eq!(chunks[0], "First para\n\n");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let splitter = MessageSplitter::new(5, false);
        let text = "ééééé";
        assert_eq!(splitter.split(text), vec![text]);

        let chunks = splitter.split("éééééééééé");
        assert_eq!(chunks, vec!["ééééé", "ééééé"]);
    }

    #[test]
    fn test_chunks_rejoin_to_input() {
        let splitter = MessageSplitter::new(7, true);
        let text = "ab cd ```x y``` ef. gh ij\n\nklm ñop qrs";
        let chunks = splitter.split(text);
        assert_eq!(chunks.concat(), text);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 7, "chunk too long: {chunk:?}");
        }
    }

    #[test]
    fn test_code_block_awareness() {
        let splitter = MessageSplitter::new(35, true);
        let text = "Before\n```\ncode line 1\ncode line 2\n```\nAfter";
        let chunks = splitter.split(text);

        for chunk in &chunks {
            let count = chunk.matches("```").count();
            assert!(
                count == 0 || count == 2,
                "Chunk has unbalanced fences: {}",
                chunk
            );
        }
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_is_inside_code_block() {
        let text = "before ```code``` after ```more";
        assert!(!is_inside_code_block(text, 0));
        assert!(is_inside_code_block(text, 10));
        assert!(!is_inside_code_block(text, 20));
        assert!(is_inside_code_block(text, 30));
    }
}
