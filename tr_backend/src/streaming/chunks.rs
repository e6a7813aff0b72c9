use std::num::NonZeroUsize;

/// Lazy iterator over consecutive substrings of `chunk_size` characters.
///
/// Sizes count Unicode scalar values, so a chunk never ends inside a UTF-8
/// sequence. Grapheme clusters (combining marks, ZWJ emoji) can still be split.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    chunk_size: NonZeroUsize,
}

pub fn chunks(text: &str, chunk_size: NonZeroUsize) -> Chunks<'_> {
    Chunks {
        rest: text,
        chunk_size,
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.chunk_size.get())
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            return (0, Some(0));
        }
        let size = self.chunk_size.get();
        // at most 4 bytes per char, at least 1
        (
            self.rest.len().div_ceil(4 * size).max(1),
            Some(self.rest.len().div_ceil(size)),
        )
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_even_and_remainder_split() {
        let parts: Vec<&str> = chunks("ABCDEFGHIJ", size(3)).collect();
        assert_eq!(parts, vec!["ABC", "DEF", "GHI", "J"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert_eq!(chunks("", size(5)).count(), 0);
    }

    #[test]
    fn test_chunk_size_at_least_length_gives_single_chunk() {
        let parts: Vec<&str> = chunks("hello", size(5)).collect();
        assert_eq!(parts, vec!["hello"]);
        let parts: Vec<&str> = chunks("hello", size(500)).collect();
        assert_eq!(parts, vec!["hello"]);
    }

    #[test]
    fn test_lossless_for_many_sizes() {
        let text = "Grüße, 世界! emoji 🦀🦀 and plain ascii tail";
        for n in 1..=text.len() + 1 {
            let joined: String = chunks(text, size(n)).collect();
            assert_eq!(joined, text, "chunk size {n}");
        }
    }

    #[test]
    fn test_multibyte_chars_count_as_one() {
        let parts: Vec<&str> = chunks("🦀é字x", size(2)).collect();
        assert_eq!(parts, vec!["🦀é", "字x"]);
    }
}
