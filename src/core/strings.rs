use unicode_segmentation::UnicodeSegmentation;

pub fn title_case(s: &str) -> String {
    s.split_word_bounds()
        .map(|w| {
            let mut g = w.graphemes(true);
            match g.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), g.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect()
}

/// Strip a taxonomy language prefix such as `en:` from a tag.
pub fn strip_language_prefix(tag: &str) -> &str {
    tag.strip_prefix("en:").unwrap_or(tag)
}
