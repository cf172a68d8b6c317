//! Reading-time estimate for post bodies

/// Average adult reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Count words in a Markdown body
///
/// Whitespace-separated tokens count when they contain at least one
/// alphanumeric character, so stray punctuation such as `-` or `---` is
/// ignored. Each CJK ideograph counts as a word of its own.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .map(|token| {
            let cjk = token.chars().filter(|c| is_cjk(*c)).count();
            let has_word = token
                .chars()
                .any(|c| c.is_alphanumeric() && !is_cjk(c));
            cjk + usize::from(has_word)
        })
        .sum()
}

/// Minutes needed to read `text`, rounded up, never less than one
pub fn minutes(text: &str, words_per_minute: u32) -> u32 {
    let wpm = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        n => n,
    };

    let words = count_words(text);
    let minutes = words.div_ceil(wpm as usize).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c) || ('\u{3400}'..='\u{4DBF}').contains(&c)
}
