use std::sync::Arc;

use once_cell::sync::OnceCell;

pub trait SentenceTokenizer: Send + Sync {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

const ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "etc.", "vs.", "approx.", "incl.", "min.", "max.", "yrs.", "mr.", "mrs.",
    "ms.", "dr.", "jr.", "sr.", "inc.", "ltd.", "co.", "no.",
];

const BULLETS: &[char] = &['•', '●', '▪', '◦', '·'];

#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationTokenizer;

impl PunctuationTokenizer {
    fn ends_with_abbreviation(text: &str) -> bool {
        let last_word = text
            .rsplit(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or("");
        let last_word = last_word.to_lowercase();
        ABBREVIATIONS.iter().any(|abbr| last_word == *abbr)
    }
}

impl SentenceTokenizer for PunctuationTokenizer {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if BULLETS.contains(&c) {
                push_trimmed(&mut sentences, &text[start..idx]);
                start = idx + c.len_utf8();
                continue;
            }

            if !matches!(c, '.' | '!' | '?') {
                continue;
            }

            // Absorb runs like "?!" or "..." and closing quotes/brackets.
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | ']') {
                    end = next_idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            if !at_boundary {
                continue;
            }

            let candidate = &text[start..end];
            if c == '.' && Self::ends_with_abbreviation(candidate) {
                continue;
            }

            push_trimmed(&mut sentences, candidate);
            start = end;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

static SHARED_TOKENIZER: OnceCell<Arc<dyn SentenceTokenizer>> = OnceCell::new();

pub fn shared_tokenizer() -> Arc<dyn SentenceTokenizer> {
    SHARED_TOKENIZER
        .get_or_init(|| {
            tracing::debug!("Initializing shared sentence tokenizer");
            Arc::new(PunctuationTokenizer)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let sentences = PunctuationTokenizer.split("We build apps. Do you code? Join us!");
        assert_eq!(sentences, vec!["We build apps.", "Do you code?", "Join us!"]);
    }

    #[test]
    fn test_keeps_decimals_and_dotted_names_together() {
        let sentences =
            PunctuationTokenizer.split("Use node.js and python 3.11 daily. Ship often.");
        assert_eq!(
            sentences,
            vec!["Use node.js and python 3.11 daily.", "Ship often."]
        );
    }

    #[test]
    fn test_abbreviations_do_not_end_sentences() {
        let sentences =
            PunctuationTokenizer.split("Cloud tools, e.g. aws or gcp, are a plus. Apply now.");
        assert_eq!(
            sentences,
            vec!["Cloud tools, e.g. aws or gcp, are a plus.", "Apply now."]
        );
    }

    #[test]
    fn test_bullets_start_new_sentences() {
        let sentences = PunctuationTokenizer.split("requirements: • python • docker");
        assert_eq!(sentences, vec!["requirements:", "python", "docker"]);
    }

    #[test]
    fn test_trailing_text_without_punctuation() {
        let sentences = PunctuationTokenizer.split("first one. and a tail");
        assert_eq!(sentences, vec!["first one.", "and a tail"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(PunctuationTokenizer.split("").is_empty());
        assert!(PunctuationTokenizer.split("   ").is_empty());
    }

    #[test]
    fn test_shared_tokenizer_is_reused() {
        let a = shared_tokenizer();
        let b = shared_tokenizer();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
