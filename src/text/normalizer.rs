use once_cell::sync::Lazy;
use regex::Regex;

// `[^>]*` spans newlines so a tag broken across lines is removed in one pass.
static NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n|<[^>]*>|\t|\r").expect("static noise pattern is valid"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static whitespace pattern is valid"));

pub fn normalize(text: &str) -> String {
    let without_noise = NOISE_RE.replace_all(text, " ");
    let collapsed = WHITESPACE_RE.replace_all(&without_noise, " ");
    collapsed.trim().to_lowercase()
}
