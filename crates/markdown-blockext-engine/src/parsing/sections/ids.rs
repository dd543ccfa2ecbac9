use std::collections::{HashMap, HashSet};

/// Slug used when a heading has no usable characters.
pub const DEFAULT_SLUG: &str = "section";

/// Turns heading text into a URL-safe slug.
///
/// Lowercase ASCII letters and digits are kept, runs of whitespace, `-` and
/// `_` become one hyphen between words, everything else is dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// Hands out unique ids for one document.
///
/// The first use of a slug returns it as is; later uses get `-1`, `-2`, ...
/// A suffixed candidate that was already issued (a heading literally titled
/// "Intro 1", say) is skipped.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    counters: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, text: &str) -> String {
        let slug = slugify(text);

        let id = if self.counters.contains_key(&slug) || self.issued.contains(&slug) {
            self.next_free(&slug)
        } else {
            self.counters.insert(slug.clone(), 0);
            slug
        };

        self.issued.insert(id.clone());
        id
    }

    pub fn is_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    fn next_free(&mut self, slug: &str) -> String {
        let counter = self.counters.entry(slug.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{slug}-{counter}");
            if !self.issued.contains(&candidate) {
                return candidate;
            }
        }
    }
}
