//! Slug generation for new articles
//!
//! `<normalized-title>-<6 random base-36 chars>`. The suffix is not checked
//! against existing rows; the unique constraint catches the rare collision.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use super::ArticleTitle;

/// Length of the random suffix
pub const SUFFIX_LEN: usize = 6;

/// Base is capped so the full slug fits `VARCHAR(255)`
const MAX_BASE_LEN: usize = 255 - 1 - SUFFIX_LEN;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Anything that is neither a letter, a digit nor whitespace
static STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("invalid strip regex"));

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Generated article slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    /// Generate a fresh slug for a title using the thread-local RNG.
    pub fn generate(title: &ArticleTitle) -> Self {
        Self::generate_with(title, &mut rand::thread_rng())
    }

    /// Generate a slug with an explicit RNG.
    pub fn generate_with<R: Rng + ?Sized>(title: &ArticleTitle, rng: &mut R) -> Self {
        let mut slug = normalize(title.as_str());
        slug.push('-');
        slug.push_str(&random_suffix(rng));
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Lower-case, drop punctuation, join whitespace runs with single hyphens.
pub fn normalize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, "");
    let mut base = WHITESPACE_RE.replace_all(stripped.trim(), "-").into_owned();

    if base.chars().count() > MAX_BASE_LEN {
        base = base.chars().take(MAX_BASE_LEN).collect();
        while base.ends_with('-') {
            base.pop();
        }
    }

    if base.is_empty() {
        "untitled".to_string()
    } else {
        base
    }
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
