//! Inject use case
//!
//! Inserts rendered tags into an HTML page right before `</head>`.

use crate::error::{MetaTagsError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

/// Matches comments, script elements and closing head tags (any case,
/// optional whitespace before `>`). Comments and scripts are matched only
/// so they can be stepped over.
fn head_close_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|</head\s*>").unwrap()
    })
}

/// Insert `markup` before the first `</head>` in `html` that is not inside
/// a comment or a script. Returns `None` when there is no such tag.
pub fn inject_markup(html: &str, markup: &str) -> Option<String> {
    let close = head_close_regex()
        .find_iter(html)
        .find(|m| m.as_str()[..2].eq_ignore_ascii_case("</"))?;

    let mut output = String::with_capacity(html.len() + markup.len());
    output.push_str(&html[..close.start()]);
    output.push_str(markup);
    output.push_str(&html[close.start()..]);
    Some(output)
}

/// Service for injecting one block of markup into HTML files
pub struct InjectService {
    markup: String,
}

impl InjectService {
    pub fn new(markup: String) -> Self {
        InjectService { markup }
    }

    /// Inject into `input`, writing to `output` or back into `input`.
    /// Returns the path written.
    pub fn inject_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let html = fs::read_to_string(input)?;
        let injected = inject_markup(&html, &self.markup)
            .ok_or_else(|| MetaTagsError::HeadNotFound(input.to_path_buf()))?;

        let target = output.unwrap_or(input);
        fs::write(target, injected)?;
        info!(input = %input.display(), output = %target.display(), "Injected head markup");

        Ok(target.to_path_buf())
    }
}
