//! Placeholder substitution engine.
//! Replaces `{{TOKEN}}` markers with values from the generation context and
//! fails loudly when a token has no mapping, rather than shipping it in the
//! generated output.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::path::PathBuf;

/// Trait for placeholder rendering engines.
pub trait Renderer {
    /// Renders a template string with the given token context.
    ///
    /// # Arguments
    /// * `content` - Text to render
    /// * `context` - Token name to replacement value mapping
    ///
    /// # Returns
    /// * `Result<String>` - Content with every token occurrence replaced
    fn render(&self, content: &str, context: &IndexMap<String, String>) -> Result<String>;
}

/// Regex-based engine for `{{TOKEN}}` markers.
///
/// Token names are upper snake case, so ordinary `{{ ... }}` brace pairs in
/// Kotlin or Gradle sources never match.
pub struct TokenRenderer {
    pattern: Regex,
}

impl TokenRenderer {
    pub fn new() -> Self {
        // Compile-time constant pattern, cannot fail at runtime.
        let pattern = Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").unwrap();
        Self { pattern }
    }
}

impl Default for TokenRenderer {
    fn default() -> Self {
        TokenRenderer::new()
    }
}

impl Renderer for TokenRenderer {
    /// Replaces every `{{TOKEN}}` occurrence with its mapped value.
    ///
    /// # Errors
    /// * `Error::UnresolvedToken` if a token has no entry in the context.
    ///   The renderer does not know which file it is rendering; the caller
    ///   fills in the path.
    fn render(&self, content: &str, context: &IndexMap<String, String>) -> Result<String> {
        let mut missing: Option<String> = None;

        let rendered = self.pattern.replace_all(content, |caps: &regex::Captures| {
            let token = &caps[1];
            match context.get(token) {
                Some(value) => value.clone(),
                None => {
                    if missing.is_none() {
                        missing = Some(token.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });

        if let Some(token) = missing {
            return Err(Error::UnresolvedToken { token, path: PathBuf::new() });
        }

        Ok(rendered.into_owned())
    }
}
