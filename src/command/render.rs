//! Deferred response rendering.
//!
//! Handlers return a [`Reply`]: a handler-authored `minijinja` template plus
//! named values. The author's mention is unknown to the handler and is bound
//! by [`ResponseRenderer`] in a single render pass. User-supplied text only
//! ever travels as a value, never as template source.

use minijinja::Environment;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Template variable bound to the invoking user's mention.
pub const AUTHOR_PLACEHOLDER: &str = "author";

/// Marker an engine may place in its output to address the invoking user.
pub const MENTION_MARKER: &str = "[userID]";

const BODY_KEY: &str = "body";
const MARKER_KEY: &str = "marker";

/// Errors raised while rendering a reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The template failed to render.
    #[error("response template rendering failed: {reason}")]
    Template {
        /// Rendering failure reason.
        reason: String,
    },
}

/// A response awaiting the author mention.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    template: String,
    values: BTreeMap<String, Value>,
}

impl Reply {
    /// Creates a reply from a handler-authored template.
    #[must_use]
    pub fn template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            values: BTreeMap::new(),
        }
    }

    /// Creates a reply whose text is sent unchanged.
    #[must_use]
    pub fn verbatim(body: impl Into<String>) -> Self {
        Self::template(format!("{{{{ {BODY_KEY} }}}}")).with_value(BODY_KEY, body.into())
    }

    /// Creates a reply whose text is sent unchanged apart from each
    /// [`MENTION_MARKER`], which becomes the author mention.
    #[must_use]
    pub fn addressed(body: impl Into<String>) -> Self {
        Self::template(format!(
            "{{{{ {BODY_KEY} | replace({MARKER_KEY}, {AUTHOR_PLACEHOLDER}) }}}}"
        ))
        .with_value(BODY_KEY, body.into())
        .with_value(MARKER_KEY, MENTION_MARKER)
    }

    /// Binds a named value for the template.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Binds the author mention into replies.
#[derive(Debug)]
pub struct ResponseRenderer {
    environment: Environment<'static>,
}

impl ResponseRenderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new() -> Self {
        let mut environment = Environment::new();
        environment.set_keep_trailing_newline(true);
        Self { environment }
    }

    /// Renders a reply for the given author mention.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the template is malformed.
    pub fn render(&self, reply: &Reply, author_mention: &str) -> Result<String, RenderError> {
        let mut context = Map::new();
        for (key, value) in &reply.values {
            context.insert(key.clone(), value.clone());
        }
        context.insert(
            AUTHOR_PLACEHOLDER.to_owned(),
            Value::String(author_mention.to_owned()),
        );
        self.environment
            .render_str(&reply.template, context)
            .map_err(|error| RenderError::Template {
                reason: error.to_string(),
            })
    }
}

impl Default for ResponseRenderer {
    fn default() -> Self {
        Self::new()
    }
}
