use crate::turbo_stream::escape_html;
use crate::{Result as WsErrorResult, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use serde_json::Value;
use turbo_core::BroadcastContext;

const TEMPLATE_EXTENSION: &str = "html";

/// Turns a template identifier plus context into an HTML fragment
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &BroadcastContext) -> WsErrorResult<String>;
}

/// In-memory set of templates keyed by identifier (`"blog/comment.html"`).
///
/// Placeholders are written `{{ path }}` where `path` is a dotted lookup
/// into the context (`{{ comment.author }}`, `{{ object.tags.0 }}`).
/// Substituted values are HTML-escaped; placeholders that resolve to
/// nothing render as an empty string.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, String>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, id: impl Into<String>, source: impl Into<String>) -> Self {
        self.register(id, source);
        self
    }

    /// Register or replace a template
    pub fn register(&mut self, id: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(id.into(), source.into());
    }

    /// Load every `*.html` file below `dir`, keyed by its relative path
    /// with `/` separators.
    pub fn load_dir(dir: &Path) -> WsErrorResult<Self> {
        let mut registry = Self::new();
        registry.extend_from_dir(dir)?;
        Ok(registry)
    }

    /// Load `dir` on top of the current templates, replacing same-named entries
    pub fn extend_from_dir(&mut self, dir: &Path) -> WsErrorResult<usize> {
        let mut files = Vec::new();
        collect_templates(dir, &mut files)?;

        for path in &files {
            let source = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
            let id = template_id(dir, path);
            log::debug!("Loaded template {} from {}", id, path.display());
            self.register(id, source);
        }

        Ok(files.len())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateRenderer for TemplateRegistry {
    fn render(&self, template: &str, context: &BroadcastContext) -> WsErrorResult<String> {
        let source = self
            .templates
            .get(template)
            .ok_or_else(|| WsError::template_not_found(template))?;

        Ok(substitute(source, context))
    }
}

fn substitute(source: &str, context: &BroadcastContext) -> String {
    let mut output = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            // Unterminated placeholder is emitted verbatim
            output.push_str(&rest[start..]);
            return output;
        };

        let path = after_open[..end].trim();
        if let Some(value) = lookup(context, path) {
            output.push_str(&escape_html(&display_value(value)));
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}

fn lookup<'a>(context: &'a BroadcastContext, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = context.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn collect_templates(dir: &Path, files: &mut Vec<PathBuf>) -> WsErrorResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_error(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| io_error(dir, e))?.path();
        if path.is_dir() {
            collect_templates(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION) {
            files.push(path);
        }
    }

    files.sort();
    Ok(())
}

fn template_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[track_caller]
fn io_error(path: &Path, source: std::io::Error) -> WsError {
    WsError::TemplateIo {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
