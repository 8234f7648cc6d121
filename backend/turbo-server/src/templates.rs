use crate::error::Result as ServerErrorResult;

use std::path::Path;

use turbo_ws::TemplateRegistry;

const POST_TEMPLATE: &str = include_str!("../templates/blog/post.html");
const COMMENT_TEMPLATE: &str = include_str!("../templates/blog/comment.html");

/// Templates compiled into the binary for the demo blog models
pub fn builtin() -> TemplateRegistry {
    TemplateRegistry::new()
        .with_template("blog/post.html", POST_TEMPLATE)
        .with_template("blog/comment.html", COMMENT_TEMPLATE)
}

/// Built-in templates overlaid with any `*.html` files found under `dir`
pub fn load(dir: &Path) -> ServerErrorResult<TemplateRegistry> {
    let mut registry = builtin();

    if dir.is_dir() {
        let loaded = registry.extend_from_dir(dir)?;
        log::info!("Loaded {} templates from {}", loaded, dir.display());
    } else {
        log::info!(
            "Template directory {} not found, using built-in templates",
            dir.display()
        );
    }

    Ok(registry)
}
