use crate::templates::{builtin, load};

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use turbo_core::BroadcastContext;
use turbo_ws::TemplateRenderer;

fn comment_context() -> BroadcastContext {
    let mut context = BroadcastContext::new();
    context.insert("comment", json!({"id": 4, "author": "ada", "body": "hi"}));
    context
}

#[test]
fn given_builtin_registry_then_blog_templates_present() {
    let registry = builtin();

    assert!(registry.contains("blog/post.html"));
    assert!(registry.contains("blog/comment.html"));
}

#[test]
fn given_builtin_comment_template_when_rendered_then_uses_comment_dom_id() {
    let html = builtin()
        .render("blog/comment.html", &comment_context())
        .unwrap();

    assert!(html.starts_with("<li id=\"comment_4\" class=\"comment\">"));
    assert!(html.contains("ada"));
}

#[test]
fn given_missing_directory_when_loaded_then_builtin_only() {
    let dir = TempDir::new().unwrap();

    let registry = load(&dir.path().join("templates")).unwrap();

    assert_eq!(registry.len(), 2);
}

#[test]
fn given_override_on_disk_when_loaded_then_disk_template_wins() {
    // Given
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("blog")).unwrap();
    fs::write(
        dir.path().join("blog/comment.html"),
        "<p>{{ comment.author }}</p>",
    )
    .unwrap();

    // When
    let registry = load(dir.path()).unwrap();

    // Then
    assert_eq!(
        registry
            .render("blog/comment.html", &comment_context())
            .unwrap(),
        "<p>ada</p>"
    );
    assert!(registry.contains("blog/post.html"));
}
