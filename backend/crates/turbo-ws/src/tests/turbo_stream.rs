use crate::render_stream;
use crate::turbo_stream::escape_html;

use turbo_core::StreamAction;

#[test]
fn given_append_when_rendered_then_html_wrapped_in_template() {
    let element = render_stream(StreamAction::Append, "posts", Some("<li>Hi</li>"));

    assert_eq!(
        element,
        "<turbo-stream action=\"append\" target=\"posts\"><template><li>Hi</li></template></turbo-stream>"
    );
}

#[test]
fn given_replace_when_rendered_then_action_attribute_is_replace() {
    let element = render_stream(StreamAction::Replace, "comment_7", Some("x"));

    assert!(element.starts_with("<turbo-stream action=\"replace\" target=\"comment_7\">"));
}

#[test]
fn given_remove_when_rendered_then_no_template_body() {
    let element = render_stream(StreamAction::Remove, "comment_7", Some("<li>ignored</li>"));

    assert_eq!(
        element,
        "<turbo-stream action=\"remove\" target=\"comment_7\"></turbo-stream>"
    );
}

#[test]
fn given_target_with_quotes_when_rendered_then_attribute_escaped() {
    let element = render_stream(StreamAction::Prepend, "a\"b", None);

    assert!(element.contains("target=\"a&quot;b\""));
}

#[test]
fn given_markup_when_escaped_then_special_characters_replaced() {
    assert_eq!(
        escape_html("<b>Tom & 'Jerry'</b>"),
        "&lt;b&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
    );
}
