use crate::{BroadcastableModel, Comment, Post, StreamAction, Target};

#[test]
fn test_comment_meta_and_policy() {
    assert_eq!(Comment::META.label(), "blog.comment");
    assert_eq!(Comment::INSERTS_BY, StreamAction::Append);
    assert_eq!(Comment::TURBO_STREAMS_TEMPLATE, None);
}

#[test]
fn test_comment_broadcasts_to_its_post() {
    let comment = Comment::new(4, "ada".to_string(), "Hi".to_string());
    let relations = Comment::broadcasts_to();

    assert_eq!(relations.len(), 1);
    assert_eq!(relations[0].name(), "post");
    assert_eq!(
        relations[0].resolve(&comment),
        Target::model(Post::META, Some(4))
    );
}
