use crate::{BroadcastableModel, Post, StreamAction, Target};

#[test]
fn test_new_post_is_unsaved() {
    let post = Post::new("Title".to_string(), "Body".to_string());

    assert_eq!(post.pk(), None);
    assert_eq!(post.created_at, post.updated_at);
}

#[test]
fn test_post_meta_and_policy() {
    assert_eq!(Post::META.label(), "blog.post");
    assert_eq!(Post::INSERTS_BY, StreamAction::Prepend);
    assert!(Post::BROADCAST_SELF);
    assert!(Post::broadcasts_to().is_empty());
}

#[test]
fn test_post_target_carries_pk() {
    let mut post = Post::new("Title".to_string(), "Body".to_string());
    post.id = Some(11);

    assert_eq!(post.as_target(), Target::model(Post::META, Some(11)));
}
