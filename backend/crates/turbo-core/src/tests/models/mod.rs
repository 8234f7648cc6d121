mod comment;
mod post;
