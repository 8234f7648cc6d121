#![allow(unused_imports)]

pub(crate) mod fixtures;
pub(crate) mod recording_sender;
pub(crate) mod test_db;

pub use fixtures::*;
pub use recording_sender::*;
pub use test_db::*;
