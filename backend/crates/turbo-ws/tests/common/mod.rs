// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

mod test_client;
mod test_server;

pub use test_client::StreamTestClient;
pub use test_server::{
    COMMENT_TEMPLATE, TestServerConfig, TestServerWithState, create_test_server,
    create_test_server_with_config,
};
