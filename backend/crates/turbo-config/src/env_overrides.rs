//! `TURBO_*` environment variables, applied after `config.toml`.
//!
//! Values that fail to parse leave the setting untouched.

use crate::Config;

use std::str::FromStr;

type Apply = fn(&mut Config, String);

pub(crate) const ENV_OVERRIDES: &[(&str, Apply)] = &[
    ("TURBO_SERVER_HOST", |c, v| c.server.host = v),
    ("TURBO_SERVER_PORT", |c, v| parse_into(&v, &mut c.server.port)),
    ("TURBO_SERVER_MAX_CONNECTIONS", |c, v| {
        parse_into(&v, &mut c.server.max_connections)
    }),
    ("TURBO_DATABASE_PATH", |c, v| c.database.path = v),
    ("TURBO_DATABASE_POOL_SIZE", |c, v| {
        parse_into(&v, &mut c.database.pool_size)
    }),
    ("TURBO_LOG_LEVEL", |c, v| parse_into(&v, &mut c.logging.level)),
    ("TURBO_LOG_COLORED", |c, v| {
        c.logging.colored = matches!(v.trim(), "1" | "true" | "yes")
    }),
    ("TURBO_LOG_FILE", |c, v| c.logging.file = Some(v)),
    ("TURBO_BROADCAST_CHANNEL_CAPACITY", |c, v| {
        parse_into(&v, &mut c.broadcast.channel_capacity)
    }),
    ("TURBO_BROADCAST_SEND_BUFFER_SIZE", |c, v| {
        parse_into(&v, &mut c.broadcast.send_buffer_size)
    }),
    ("TURBO_BROADCAST_TEMPLATE_DIR", |c, v| c.broadcast.template_dir = v),
];

fn parse_into<T: FromStr>(raw: &str, target: &mut T) {
    if let Ok(parsed) = raw.trim().parse() {
        *target = parsed;
    }
}

pub(crate) fn apply(config: &mut Config) {
    for (name, set) in ENV_OVERRIDES {
        if let Ok(value) = std::env::var(name) {
            set(config, value);
        }
    }
}
