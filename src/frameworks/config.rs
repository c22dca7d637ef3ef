use std::{env, net::IpAddr};

// Runtime/server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
// Matches the 100kb default JSON limit of common Node body parsers.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;

pub fn http_port() -> u16 {
    parse_port(env::var("PORT").ok().as_deref())
}

pub fn bind_host() -> IpAddr {
    env::var("HOST")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_BIND_HOST)
}

pub fn body_limit_bytes() -> usize {
    env::var("BODY_LIMIT_BYTES")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_BODY_LIMIT_BYTES)
}

// Falls back to the default port when the value is absent or not a valid u16.
pub fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}
