//! Listen addresses accept the Go-style `:port` shorthand next to regular
//! socket addresses.

use serde::{
    Deserialize,
    Deserializer,
};
use std::net::{
    AddrParseError,
    Ipv4Addr,
    SocketAddr,
};

pub fn parse(s: &str) -> Result<SocketAddr, AddrParseError> {
    match s.strip_prefix(':') {
        Some(port) => format!("{}:{port}", Ipv4Addr::UNSPECIFIED).parse(),
        None => s.parse(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<SocketAddr, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_only() {
        assert_eq!(parse(":2112").unwrap(), SocketAddr::from(([0, 0, 0, 0], 2112)));
    }

    #[test]
    fn full_addresses() {
        assert_eq!(parse("127.0.0.1:9000").unwrap(), SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(parse("[::1]:9000").unwrap().port(), 9000);
        assert!(parse("localhost").is_err());
        assert!(parse(":http").is_err());
    }
}
