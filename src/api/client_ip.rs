//! Client IP extraction
//!
//! First `x-forwarded-for` entry, else the transport peer address, else
//! the literal `unknown`.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

pub const UNKNOWN_CLIENT_IP: &str = "unknown";

/// Rate-limit key for the calling client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(resolve_client_ip(&parts.headers, peer)))
    }
}

pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    match (forwarded, peer) {
        (Some(ip), _) => ip.to_string(),
        (None, Some(addr)) => addr.ip().to_string(),
        (None, None) => UNKNOWN_CLIENT_IP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(forwarded_for: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_str(forwarded_for).unwrap());
        headers
    }

    fn peer() -> Option<SocketAddr> {
        Some("10.1.2.3:55000".parse().unwrap())
    }

    #[test]
    fn test_first_forwarded_entry_wins() {
        assert_eq!(
            resolve_client_ip(&headers(" 203.0.113.7 , 10.0.0.1"), peer()),
            "203.0.113.7"
        );
    }

    #[test]
    fn test_falls_back_to_peer_ip_without_port() {
        assert_eq!(resolve_client_ip(&HeaderMap::new(), peer()), "10.1.2.3");
    }

    #[test]
    fn test_empty_forwarded_header_falls_back() {
        assert_eq!(resolve_client_ip(&headers(" , 1.1.1.1"), peer()), "10.1.2.3");
    }

    #[test]
    fn test_unknown_without_any_source() {
        assert_eq!(resolve_client_ip(&HeaderMap::new(), None), UNKNOWN_CLIENT_IP);
    }
}
