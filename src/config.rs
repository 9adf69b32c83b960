use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use nutype::nutype;

env_var!(SERVER_ADDRESS);
env_var!(SERVER_PORT);
env_var!(HTTP_WORKERS);
env_var!(PAYLOAD_LIMIT_BYTES);

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PAYLOAD_LIMIT: usize = 1024 * 1024;

/// Largest request body accepted, in bytes.
#[nutype(validate(greater = 0), derive(Debug, Clone, Copy, PartialEq))]
pub struct PayloadLimit(usize);

/// Number of HTTP worker threads.
#[nutype(validate(greater = 0), derive(Debug, Clone, Copy, PartialEq))]
pub struct Workers(usize);

/// Listener settings, built once at start-up and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub address:       IpAddr,
    pub port:          u16,
    /// `None` lets the server pick one worker per physical core.
    pub workers:       Option<Workers>,
    pub payload_limit: PayloadLimit,
}

impl Configuration {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup, falling
    /// back to the defaults for anything unset.
    pub fn from_lookup<F>(vars: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = env_parse!(vars, SERVER_ADDRESS, IpAddr)
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = env_parse!(vars, SERVER_PORT, u16).unwrap_or(DEFAULT_PORT);
        let workers = env_load!(vars, Workers, HTTP_WORKERS, usize);
        let payload_limit =
            match env_load!(vars, PayloadLimit, PAYLOAD_LIMIT_BYTES, usize) {
                Some(limit) => limit,
                None => PayloadLimit::try_new(DEFAULT_PAYLOAD_LIMIT)
                    .context("Default payload limit is invalid")?,
            };

        Ok(Self { address, port, workers, payload_limit })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
