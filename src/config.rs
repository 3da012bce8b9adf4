use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str = "https://apifakedelivery.vercel.app";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

// Gateway configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
struct GatewayConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    upstream_base_url: Option<String>,
    upstream_timeout_secs: Option<u64>,
    cache_ttl_secs: Option<u64>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("ENTREGA_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse ENTREGA_BIND")?;
        let metrics_bind = std::env::var("ENTREGA_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse ENTREGA_METRICS_BIND")?;
        let upstream_base_url = std::env::var("ENTREGA_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_timeout_secs = std::env::var("ENTREGA_UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .with_context(|| "parse ENTREGA_UPSTREAM_TIMEOUT_SECS")?;
        let cache_ttl_secs = std::env::var("ENTREGA_CACHE_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_CACHE_TTL_SECS.to_string())
            .parse::<u64>()
            .with_context(|| "parse ENTREGA_CACHE_TTL_SECS")?;
        Ok(Self {
            bind_addr,
            metrics_bind,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("ENTREGA_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read ENTREGA_CONFIG: {path}"))?;
            let override_cfg: GatewayConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse gateway config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.upstream_base_url {
                config.upstream_base_url = value;
            }
            if let Some(value) = override_cfg.upstream_timeout_secs {
                config.upstream_timeout = Duration::from_secs(value);
            }
            if let Some(value) = override_cfg.cache_ttl_secs {
                config.cache_ttl = Duration::from_secs(value);
            }
        }
        Ok(config)
    }
}
