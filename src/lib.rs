//! Demo Key Issuer
//!
//! Hands out a pair of scoped demo API keys (ingest + executor) to a
//! requester identified by email, with:
//! - Per-email and per-IP cooldown throttling
//! - Two-step credential creation on the control plane
//! - Inline (development) or email delivery of the issued keys

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::DomainError;
use infrastructure::{create_dispatcher, DemoKeyService, HttpControlPlane, InMemoryRateLimiter};

/// Wire the services described by `config` into application state
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let control_plane = HttpControlPlane::new(config.control_plane_settings())?;

    if control_plane.base_url().is_none() || config.control_plane.admin_token.is_none() {
        tracing::warn!("Control plane URL or admin token missing; key issuance will fail");
    }

    let dispatcher = create_dispatcher(
        config.dispatch_mode(),
        config.resend_settings(),
        &config.public_control_plane_url(),
        &config.email.subject,
    )?;

    let service = DemoKeyService::new(
        Arc::new(InMemoryRateLimiter::new()),
        Arc::new(control_plane),
        dispatcher,
        config.cooldown(),
    );

    info!(
        cooldown_secs = config.cooldown().as_secs(),
        mode = %config.dispatch_mode(),
        "Demo key service ready"
    );

    Ok(AppState::new(Arc::new(service)))
}
