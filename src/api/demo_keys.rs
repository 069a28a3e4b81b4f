//! Demo key request endpoint

use axum::extract::State;

use super::client_ip::ClientIp;
use super::state::AppState;
use super::types::{ApiError, DemoKeyRequest, DemoKeyResponse, Json};
use crate::domain::notification::Delivery;
use crate::domain::IssuanceOutcome;

/// `POST /api/request-demo-key`
pub async fn request_demo_key(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Json(request): Json<DemoKeyRequest>,
) -> Result<Json<DemoKeyResponse>, ApiError> {
    let email = request.email.unwrap_or_default();
    let outcome = state.demo_keys.request_keys(&email, &client_ip).await;

    respond(outcome).map(Json)
}

/// Map an outcome to the caller-visible response
pub fn respond(outcome: IssuanceOutcome) -> Result<DemoKeyResponse, ApiError> {
    match outcome {
        IssuanceOutcome::Success {
            pair,
            delivery: Delivery::Inline,
        } => Ok(DemoKeyResponse::inline(pair)),
        IssuanceOutcome::Success {
            delivery: Delivery::Emailed,
            ..
        } => Ok(DemoKeyResponse::emailed()),
        IssuanceOutcome::ValidationFailed(_) => Err(ApiError::invalid_email()),
        IssuanceOutcome::RateLimited(_) => Err(ApiError::rate_limited()),
        IssuanceOutcome::IssuanceFailed(_) | IssuanceOutcome::DeliveryFailed(_) => {
            Err(ApiError::issuance_failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::RemoteError;
    use crate::domain::identity::EmailValidationError;
    use crate::domain::issuance::{CredentialPair, CredentialRole, IssuanceError};
    use crate::domain::rate_limit::LimitedBy;

    #[test]
    fn test_inline_success_includes_keys() {
        let response = respond(IssuanceOutcome::Success {
            pair: CredentialPair::new("i", "e"),
            delivery: Delivery::Inline,
        })
        .unwrap();

        assert_eq!(response.ingest.as_deref(), Some("i"));
        assert_eq!(response.executor.as_deref(), Some("e"));
    }

    #[test]
    fn test_emailed_success_omits_keys() {
        let response = respond(IssuanceOutcome::Success {
            pair: CredentialPair::new("i", "e"),
            delivery: Delivery::Emailed,
        })
        .unwrap();

        assert_eq!(response, DemoKeyResponse::emailed());
    }

    #[test]
    fn test_failures_hide_stage_and_cause() {
        let ingest = respond(IssuanceOutcome::IssuanceFailed(IssuanceError::new(
            CredentialRole::Ingest,
            RemoteError::rejected("control_plane", 401, "admin token invalid"),
        )))
        .unwrap_err();
        let executor = respond(IssuanceOutcome::IssuanceFailed(IssuanceError::new(
            CredentialRole::Executor,
            RemoteError::timeout("control_plane"),
        )))
        .unwrap_err();
        let delivery =
            respond(IssuanceOutcome::DeliveryFailed(RemoteError::timeout("email"))).unwrap_err();

        assert_eq!(ingest, ApiError::issuance_failed());
        assert_eq!(executor, ingest);
        assert_eq!(delivery, ingest);
    }

    #[test]
    fn test_rate_limit_does_not_reveal_key() {
        let by_email = respond(IssuanceOutcome::RateLimited(LimitedBy::Email)).unwrap_err();
        let by_ip = respond(IssuanceOutcome::RateLimited(LimitedBy::Ip)).unwrap_err();

        assert_eq!(by_email, ApiError::rate_limited());
        assert_eq!(by_ip, by_email);
    }

    #[test]
    fn test_validation_failure() {
        assert_eq!(
            respond(IssuanceOutcome::ValidationFailed(EmailValidationError::Malformed)).unwrap_err(),
            ApiError::invalid_email()
        );
    }
}
