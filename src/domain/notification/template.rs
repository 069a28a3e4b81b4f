//! Demo key email template
//!
//! The config snippet is consumed verbatim by the downstream skill loader,
//! so its key names and layout must not change.

use crate::domain::issuance::CredentialPair;

pub const DEFAULT_SUBJECT: &str = "Your Authensor OpenClaw Demo Keys";

/// Render the plain-text body sent to a requester
pub fn render_demo_key_message(control_plane_url: &str, pair: &CredentialPair) -> String {
    let lines = [
        "Your Authensor demo keys:".to_string(),
        String::new(),
        format!("Control Plane: {}", control_plane_url),
        format!("Ingest Key: {}", pair.ingest_token),
        format!("Executor Key: {}", pair.executor_token),
        String::new(),
        "OpenClaw config snippet:".to_string(),
        "{".to_string(),
        "  skills: {".to_string(),
        "    entries: {".to_string(),
        "      \"authensor-gateway\": {".to_string(),
        "        enabled: true,".to_string(),
        "        env: {".to_string(),
        format!("          CONTROL_PLANE_URL: \"{}\",", control_plane_url),
        format!("          AUTHENSOR_API_KEY: \"{}\"", pair.executor_token),
        "        }".to_string(),
        "      }".to_string(),
        "    }".to_string(),
        "  }".to_string(),
        "}".to_string(),
    ];

    lines.join("\n")
}
