use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::{utils::output_success, OutputFormat};

pub fn handle(user_id: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let claims = Claims::new(user_id);
    let expires = chrono::DateTime::from_timestamp(claims.exp, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();
    let token = generate_jwt(&claims)?;

    output_success(
        &output_format,
        &format!("Token issued for '{}'", user_id),
        Some(json!({ "token": token, "expires_at": expires })),
    )
}
