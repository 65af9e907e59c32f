use axum::Json;
use serde::{Deserialize, Serialize};

use gedparity_core::canonical;
use gedparity_core::digest::canonical_digest_hex;

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct CanonicalizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CanonicalizeResponse {
    pub canonical: String,
    pub digest: String,
}

pub async fn canonicalize(
    Json(req): Json<CanonicalizeRequest>,
) -> ApiResult<Json<CanonicalizeResponse>> {
    let digest = canonical_digest_hex(&req.text);
    Ok(Json(CanonicalizeResponse {
        canonical: canonical::canonicalize(&req.text),
        digest,
    }))
}
