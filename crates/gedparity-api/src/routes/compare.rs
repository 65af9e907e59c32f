use axum::Json;
use serde::{Deserialize, Serialize};

use gedparity_core::compare::{self, LineDiff};
use gedparity_core::redact::{default_rules, redact};

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub left: String,
    pub right: String,
    /// Mask volatile fields (export time, output filename) first.
    #[serde(default)]
    pub redact: bool,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub equal: bool,
    pub report: String,
    pub diffs: Vec<LineDiff>,
}

/// Parity verdicts are 200 responses in both directions; only transport
/// problems produce error statuses.
pub async fn compare(Json(req): Json<CompareRequest>) -> ApiResult<Json<CompareResponse>> {
    let (left, right) = if req.redact {
        let rules = default_rules();
        (redact(&req.left, &rules), redact(&req.right, &rules))
    } else {
        (req.left, req.right)
    };

    let report = compare::compare(&left, &right);
    Ok(Json(CompareResponse {
        equal: report.equal,
        report: report.render(),
        diffs: report.diffs,
    }))
}
