use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::{
    command::wire::{PlanEntry, parse_plan, plan_to_json},
    foundation::error::{PlanError, PlanResult},
};

/// Transfer form of a plan: `base64(gzip(json))`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Payload {
    pub text: String,
    pub steps: usize,
    pub json_bytes: usize,
    pub compressed_bytes: usize,
}

impl Payload {
    pub fn compression_ratio(&self) -> f64 {
        if self.json_bytes == 0 {
            return 0.0;
        }
        self.compressed_bytes as f64 / self.json_bytes as f64
    }
}

#[tracing::instrument(skip_all, fields(steps = entries.len()))]
pub fn export_payload(entries: &[PlanEntry]) -> PlanResult<Payload> {
    if entries.is_empty() {
        tracing::warn!("export refused: plan is empty");
        return Err(PlanError::export("no waypoints to export"));
    }

    let json = plan_to_json(entries)?;
    let compressed = gzip(json.as_bytes())?;
    let text = BASE64.encode(&compressed);

    tracing::debug!(
        json_bytes = json.len(),
        compressed_bytes = compressed.len(),
        "plan encoded"
    );
    Ok(Payload {
        text,
        steps: entries.len(),
        json_bytes: json.len(),
        compressed_bytes: compressed.len(),
    })
}

/// Reverses [`export_payload`]. Entries that fail to decode come back as placeholders.
pub fn decode_payload(text: &str) -> PlanResult<Vec<PlanEntry>> {
    let compressed = BASE64
        .decode(text.trim())
        .map_err(|e| PlanError::payload(format!("invalid base64: {e}")))?;

    let mut json = String::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_string(&mut json)
        .map_err(|e| PlanError::payload(format!("invalid gzip stream: {e}")))?;

    parse_plan(&json)
}

fn gzip(bytes: &[u8]) -> PlanResult<Vec<u8>> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes)
        .and_then(|()| enc.finish())
        .map_err(|e| PlanError::payload(format!("gzip failed: {e}")))
}
