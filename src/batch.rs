//! Parallel encoding and decoding of many independent polylines.
//!
//! Results are returned in input order. Each decode is all or nothing on
//! its own; one malformed string never affects the others.

use rayon::prelude::*;

use crate::error::Result;
use crate::polyline::{self, Polyline};
use crate::precision::Precision;

/// Encodes every polyline at `precision`.
pub fn encode_all(polylines: &[Polyline], precision: Precision) -> Vec<String> {
    polylines
        .par_iter()
        .map(|polyline| polyline.encode_with(precision))
        .collect()
}

/// Decodes every string at `precision`, keeping the reason for each failure.
pub fn decode_all<S>(encoded: &[S], precision: Precision) -> Vec<Result<Polyline>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<Polyline>> = encoded
        .par_iter()
        .map(|s| polyline::try_decode(s.as_ref(), precision))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::debug!(failed, total = results.len(), "batch decode rejected malformed polylines");
    }

    results
}
