// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

use crate::models::translation::TranslationResult;

pub use registry::{
    gather_metrics,
    GEMINI_API_CALLS,
    GEMINI_API_DURATION,
    REQUESTS_TOTAL,
    TRANSLATIONS_TOTAL,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();
}

/// Helper to record Gemini API call metrics
pub fn record_gemini_call(model: &str, status_code: u16, duration_secs: f64) {
    GEMINI_API_CALLS
        .with_label_values(&[model, &status_code.to_string()])
        .inc();

    GEMINI_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record a finished translation
pub fn record_translation(result: &TranslationResult) {
    let outcome = match result.error_kind() {
        None => "success",
        Some(kind) => kind.as_str(),
    };
    TRANSLATIONS_TOTAL.with_label_values(&[outcome]).inc();
}
