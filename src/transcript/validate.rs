use thiserror::Error;

use super::TranscriptFormat;

/// Reasons a document is rejected before analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("transcript is empty")]
    Empty,

    #[error("transcript has no {kind} marker ({marker:?})")]
    MissingMarker { kind: &'static str, marker: String },
}

/// Checks that a document carries every marker the parser relies on.
///
/// The parser itself accepts anything; this is the gate applied by callers
/// that want to reject documents which would produce no chunks at all.
pub fn validate(text: &str, format: &TranscriptFormat) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let required = [
        ("chunk header", &format.chunk_header),
        ("timestamp", &format.timestamp_marker),
        ("speaker", &format.speaker_marker),
    ];
    for (kind, marker) in required {
        if !text.contains(marker.as_str()) {
            return Err(InputError::MissingMarker {
                kind,
                marker: marker.clone(),
            });
        }
    }

    Ok(())
}
