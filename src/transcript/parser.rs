use super::{Chunk, TranscriptFormat};

/// Characters trimmed from both ends of a chunk header line to form the id.
const HEADER_TRIM: [char; 4] = ['[', ']', ' ', '\n'];

/// Accumulates lines for the chunk currently being read.
#[derive(Default)]
struct PendingChunk {
    id: String,
    timestamp: String,
    lines: Vec<String>,
}

impl PendingChunk {
    /// Emits the chunk only if it has an id and at least one subject line.
    fn flush_into(&mut self, chunks: &mut Vec<Chunk>) {
        let pending = std::mem::take(self);
        if pending.id.is_empty() || pending.lines.is_empty() {
            return;
        }
        chunks.push(Chunk {
            id: pending.id,
            timestamp: pending.timestamp,
            text: pending.lines.join("\n"),
        });
    }
}

/// Parses a transcript into its ordered chunks.
///
/// Lines other than headers, timestamps and subject-speaker turns are
/// ignored. A header that collects no subject-speaker lines produces no
/// chunk. If several timestamp lines appear in one chunk the last one wins.
pub fn extract_chunks(transcript: &str, format: &TranscriptFormat) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut pending = PendingChunk::default();

    for line in transcript.lines() {
        if line.starts_with(format.chunk_header.as_str()) {
            pending.flush_into(&mut chunks);
            pending.id = line.trim_matches(HEADER_TRIM).to_string();
        } else if let Some(rest) = line.strip_prefix(format.timestamp_marker.as_str()) {
            pending.timestamp = rest.trim().to_string();
        } else if let Some(text) = format.speaker_text(line) {
            pending.lines.push(text.to_string());
        }
    }

    pending.flush_into(&mut chunks);
    chunks
}

/// Returns the subject speaker's turns across the whole transcript, joined by spaces.
///
/// Headers are not required; this is the whole-text view used by aggregate
/// analyses.
pub fn clean_transcript(transcript: &str, format: &TranscriptFormat) -> String {
    transcript
        .lines()
        .filter_map(|line| format.speaker_text(line))
        .collect::<Vec<_>>()
        .join(" ")
}
