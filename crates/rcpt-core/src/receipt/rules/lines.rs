//! Transcript line segmentation.

/// Split a transcript on line breaks, trimming each line.
///
/// Blank lines are kept so positions stay aligned with the transcript;
/// the merchant rule rejects them by length.
pub fn segment_lines(transcript: &str) -> Vec<&str> {
    if transcript.is_empty() {
        return Vec::new();
    }

    transcript.split('\n').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_trims_lines() {
        assert_eq!(
            segment_lines("  이마트 \r\n\n합계 1,000\t"),
            vec!["이마트", "", "합계 1,000"]
        );
    }

    #[test]
    fn test_empty_transcript_has_no_lines() {
        assert!(segment_lines("").is_empty());
    }
}
