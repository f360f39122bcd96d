//! Input resolution shared by `process` and `batch`.

use std::fs;
use std::path::Path;

use tracing::debug;

use rcpt_core::{
    ExtractionResult, RcptConfig, ReceiptParser, ReceiptScanner, RecognitionResult, VisionClient,
};

const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "webp", "tiff", "tif", "bmp", "gif"];

/// How an input file should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputKind {
    /// Pick by file extension
    Auto,
    /// Receipt image, recognized through the Vision API
    Image,
    /// Saved Vision API JSON response
    Response,
    /// Plain-text transcript
    Text,
}

/// Concrete way to read one input, after `Auto` has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Image,
    Response,
    Text,
}

impl InputKind {
    /// Resolve `Auto` from the file extension.
    pub fn resolve(self, path: &Path) -> anyhow::Result<InputSource> {
        match self {
            InputKind::Auto => InputSource::from_extension(path),
            InputKind::Image => Ok(InputSource::Image),
            InputKind::Response => Ok(InputSource::Response),
            InputKind::Text => Ok(InputSource::Text),
        }
    }
}

impl InputSource {
    fn from_extension(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => Ok(InputSource::Response),
            "txt" => Ok(InputSource::Text),
            ext if IMAGE_EXTENSIONS.contains(&ext) => Ok(InputSource::Image),
            _ => anyhow::bail!(
                "Unsupported file format: {} (use --input-kind to override)",
                path.display()
            ),
        }
    }
}

/// Whether a path can be processed with the given kind.
pub fn is_supported(path: &Path, kind: InputKind) -> bool {
    kind.resolve(path).is_ok()
}

/// Turns input files into extraction results.
///
/// The Vision client is only built when image inputs are expected, so
/// offline runs on transcripts and saved responses need no API key.
pub struct InputProcessor {
    parser: ReceiptParser,
    scanner: Option<ReceiptScanner<VisionClient>>,
}

impl InputProcessor {
    pub fn new(config: &RcptConfig, needs_vision: bool) -> anyhow::Result<Self> {
        let scanner = if needs_vision {
            let client = VisionClient::from_config(&config.vision)?;
            Some(ReceiptScanner::new(client))
        } else {
            None
        };

        Ok(Self {
            parser: ReceiptParser::new(),
            scanner,
        })
    }

    pub async fn process(&self, path: &Path, kind: InputKind) -> anyhow::Result<ExtractionResult> {
        let source = kind.resolve(path)?;
        debug!("Reading {} as {:?}", path.display(), source);

        match source {
            InputSource::Text => {
                let text = fs::read_to_string(path)?;
                Ok(self.parser.parse(&text))
            }
            InputSource::Response => {
                let json = fs::read_to_string(path)?;
                let response = RecognitionResult::from_json(&json)?;
                Ok(self.parser.parse_recognition(&response))
            }
            InputSource::Image => {
                let Some(scanner) = &self.scanner else {
                    anyhow::bail!("Vision client not configured for image input");
                };
                let data = fs::read(path)?;
                Ok(scanner.scan(&data).await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_auto_by_extension() {
        let resolve = |name: &str| InputKind::Auto.resolve(&PathBuf::from(name)).ok();

        assert_eq!(resolve("r.json"), Some(InputSource::Response));
        assert_eq!(resolve("r.TXT"), Some(InputSource::Text));
        assert_eq!(resolve("r.jpeg"), Some(InputSource::Image));
        assert_eq!(resolve("r.pdf"), None);
    }

    #[test]
    fn test_explicit_kind_overrides_extension() {
        let source = InputKind::Text.resolve(&PathBuf::from("scan.jpg")).unwrap();
        assert_eq!(source, InputSource::Text);

        let source = InputKind::Image.resolve(&PathBuf::from("scan.bin")).unwrap();
        assert_eq!(source, InputSource::Image);
    }
}
