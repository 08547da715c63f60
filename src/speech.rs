/*!
 * Speech synthesis of translated text.
 *
 * The synthesizer writes the provider's MP3 stream to a fixed file name,
 * overwritten by every call. Concurrent sessions sharing the output
 * directory race on that file.
 */

use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::file_utils::FileManager;
use crate::providers::SpeechProvider;

/// MIME type of synthesized audio
pub const AUDIO_MIME_TYPE: &str = "audio/mp3";

/// Audio written by a successful synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    /// Location of the MP3 file
    pub file_path: PathBuf,
    /// Always [`AUDIO_MIME_TYPE`]
    pub mime_type: &'static str,
}

impl AudioArtifact {
    /// Describe an MP3 file
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            mime_type: AUDIO_MIME_TYPE,
        }
    }
}

/// Turns text into an MP3 file through an external provider
#[derive(Debug, Clone)]
pub struct SpeechSynthesizer {
    provider: Arc<dyn SpeechProvider>,
    output_dir: PathBuf,
}

impl SpeechSynthesizer {
    /// Create a synthesizer writing into `output_dir`
    pub fn new(provider: Arc<dyn SpeechProvider>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            output_dir: output_dir.into(),
        }
    }

    /// Directory receiving the audio files
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Synthesize `text` and write it to `output_file_name`
    ///
    /// Returns the written path, or `None` when the provider fails, the
    /// language is unsupported, or the file cannot be written.
    pub async fn synthesize(&self, text: &str, language_code: &str, output_file_name: &str) -> Option<PathBuf> {
        let audio = match self.provider.synthesize(text, language_code).await {
            Ok(audio) if !audio.is_empty() => audio,
            Ok(_) => {
                error!("{} returned no audio for '{}'", self.provider.name(), language_code);
                return None;
            }
            Err(e) => {
                error!("{} speech synthesis failed: {}", self.provider.name(), e);
                return None;
            }
        };

        let path = self.output_dir.join(output_file_name);
        debug!("Writing {} bytes of audio to {}", audio.len(), path.display());

        match FileManager::write_atomic(&path, &audio) {
            Ok(path) => {
                info!("Audio saved: {}", path.display());
                Some(path)
            }
            Err(e) => {
                error!("Failed to store synthesized audio: {:#}", e);
                None
            }
        }
    }
}
