/*!
 * Mock provider implementations for testing.
 *
 * Each mock records the calls it receives so tests can assert which
 * provider was invoked and with what arguments:
 * - `MockTranslator::working()` - Always succeeds with tagged text
 * - `MockDetector::returning(code)` - Always reports the given language
 * - `MockSpeech::working()` - Always returns a small MP3 payload
 * - `::failing()` on each - Always fails with an error
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use super::{DetectionProvider, SpeechProvider, TranslationProvider, TranslationRequest};

/// Behavior mode for the mock providers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Succeeds with an empty payload
    Empty,
}

impl MockBehavior {
    fn should_fail(&self, count: usize) -> bool {
        match *self {
            MockBehavior::Failing => true,
            MockBehavior::Intermittent { fail_every } => fail_every > 0 && count % fail_every == fail_every - 1,
            MockBehavior::Working | MockBehavior::Empty => false,
        }
    }

    fn failure(count: usize) -> ProviderError {
        ProviderError::ApiError {
            status_code: 500,
            message: format!("Simulated provider failure (request #{})", count + 1),
        }
    }
}

/// Shared request log of a mock
#[derive(Debug)]
struct CallLog<T> {
    count: AtomicUsize,
    requests: Mutex<Vec<T>>,
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self {
            count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> CallLog<T> {
    fn record(&self, request: T) -> usize {
        self.requests.lock().push(request);
        self.count.fetch_add(1, Ordering::SeqCst)
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<T> {
        self.requests.lock().clone()
    }
}

/// Mock translation provider
#[derive(Debug, Clone)]
pub struct MockTranslator {
    behavior: MockBehavior,
    log: Arc<CallLog<TranslationRequest>>,
}

impl MockTranslator {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            log: Arc::new(CallLog::default()),
        }
    }

    /// Create a mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        self.log.count()
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.log.requests()
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    fn name(&self) -> &str {
        "Mock translator"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let count = self.log.record(request.clone());
        if self.behavior.should_fail(count) {
            return Err(MockBehavior::failure(count));
        }
        if self.behavior == MockBehavior::Empty {
            return Ok(String::new());
        }

        let source = request.source.as_deref().unwrap_or("auto");
        Ok(format!("[{}->{}] {}", source, request.target, request.text))
    }
}

/// Mock language detector
#[derive(Debug, Clone)]
pub struct MockDetector {
    behavior: MockBehavior,
    code: String,
    log: Arc<CallLog<String>>,
}

impl MockDetector {
    /// Create a detector reporting `code`
    pub fn returning(code: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Working,
            code: code.into(),
            log: Arc::new(CallLog::default()),
        }
    }

    /// Create a detector that always fails
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failing,
            code: String::new(),
            log: Arc::new(CallLog::default()),
        }
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        self.log.count()
    }

    /// Texts received so far
    pub fn requests(&self) -> Vec<String> {
        self.log.requests()
    }
}

#[async_trait]
impl DetectionProvider for MockDetector {
    fn name(&self) -> &str {
        "Mock detector"
    }

    async fn detect(&self, text: &str) -> Result<String, ProviderError> {
        let count = self.log.record(text.to_string());
        if self.behavior.should_fail(count) {
            return Err(MockBehavior::failure(count));
        }
        Ok(self.code.clone())
    }
}

/// Mock speech provider
#[derive(Debug, Clone)]
pub struct MockSpeech {
    behavior: MockBehavior,
    log: Arc<CallLog<(String, String)>>,
}

impl MockSpeech {
    /// Fake MP3 payload returned on success
    pub const AUDIO: &'static [u8] = b"ID3\x03\x00\x00\x00\x00\x00\x00mock-audio";

    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            log: Arc::new(CallLog::default()),
        }
    }

    /// Create a mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        self.log.count()
    }

    /// `(text, language)` pairs received so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.log.requests()
    }
}

#[async_trait]
impl SpeechProvider for MockSpeech {
    fn name(&self) -> &str {
        "Mock speech"
    }

    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, ProviderError> {
        let count = self.log.record((text.to_string(), language_code.to_string()));
        if self.behavior.should_fail(count) {
            return Err(MockBehavior::failure(count));
        }
        if self.behavior == MockBehavior::Empty {
            return Ok(Vec::new());
        }
        Ok(Self::AUDIO.to_vec())
    }
}
