#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use foliogen::{AppError, GeneratedText, GenerationRequest, TextGenerator, UsageRecord};

enum Reply {
    Text { text: String, usage: Option<UsageRecord> },
    Fail { message: String, status: u16 },
}

/// Scripted backend: canned replies consumed in call order, with call
/// counting and request capture. Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    calls: Arc<AtomicUsize>,
    replies: Arc<Mutex<Vec<Reply>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&self, text: &str) {
        self.replies.lock().unwrap().push(Reply::Text {
            text: text.to_string(),
            usage: Some(UsageRecord { input: 10, output: 20 }),
        });
    }

    pub fn push_text_without_usage(&self, text: &str) {
        self.replies.lock().unwrap().push(Reply::Text { text: text.to_string(), usage: None });
    }

    pub fn push_failure(&self, message: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .push(Reply::Fail { message: message.to_string(), status });
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedBackend {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().expect("replies lock poisoned");
        if replies.is_empty() {
            return Ok(GeneratedText { text: "// stub".to_string(), usage: None });
        }
        match replies.remove(0) {
            Reply::Text { text, usage } => Ok(GeneratedText { text, usage }),
            Reply::Fail { message, status } => {
                Err(AppError::Backend { message, status: Some(status) })
            }
        }
    }
}
