//! Scripted mocks for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tubescribe_core::{Credential, GenerateRequest, GenerateResponse};
use tubescribe_error::{
    ModelsError, ModelsErrorKind, ResearchError, ResearchErrorKind, TubescribeResult,
};
use tubescribe_interface::{ReferenceSource, TubescribeDriver};

/// What a mock returns for one kind of call.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    /// `"{prefix} #{n}"`, where `n` counts calls of this kind from 1
    Numbered(String),
    Fail,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

/// Language-model mock. Prompts containing `TITLE:` get the script reply,
/// everything else gets the title reply.
pub struct MockDriver {
    title: Reply,
    script: Reply,
    calls: AtomicUsize,
    title_calls: AtomicUsize,
    script_calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    temperatures: Mutex<Vec<Option<f32>>>,
}

impl MockDriver {
    pub fn new(title: Reply, script: Reply) -> Self {
        Self {
            title,
            script,
            calls: AtomicUsize::new(0),
            title_calls: AtomicUsize::new(0),
            script_calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            temperatures: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn temperatures(&self) -> Vec<Option<f32>> {
        self.temperatures.lock().unwrap().clone()
    }
}

#[async_trait]
impl TubescribeDriver for MockDriver {
    async fn generate(
        &self,
        _credential: &Credential,
        req: &GenerateRequest,
    ) -> TubescribeResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(req.prompt().clone());
        self.temperatures.lock().unwrap().push(*req.temperature());

        let (reply, counter) = if req.prompt().contains("TITLE:") {
            (&self.script, &self.script_calls)
        } else {
            (&self.title, &self.title_calls)
        };
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;

        let text = match reply {
            Reply::Text(text) => Some(text.clone()),
            Reply::Numbered(prefix) => Some(format!("{} #{}", prefix, n)),
            Reply::Fail => None,
        };

        match text {
            Some(text) => Ok(GenerateResponse::builder()
                .text(text)
                .model(Some("mock-model-v1".to_string()))
                .build()
                .unwrap()),
            None => Err(ModelsError::new(ModelsErrorKind::QuotaExceeded(
                "You exceeded your current quota".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Encyclopedia mock recording every topic it was asked about.
pub struct MockSource {
    reply: Reply,
    topics: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            topics: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.topics.lock().unwrap().len()
    }

    pub fn topics(&self) -> Vec<String> {
        self.topics.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReferenceSource for MockSource {
    async fn lookup(&self, topic: &str) -> TubescribeResult<String> {
        self.topics.lock().unwrap().push(topic.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Numbered(prefix) => Ok(format!("{} #{}", prefix, self.calls())),
            Reply::Fail => Err(ResearchError::new(ResearchErrorKind::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
            .into()),
        }
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

pub fn credential() -> Credential {
    Credential::new("sk-test-key").unwrap()
}
