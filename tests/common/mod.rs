//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use giftchat::connector::http;
use giftchat::{ChatClient, ChatMessage, Container, ContainerConfig, DomainError, PromptLocale};
use tokio::net::TcpListener;

/// Chat client answering from a script (`None` = provider failure) and
/// recording every message list it receives.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Option<&'static str>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Option<&'static str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match self.replies.lock().unwrap().pop_front() {
            Some(Some(reply)) => Ok(Some(reply.to_string())),
            _ => Err(DomainError::provider("API returned 503 Service Unavailable")),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

pub fn container(profile_path: &Path, client: Arc<ScriptedClient>) -> Arc<Container> {
    let config = ContainerConfig {
        profile_path: profile_path.to_path_buf(),
        locale: PromptLocale::En,
        mock_llm: false,
        model: None,
    };
    Arc::new(Container::with_chat_client(config, client))
}

/// Serve `container` on an ephemeral port and return the base URL.
pub async fn start_server(container: Arc<Container>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        http::serve(listener, container, std::future::pending())
            .await
            .expect("giftchat server");
    });
    format!("http://{}", addr)
}
