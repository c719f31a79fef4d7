//! 测试替身：记录请求并按队列返回响应的传输

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::application::error::ApiError;
use crate::application::ports::{ApiRequest, HttpTransportPort, RawResponse};

/// 记录所有出站请求，按入队顺序返回预设结果；队列为空时返回 `{code: 200}`
#[derive(Default)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    delay: Option<Duration>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn respond(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn respond_ok(&self, body: Value) {
        self.respond(RawResponse::ok(body));
    }

    pub(crate) fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransportPort for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::ok(json!({ "code": 200 }))))
    }
}
