use crate::error::{ErrorCli, Result};
use reqwest::{Client, Response};
use tr_core::server::payload::health_response::HealthResponse;
use tr_core::server::payload::prompt_request::PromptRequest;
use tr_core::server::payload::stats_response::StatsResponse;
use tr_core::server::routes::{ApiPath, BackendApiHealth, BackendApiStream, backend_url};

pub struct CliClient {
    client: Client,
    base_url: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: ApiPath) -> String {
        backend_url(&self.base_url, path).as_str().to_string()
    }

    fn map_error(&self, e: reqwest::Error) -> ErrorCli {
        if e.is_connect() {
            ErrorCli::ConnectionRefused(self.base_url.clone())
        } else {
            ErrorCli::Http(e)
        }
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = res.map_err(|e| self.map_error(e))?;
        match res.error_for_status() {
            Ok(res) => {
                let text = res.text().await?;
                Ok(text)
            }
            Err(e) => Err(self.map_error(e)),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.url(BackendApiHealth::Status.path());
        let result = self.client.get(&url).send().await;
        let text = self.handle_response(result).await?;
        Ok(serde_json::from_str(&text).map_err(tr_core::error::ErrorCore::from)?)
    }

    pub async fn stats(&self) -> Result<StatsResponse> {
        let url = self.url(BackendApiHealth::Stats.path());
        let result = self.client.get(&url).send().await;
        let text = self.handle_response(result).await?;
        Ok(serde_json::from_str(&text).map_err(tr_core::error::ErrorCore::from)?)
    }

    /// Posts the prompt and returns the still-streaming response.
    pub async fn send_prompt(&self, request: &PromptRequest) -> Result<Response> {
        let url = self.url(BackendApiStream::Stream.path());
        let result = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_error(e))?
            .error_for_status()?;

        Ok(result)
    }
}
