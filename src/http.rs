//! `reqwest` transport for the tryout API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tryout_core::api::{check_status, decode};
use tryout_core::{
    ApiConfig, ApiError, ApiResult, Endpoint, FilterOptions, Method, Question, QuestionInput,
    Tryout, TryoutApi, TryoutInput, TryoutQuery,
};

/// Native HTTP client for the REST API
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.url_for(endpoint);
        tracing::debug!(%endpoint, "sending request");
        match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        }
    }

    /// Send and classify; returns the raw body of a 2xx response.
    async fn execute(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(status, "received response");
        check_status(status, &body)?;
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<T> {
        let body = self.execute(self.request(endpoint)).await?;
        decode(&body)
    }

    async fn send_json<B>(&self, endpoint: &Endpoint, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize + ?Sized,
    {
        self.execute(self.request(endpoint).json(body)).await.map(drop)
    }

    async fn send_empty(&self, endpoint: &Endpoint) -> ApiResult<()> {
        self.execute(self.request(endpoint)).await.map(drop)
    }
}

fn network(error: reqwest::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

#[async_trait(?Send)]
impl TryoutApi for HttpApi {
    async fn list_tryouts(&self, query: &TryoutQuery) -> ApiResult<Vec<Tryout>> {
        self.fetch(&Endpoint::from(query)).await
    }

    async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.fetch(&Endpoint::FilterOptions).await
    }

    async fn get_tryout(&self, id: &str) -> ApiResult<Tryout> {
        self.fetch(&Endpoint::GetTryout(id.to_string())).await
    }

    async fn create_tryout(&self, input: &TryoutInput) -> ApiResult<()> {
        self.send_json(&Endpoint::CreateTryout, input).await
    }

    async fn update_tryout(&self, id: &str, input: &TryoutInput) -> ApiResult<()> {
        self.send_json(&Endpoint::UpdateTryout(id.to_string()), input).await
    }

    async fn delete_tryout(&self, id: &str) -> ApiResult<()> {
        self.send_empty(&Endpoint::DeleteTryout(id.to_string())).await
    }

    async fn list_questions(&self, tryout_id: &str) -> ApiResult<Vec<Question>> {
        self.fetch(&Endpoint::ListQuestions(tryout_id.to_string())).await
    }

    async fn get_question(&self, tryout_id: &str, question_id: &str) -> ApiResult<Question> {
        self.fetch(&Endpoint::GetQuestion {
            tryout_id: tryout_id.to_string(),
            question_id: question_id.to_string(),
        })
        .await
    }

    async fn create_question(&self, tryout_id: &str, input: &QuestionInput) -> ApiResult<()> {
        self.send_json(&Endpoint::CreateQuestion(tryout_id.to_string()), input)
            .await
    }

    async fn update_question(
        &self,
        tryout_id: &str,
        question_id: &str,
        input: &QuestionInput,
    ) -> ApiResult<()> {
        let endpoint = Endpoint::UpdateQuestion {
            tryout_id: tryout_id.to_string(),
            question_id: question_id.to_string(),
        };
        self.send_json(&endpoint, input).await
    }

    async fn delete_question(&self, tryout_id: &str, question_id: &str) -> ApiResult<()> {
        self.send_empty(&Endpoint::DeleteQuestion {
            tryout_id: tryout_id.to_string(),
            question_id: question_id.to_string(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn api() -> HttpApi {
        HttpApi::new(ApiConfig::new("http://api.test/").unwrap())
    }

    #[test]
    fn test_request_targets_versioned_path() {
        let request = api()
            .request(&Endpoint::DeleteQuestion {
                tryout_id: "t1".into(),
                question_id: "q2".into(),
            })
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::DELETE);
        assert_eq!(request.url().as_str(), "http://api.test/api/v1/tryouts/t1/questions/q2");
    }

    #[test]
    fn test_filter_request_carries_query() {
        let endpoint = Endpoint::from(&TryoutQuery::Filtered(vec![("title", "linear algebra".into())]));
        let request = api().request(&endpoint).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/api/v1/tryouts/filter");
        assert_eq!(request.url().query(), Some("title=linear+algebra"));
    }

    #[test]
    fn test_json_body_uses_camel_case() {
        let input = QuestionInput {
            text: "Ice floats".into(),
            is_true: true,
        };
        let request = api()
            .request(&Endpoint::CreateQuestion("t1".into()))
            .json(&input)
            .build()
            .unwrap();

        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        let value: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(value.get("isTrue"), Some(&serde_json::Value::Bool(true)));
        assert_eq!(request.method(), reqwest::Method::POST);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let api = HttpApi::new(ApiConfig::new("http://127.0.0.1:1").unwrap());
        let result = api.get_tryout("t1").await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
