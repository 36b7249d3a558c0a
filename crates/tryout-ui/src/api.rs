//! `gloo-net` transport for the tryout API
//!
//! The base URL is fixed at build time from `TRYOUT_API_URL`; without it the
//! local default is used. One `GlooApi` is provided as context by the root
//! component.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tryout_core::api::{check_status, decode};
use tryout_core::{
    ApiConfig, ApiError, ApiResult, Endpoint, FilterOptions, Method, Question, QuestionInput,
    Tryout, TryoutApi, TryoutInput, TryoutQuery,
};

use crate::error::{Result, UiError};

/// Browser HTTP client for the REST API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlooApi {
    config: ApiConfig,
}

impl GlooApi {
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client for the URL baked in at build time.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` if the compiled-in URL is not http(s).
    pub fn from_build_env() -> Result<Self> {
        ApiConfig::from_value(option_env!("TRYOUT_API_URL"))
            .map(Self::new)
            .map_err(|e| UiError::InvalidConfig(e.to_string()))
    }

    fn builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.url_for(endpoint);
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<T> {
        let body = read(self.builder(endpoint).send().await).await?;
        decode(&body)
    }

    async fn send_json<B: Serialize + ?Sized>(&self, endpoint: &Endpoint, body: &B) -> ApiResult<()> {
        let request = self.builder(endpoint).json(body).map_err(network)?;
        read(request.send().await).await.map(drop)
    }

    async fn send_empty(&self, endpoint: &Endpoint) -> ApiResult<()> {
        read(self.builder(endpoint).send().await).await.map(drop)
    }
}

fn network(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

/// Classify a response and return its body on 2xx.
async fn read(response: std::result::Result<Response, gloo_net::Error>) -> ApiResult<String> {
    let response = response.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    check_status(status, &body)?;
    Ok(body)
}

#[async_trait(?Send)]
impl TryoutApi for GlooApi {
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

/// Install the API client for every page below the caller.
pub fn provide_api() {
    let api = GlooApi::from_build_env().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("{e}; falling back to the default API URL").into());
        GlooApi::default()
    });
    provide_context(api);
}

/// The client provided by [`provide_api`], wrapped so handlers can copy it.
pub fn use_api() -> StoredValue<GlooApi> {
    StoredValue::new(use_context::<GlooApi>().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_targets_local_server() {
        let api = GlooApi::default();
        assert_eq!(
            api.config.url_for(&Endpoint::FilterOptions),
            "http://localhost:8080/api/v1/tryouts/filter/options"
        );
    }

    #[test]
    fn test_build_env_client_is_valid_without_override() {
        if option_env!("TRYOUT_API_URL").is_none() {
            assert_eq!(GlooApi::from_build_env(), Ok(GlooApi::default()));
        }
    }
}
