//! Name generation backed by an OpenAI-compatible chat completion API

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::NameGenerator;
use shared::{GenerationRequest, NameLength, NameResult, ProcessId};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4-1106-preview";
const SYSTEM_PROMPT: &str = "You are a Chinese name generation expert.";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Provider response body, constrained to a JSON object of the shape
/// `{"names": [...]}` via `response_format`.
#[derive(Debug, Deserialize)]
struct NamesPayload {
    names: Vec<NameResult>,
}

/// Real name generator talking to an OpenAI-compatible endpoint
pub struct RealNameGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl RealNameGenerator {
    /// Create a new generator against an explicit provider configuration
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a generator from `LLM_BASE_URL`, `LLM_API_KEY` and `LLM_MODEL`
    pub fn from_env() -> WebServerResult<Self> {
        let base_url =
            std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| WebServerError::config("LLM_API_KEY must be set"))?;
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self::new(base_url, api_key, model))
    }

    /// Build the generation prompt from one request
    pub(crate) fn build_prompt(request: &GenerationRequest) -> String {
        let gender_text = match request.gender {
            Some(shared::Gender::Male) => "男孩",
            Some(shared::Gender::Female) => "女孩",
            Some(shared::Gender::Neutral) | None => "不限",
        };

        let name_length_text = match request.name_length {
            NameLength::Single => "单字名（一个字）",
            NameLength::Double => "双字名（两个字）",
            NameLength::Any => "单字名或双字名均可",
        };

        let avoid_chars = if request.avoid_characters.is_empty() {
            "无".to_string()
        } else {
            request.avoid_characters.join(", ")
        };
        let avoid_sounds = if request.avoid_sounds.is_empty() {
            "无".to_string()
        } else {
            request.avoid_sounds.join(", ")
        };
        let disliked = if request.disliked_names.is_empty() {
            "无".to_string()
        } else {
            request.disliked_names.join(", ")
        };

        format!(
            r#"
请根据以下要求生成{count}个中文名字，并以JSON格式返回：

命名要求：
1. 性别：{gender_text}
2. 名字长度：{name_length_text}
3. 期望寓意：{meanings}
4. 文化溯源：{sources}
5. 回避字：{avoid_chars}
6. 回避读音：{avoid_sounds}
7. 排除名字（此前已被否决，不要重复生成）：{disliked}

特别说明：
- 根据指定的名字长度要求生成名字，确保完全符合要求
- 姓名要遵循中国传统起名习惯，音韵和谐
- 名字要有美感和寓意，避免生僻字或难写的字
- 每个名字都要提供详细的出处和解释

请以如下JSON格式返回结果：
{{
    "names": [
        {{
            "name": "完整名字",
            "gender": "male/female/neutral",
            "meaning": ["寓意1", "寓意2"],
            "source": "出处",
            "explanation": "详细解释"
        }},
        ...
    ]
}}"#,
            count = request.count,
            gender_text = gender_text,
            name_length_text = name_length_text,
            meanings = request.meanings.join(", "),
            sources = request.cultural_source.join(", "),
            avoid_chars = avoid_chars,
            avoid_sounds = avoid_sounds,
            disliked = disliked,
        )
    }

    /// Parse the provider's JSON content into the suggestion list
    pub(crate) fn parse_names(content: &str) -> WebServerResult<Vec<NameResult>> {
        let payload: NamesPayload = serde_json::from_str(content)?;
        Ok(payload.names)
    }
}

#[async_trait]
impl NameGenerator for RealNameGenerator {
    async fn generate(&self, request: &GenerationRequest) -> WebServerResult<Vec<NameResult>> {
        let prompt = Self::build_prompt(request);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.7,
            "max_tokens": 2000,
            "response_format": { "type": "json_object" }
        });

        let endpoint = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        shared::process_debug!(ProcessId::current(), "Requesting {} suggestions from {}", request.count, self.model);

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| WebServerError::Upstream { message: e.to_string() })?;

        if !response.status().is_success() {
            return Err(WebServerError::Upstream {
                message: format!("provider returned HTTP {}", response.status()),
            });
        }

        let completion: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WebServerError::Upstream { message: e.to_string() })?;

        let content = completion["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(WebServerError::EmptyResponse)?;

        let names = Self::parse_names(content)?;
        shared::process_info!(ProcessId::current(), "🎯 Generated {} name suggestions", names.len());

        Ok(names)
    }
}
