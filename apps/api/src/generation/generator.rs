//! Content Generator — turns a `GenerationRequest` into SEO copy.
//!
//! The trait is the seam to the external AI service. `AppState` carries an
//! `Arc<dyn ContentGenerator>`; production wires in `LlmContentGenerator`,
//! tests wire in stubs.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::models::{GeneratedContent, GenerationRequest};
use crate::generation::prompts::{
    with_schema, CATEGORY_PROMPT_TEMPLATE, PRODUCT_PROMPT_TEMPLATE, SEO_SYSTEM_TEMPLATE,
};
use crate::generation::slug::resolve_slug;
use crate::llm_client::prompts::{FACTUALITY_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::llm_client::LlmClient;

/// Search engines truncate meta descriptions past roughly this many characters.
const META_DESCRIPTION_SOFT_LIMIT: usize = 160;

/// The only failure a generator reports. Transport and parse problems are
/// logged where they happen and collapse into this.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation failed")]
    Failed,
}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmContentGenerator — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Prompts Claude for JSON copy and normalises what comes back.
pub struct LlmContentGenerator {
    llm: LlmClient,
}

impl LlmContentGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        let prompt = build_prompt(request).map_err(|e| {
            warn!("Failed to build generation prompt: {e}");
            GenerationError::Failed
        })?;
        let system = SEO_SYSTEM_TEMPLATE.replace("{json_only}", JSON_ONLY_INSTRUCTION);

        let raw: GeneratedContent = self.llm.call_json(&prompt, &system).await.map_err(|e| {
            warn!("Generation LLM call failed: {e}");
            GenerationError::Failed
        })?;

        let content = finalize_content(raw)?;
        info!(
            "Generated {:?} page '{}' with {} FAQs",
            request.tab(),
            content.slug,
            content.faqs.len()
        );
        Ok(content)
    }
}

/// Builds the user prompt for either a product or a category page.
pub fn build_prompt(request: &GenerationRequest) -> Result<String, serde_json::Error> {
    let prompt = match request {
        GenerationRequest::Product {
            name,
            keywords,
            price,
        } => with_schema(PRODUCT_PROMPT_TEMPLATE)
            .replace("{factuality}", FACTUALITY_INSTRUCTION)
            .replace("{name}", name.trim())
            .replace("{keywords}", or_none(keywords))
            .replace("{price}", or_none(price)),
        GenerationRequest::Category { keywords, products } => {
            let products_json = serde_json::to_string_pretty(products)?;
            with_schema(CATEGORY_PROMPT_TEMPLATE)
                .replace("{factuality}", FACTUALITY_INSTRUCTION)
                .replace("{keywords}", keywords.trim())
                .replace("{products_json}", &products_json)
        }
    };
    Ok(prompt)
}

fn or_none(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "(not provided)"
    } else {
        value
    }
}

/// Validates and normalises raw model output. Blank title or body is treated
/// as a parse failure; there is no partial-result path.
pub fn finalize_content(raw: GeneratedContent) -> Result<GeneratedContent, GenerationError> {
    let title = raw.title.trim().to_string();
    let body = raw.body.trim().to_string();
    if title.is_empty() || body.is_empty() {
        warn!("Model returned content without a title or body");
        return Err(GenerationError::Failed);
    }

    let meta_description = raw.meta_description.trim().to_string();
    if meta_description.chars().count() > META_DESCRIPTION_SOFT_LIMIT {
        warn!(
            "Meta description is {} chars (soft limit {}): {:?}",
            meta_description.chars().count(),
            META_DESCRIPTION_SOFT_LIMIT,
            meta_description.chars().take(60).collect::<String>()
        );
    }

    let faqs = raw
        .faqs
        .into_iter()
        .filter(|f| !f.question.trim().is_empty() && !f.answer.trim().is_empty())
        .collect();

    Ok(GeneratedContent {
        slug: resolve_slug(&raw.slug, &title),
        title,
        meta_description,
        body,
        faqs,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
