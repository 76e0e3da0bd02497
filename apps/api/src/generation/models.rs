//! Request and response shapes for content generation.

use serde::{Deserialize, Serialize};

use crate::session::model::Tab;

/// A single product listed on a category page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLink {
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub link: String,
}

/// What the user asked the optimizer to write about.
///
/// Tagged by `kind` so the JSON mirrors the optimizer tab the form came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    Product {
        name: String,
        #[serde(default)]
        keywords: String,
        #[serde(default)]
        price: String,
    },
    Category {
        keywords: String,
        #[serde(default)]
        products: Vec<ProductLink>,
    },
}

impl GenerationRequest {
    /// The optimizer tab this request belongs to.
    pub fn tab(&self) -> Tab {
        match self {
            GenerationRequest::Product { .. } => Tab::Product,
            GenerationRequest::Category { .. } => Tab::Category,
        }
    }

    /// Checks required fields. Runs before the paywall gate, so a rejected
    /// request never consumes a free generation.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            GenerationRequest::Product { name, .. } => {
                if name.trim().is_empty() {
                    return Err("product name cannot be empty".to_string());
                }
            }
            GenerationRequest::Category { keywords, products } => {
                if keywords.trim().is_empty() {
                    return Err("category keywords cannot be empty".to_string());
                }
                if let Some(idx) = products.iter().position(|p| p.name.trim().is_empty()) {
                    return Err(format!("product #{} in the category has no name", idx + 1));
                }
            }
        }
        Ok(())
    }
}

/// One FAQ entry. Order is preserved from the model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// SEO copy for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    pub body: String,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}
