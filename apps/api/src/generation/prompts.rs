// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for SEO copy generation. Replace `{json_only}` before sending.
pub const SEO_SYSTEM_TEMPLATE: &str = "You are an expert e-commerce SEO copywriter. \
    You write search-optimised landing page copy that reads naturally to shoppers. \
    {json_only}";

/// Output schema shared by product and category prompts.
const OUTPUT_SCHEMA: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{
  "slug": "lowercase-words-joined-by-hyphens",
  "title": "SEO title, at most 60 characters",
  "meta_description": "Meta description, at most 160 characters",
  "body": "Long-form page copy in Markdown, 600-900 words, with ## subheadings",
  "faqs": [
    {"question": "A question a shopper would search for", "answer": "A concise answer"}
  ]
}"#;

/// Product page prompt. Replace: {factuality}, {name}, {keywords}, {price}, {schema}
pub const PRODUCT_PROMPT_TEMPLATE: &str = r#"{factuality}

Write an SEO-optimised product page for the following product.

PRODUCT NAME: {name}
TARGET KEYWORDS: {keywords}
PRICE: {price}

{schema}

RULES:
1. Use the primary keyword in the title, the first paragraph, and at least one subheading
2. Do NOT keyword-stuff; keep keyword density natural
3. Write 4 to 6 FAQs a buyer of this product would realistically ask
4. Mention the price only if one is given above"#;

/// Category page prompt. Replace: {factuality}, {keywords}, {products_json}, {schema}
pub const CATEGORY_PROMPT_TEMPLATE: &str = r#"{factuality}

Write an SEO-optimised category (collection) page.

TARGET KEYWORDS: {keywords}

PRODUCTS IN THIS CATEGORY (in display order):
{products_json}

{schema}

RULES:
1. Use the primary keyword in the title, the first paragraph, and at least one subheading
2. Introduce the category, then highlight the listed products by name in the order given
3. Where a product has a link, reference it as a Markdown link on the product name
4. Write 4 to 6 FAQs a shopper browsing this category would realistically ask"#;

/// Fills the schema placeholder shared by both templates.
pub fn with_schema(template: &str) -> String {
    template.replace("{schema}", OUTPUT_SCHEMA)
}
