// SEO copy generation: request shapes, prompts, the generator seam,
// and the gated HTTP entry point.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod slug;
