// Shared prompt fragments. Feature modules keep their own prompts.rs and
// splice these in where they need them.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated copy anchored to what the user actually supplied.
pub const FACTUALITY_INSTRUCTION: &str = "\
    Only state facts that follow from the supplied product details. \
    Do NOT invent prices, specifications, ratings, awards, or guarantees. \
    If a detail is missing, write around it rather than guessing.";
