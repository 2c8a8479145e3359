// Cross-cutting prompt fragments shared by all features.
// Each feature defines its own full prompts in coaching::prompts.

/// System prompt fragment that enforces JSON-only output.
/// Appended to the system prompt of every strict-JSON operation.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
