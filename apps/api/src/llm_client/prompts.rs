// Shared prompt fragments.
// Each endpoint variant defines its own template in sequence::prompts;
// this file contains the cross-cutting output-pinning fragments.

/// Instruction fragment that pins the model to a bare JSON array.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Avoid explanations. Do NOT include markdown or formatting. \
    Respond with the JSON array only.";

/// Instruction fragment for plain-text (single email) output.
pub const PLAIN_TEXT_INSTRUCTION: &str =
    "Return only the email text. Do NOT include explanations, markdown, \
    or a preamble.";
