// All prompt templates for the sequence endpoints.
// Reuses cross-cutting output-pinning fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};

/// Basic sequence template. Replace `{company}`, `{website}`, `{icp}`.
pub const SEQUENCE_PROMPT_TEMPLATE: &str = r#"You are a B2B cold email strategist.

Generate a cold email sequence of 3 emails in JSON format.
Each email must include:
- subject
- body
- delay (e.g. "0 days", "2 days", "3 days")

The format should be:
[
  {
    "subject": "Email subject here",
    "body": "Email body here...",
    "delay": "0 days"
  },
  ...
]

{json_only_instruction}

Company name: {company}
Website: {website}
Ideal customer profile: {icp}"#;

/// Tailored sequence template. Replace `{company}`, `{website}`, `{icp}`,
/// `{offer}`, `{tone}`. Pins the 3-step cadence to fixed delays.
pub const TAILORED_SEQUENCE_PROMPT_TEMPLATE: &str = r#"You are a B2B cold email strategist.

Generate a cold email sequence of exactly 3 emails in JSON format.
Each email must include:
- subject
- body
- delay

Use exactly these delay values, in order: "0 days", "3 days", "5 days".

The format should be:
[
  {
    "subject": "Email subject here",
    "body": "Email body here...",
    "delay": "0 days"
  },
  ...
]

Write in a {tone} tone and lead with the offer below.

{json_only_instruction}

Company name: {company}
Website: {website}
Ideal customer profile: {icp}
Offer: {offer}"#;

/// Scheduled sequence template. Replace `{companyName}`, `{companyWebsite}`,
/// `{idealCustomerProfile}`. Delays are integer day offsets for scheduler
/// consumption.
pub const SCHEDULED_SEQUENCE_PROMPT_TEMPLATE: &str = r#"You are a B2B cold email strategist.

Generate a cold email sequence of 3 emails in JSON format.
Each email must include:
- subject
- body
- delay (an integer number of days after the previous email, e.g. 0, 3, 5)

The format should be:
[
  {
    "subject": "Email subject here",
    "body": "Email body here...",
    "delay": 0
  },
  ...
]

{json_only_instruction}

Company name: {companyName}
Website: {companyWebsite}
Ideal customer profile: {idealCustomerProfile}"#;

/// Single-email template. Replace `{industry}`, `{title}`, `{offer}`,
/// `{tone}`.
pub const SINGLE_EMAIL_PROMPT_TEMPLATE: &str = r#"You are a B2B cold email strategist.

Write one cold outreach email pitching the offer below.

{plain_text_instruction}

Industry: {industry}
Recipient title: {title}
Offer: {offer}
Tone: {tone}"#;

/// Renders a prompt template against validated input fields.
///
/// Pure string substitution: shared instruction fragments first, then each
/// `{field}` placeholder. No control flow beyond interpolation.
pub fn render_prompt(template: &str, fields: &[(&str, String)]) -> String {
    let mut prompt = template
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{plain_text_instruction}", PLAIN_TEXT_INSTRUCTION);
    for (name, value) in fields {
        prompt = prompt.replace(&format!("{{{name}}}"), value);
    }
    prompt
}
