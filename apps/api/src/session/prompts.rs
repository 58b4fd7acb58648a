// All LLM prompt constants for the live-session endpoints.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for next-question generation — plain text output.
pub const QUESTION_SYSTEM: &str =
    "You are a seasoned interviewer running a mock interview. \
    Respond with the interview question only — a single question, \
    no numbering, no preamble, no surrounding quotes.";

/// Next-question prompt template. Replace `{role}`, `{previous_questions}`.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate the next interview question for a {role} candidate.

Questions already asked (do NOT repeat or rephrase any of these):
{previous_questions}

Ask one behavioral or technical question appropriate for the role, at a
natural next step in the interview."#;

/// System prompt for pause analysis — constrains output to one verdict token.
pub const PAUSE_SYSTEM: &str =
    "You decide whether a speaker has finished answering an interview question. \
    Respond with EXACTLY one of these tokens and nothing else: \
    definitely_done, definitely_still_talking, ask.";

/// Pause-analysis prompt template. Replace `{transcript}`.
pub const PAUSE_PROMPT_TEMPLATE: &str = r#"The candidate has gone quiet mid-interview. Based on the transcript so far, decide whether they have finished their answer.

- definitely_done: the answer reached a clear conclusion
- definitely_still_talking: the last sentence is clearly unfinished
- ask: anything in between — when unsure, choose ask

TRANSCRIPT:
{transcript}

Respond with exactly one token: definitely_done, definitely_still_talking, or ask."#;

/// Fact-check prompt template. Replace `{question}`, `{answer}`. Uses the
/// shared JSON-only system fragment.
pub const FACT_CHECK_PROMPT_TEMPLATE: &str = r#"Fact-check the candidate's answer to an interview question.

Return a JSON object with this EXACT schema (no extra fields):
{
  "is_correct": true,
  "result": "one-line verdict",
  "explanation": "two or three sentences on what is right or wrong"
}

is_correct is true only when the technical substance of the answer is accurate.

QUESTION:
{question}

ANSWER:
{answer}"#;

/// System prompt for the voice recap — spoken-style plain text.
pub const VOICE_SUMMARY_SYSTEM: &str =
    "You write short recaps meant to be read aloud by a voice assistant. \
    Respond with the recap text only — plain conversational sentences, \
    no markdown, no lists, no headings.";

/// Voice recap prompt template. Replace `{transcript_json}`.
pub const VOICE_SUMMARY_PROMPT_TEMPLATE: &str = r#"Summarize this mock interview in 3 to 5 spoken sentences: how it went overall, the strongest moment, and the one thing to work on next.

TRANSCRIPT (question/answer pairs, in order):
{transcript_json}"#;
