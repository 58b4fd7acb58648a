// All LLM prompt constants for the Feedback module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for interview feedback — enforces JSON-only output.
pub const FEEDBACK_SYSTEM: &str =
    "You are an experienced interview coach scoring a candidate's mock interview. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Feedback prompt template. Replace `{role}`, `{question_count}`,
/// `{transcript_json}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Score the following mock interview for a {role} position.

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {
      "scores": {
        "response_organization": 72,
        "technical_knowledge": 85,
        "problem_solving": 78,
        "position_application": 64,
        "timing": 90,
        "personability": 81
      },
      "best_quote": "exact words the candidate said",
      "best_quote_reason": "why this quote landed well",
      "worst_quote": "exact words the candidate said",
      "worst_quote_reason": "why this quote hurt the answer",
      "strengths": ["specific strength of this answer"],
      "areas_to_improve": ["specific, actionable improvement"],
      "summary": "two-sentence assessment of this answer",
      "confidence": 0.9
    }
  ],
  "overall": {
    "scores": {
      "response_organization": 70,
      "technical_knowledge": 80,
      "problem_solving": 75,
      "position_application": 65,
      "timing": 85,
      "personability": 80
    },
    "strengths": ["pattern across the whole interview"],
    "areas_to_improve": ["pattern across the whole interview"],
    "summary": "three-sentence assessment of the interview"
  }
}

Rules for scoring:
- Every score is a number from 0 to 100.
- The "questions" array MUST contain exactly {question_count} entries, one per
  transcript entry, in the same order as the transcript.
- Quotes must be verbatim from the candidate's answers — never paraphrase.
- confidence is 0.0-1.0: how much answer material you had to judge from.
- Score the answer given, not the question asked.

TRANSCRIPT (question/answer pairs, in order):
{transcript_json}"#;

/// System prompt for the resume-aware variant. Output shape is enforced by a
/// strict schema, so this focuses the persona and grounding.
pub const RESUME_FEEDBACK_SYSTEM: &str =
    "You are an experienced interview coach scoring a candidate's mock interview \
    against the role they applied for and the resume they submitted. \
    Judge each answer on its own merit, then weigh whether the candidate backed \
    claims their resume makes. Respond only with the structured object requested.";

/// Resume-aware feedback prompt template. Replace `{role}`,
/// `{question_count}`, `{transcript_json}`, `{resume}` before sending.
pub const RESUME_FEEDBACK_PROMPT_TEMPLATE: &str = r#"Score the following mock interview for a {role} position. The "questions" array must contain exactly {question_count} entries, one per transcript entry, in the same order.

Scoring rules:
- Every category score is a number from 0 to 100.
- Quotes must be verbatim from the candidate's answers.
- confidence is 0.0-1.0: how much answer material you had to judge from.
- Where an answer touches experience the resume claims, reward consistency and
  flag contradictions under areas_to_improve.

CANDIDATE RESUME:
{resume}

TRANSCRIPT (question/answer pairs, in order):
{transcript_json}"#;
