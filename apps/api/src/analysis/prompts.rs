// All LLM prompt constants for the analysis module.

pub const RESUME_PROMPT_CHARS: usize = 2500;
pub const JD_PROMPT_CHARS: usize = 2500;

/// System prompt for resume evaluation. Combined with `JSON_ONLY_SYSTEM`.
pub const EVALUATION_SYSTEM: &str =
    "You are an AI resume-job description evaluator. Provide a structured, ATS-style analysis.";

/// Evaluation prompt template. Replace `{resume_text}` and `{jd_text}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Resume: {resume_text}
Job Description: {jd_text}

Return a JSON object with this EXACT schema:
{
  "overall_score": 0,
  "semantic_score": 0,
  "skill_score": 0,
  "feedback": "string",
  "soft_skills_required": ["string"],
  "soft_skills_present": ["string"],
  "technical_skills_required": ["string"],
  "technical_skills_present": ["string"],
  "recommendations": ["string"]
}

Rules:
- Scores are numbers from 0 to 100.
- feedback is comprehensive qualitative feedback broken into sections:
  Strengths (detailed and contextual, highlight relevant projects/roles),
  Weaknesses/Missing Skills (list clearly, explain why they matter),
  Opportunities (where the resume could be tailored more),
  Risks (red flags like gaps or vague descriptions).
  Give at least 2-3 points under each section.
- soft_skills_required: soft skills asked for by the job description.
- soft_skills_present: soft skills inferred from the resume.
- technical_skills_required: technical skills required by the job description.
- technical_skills_present: technical skills present in the resume.
- recommendations: at least 5 tailored suggestions to improve the resume, covering keyword
  enrichment, ATS optimization, quantifying impact with numbers, highlighting projects,
  and aligning achievements with the job description."#;
