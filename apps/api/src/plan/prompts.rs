// Preparation plan prompt templates.

pub const PLAN_PROMPT_CHARS: usize = 1500;

pub const PLAN_SYSTEM: &str = "You are an interview preparation coach. \
    Write practical, structured preparation plans tailored to a candidate and a role.";

/// Replace: {resume_text}, {jd_text}, {days}
pub const PLAN_PROMPT_TEMPLATE: &str = r#"Resume: {resume_text}
Job Description: {jd_text}
The candidate has {days} days to prepare.

Suggest a structured preparation plan highlighting:
- Key technical skills to focus on
- Missing areas to improve
- Daily/weekly schedule"#;
