// Chat-with-resume prompt templates.

pub const CHAT_SYSTEM: &str = "You are an AI assistant that gives detailed, step-by-step, \
    professional answers based only on the given resume.";

pub const OFF_TOPIC_REPLY: &str = "I can only answer based on the resume.";

/// Replace: {resume_text}, {chat_history}, {off_topic_reply}, {question}
pub const CHAT_PROMPT_TEMPLATE: &str = r#"Resume:
"""
{resume_text}
"""

Conversation so far:
{chat_history}

Rules:
1. Always analyze the question before answering.
2. Provide at least 3-5 sentences per answer (structured and professional).
3. Only answer based on the resume.
4. If unrelated to the resume, reply: "{off_topic_reply}"
5. Use formatting (bullet points, numbered steps) if it improves clarity.

Q: {question}
A:"#;
