// All LLM prompt constants for the coaching module.
// Templates use `{placeholder}` markers filled via `.replace` before sending.
// Strict-JSON operations compose their system prompt with
// llm_client::prompts::JSON_ONLY_SYSTEM.

/// System prompt for identity statement generation.
pub const IDENTITY_SYSTEM: &str = "You are a professional career counselor and resume writer. \
    Create compelling career identity statements that help job seekers stand out.";

/// Identity prompt template.
/// Replace: {current_role}, {years_experience}, {education}, {skills},
///          {interests}, {achievements}, {career_goals}
pub const IDENTITY_PROMPT_TEMPLATE: &str = r#"Create a professional Career Identity Statement for someone with the following background:

Current Role: {current_role}
Experience Level: {years_experience}
Education: {education}
Key Skills: {skills}
Interests: {interests}
Achievements: {achievements}
Career Goals: {career_goals}

Generate a compelling 2-3 sentence Career Identity Statement that:
1. Highlights their unique value proposition
2. Emphasizes transferable skills
3. Connects their background to future opportunities
4. Is suitable for resumes and professional profiles
5. Sounds professional and confident

Keep it concise but impactful, focusing on what makes them valuable to employers."#;

/// System prompt for resume optimization. JSON-only output is enforced by
/// appending `JSON_ONLY_SYSTEM` at the call site.
pub const OPTIMIZE_SYSTEM: &str = "You are an expert resume writer and ATS optimization \
    specialist. Provide specific, actionable advice for resume improvement.";

/// Resume optimization prompt template.
/// Replace: {job_title}, {company}, {job_description}, {resume}
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Analyze this job posting and provide resume optimization suggestions:

Job Title: {job_title}
Company: {company}
Job Description: {job_description}

Current Resume:
{resume}

Return a JSON object with this EXACT schema (no extra fields):
{
  "guide": "A structured improvement guide covering: key skills to highlight, how to tailor the professional summary, important ATS keywords, and achievement metrics to emphasize.",
  "jobEdits": [
    {
      "jobIndex": 0,
      "company": "Company name from the resume",
      "role": "Role title from the resume",
      "period": "Employment period from the resume",
      "bullets": [
        {
          "original": "The original bullet text",
          "improved": "A stronger rewrite tailored to the job posting",
          "rationale": "One sentence explaining the improvement",
          "keywords": ["ATS", "keywords", "introduced"]
        }
      ]
    }
  ],
  "proTips": [
    "High-level resume advice specific to this job posting"
  ]
}

Rules:
- Include one jobEdits entry per job in the resume, in order, with jobIndex counting from 0.
- If the resume is plain text without clear jobs, return an empty jobEdits array and put all advice in the guide.
- Every improved bullet must stay factual to the original; strengthen verbs and add metrics only where the original implies them."#;

/// System prompt for single-bullet rewriting. JSON-only output is enforced by
/// appending `JSON_ONLY_SYSTEM` at the call site.
pub const REWRITE_SYSTEM: &str = "You are an expert resume writer. \
    Rewrite resume bullets to be stronger, quantified, and tailored to a target job.";

/// Bullet rewrite prompt template.
/// Replace: {job_title}, {company}, {job_description}, {original}, {context}
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite one resume bullet for this job application:

Job Title: {job_title}
Company: {company}
Job Description: {job_description}
Bullet Context: {context}

Original bullet:
{original}

Return a JSON object with this EXACT schema (no extra fields):
{
  "improved": "The rewritten bullet",
  "rationale": "One sentence explaining why the rewrite is stronger",
  "keywords": ["keywords", "from", "the", "job", "description"]
}

Rules:
- Lead with a strong action verb.
- Keep every fact from the original; do not invent metrics.
- Weave in job-description keywords only where they fit naturally."#;

/// System prompt for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional career counselor specializing \
    in cover letter writing. Create compelling, personalized cover letters that help \
    candidates stand out.";

/// Cover letter prompt template.
/// Replace: {job_title}, {company}, {job_description}, {user_context}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for this job application:

Job Title: {job_title}
Company: {company}
Job Description: {job_description}
{user_context}
Create a compelling cover letter that:
1. Shows genuine interest in the role and company
2. Highlights relevant qualifications and experience
3. Demonstrates knowledge of the company/industry
4. Includes specific examples of achievements
5. Has a strong closing with call to action
6. Is professional yet personable
7. Is 3-4 paragraphs long

Format as a complete cover letter with proper structure."#;

/// System prompt for career match scoring.
pub const MATCH_SYSTEM: &str = "You are a career matching specialist. \
    Analyze user-career compatibility and provide numeric match scores.";

/// Career match prompt template.
/// Replace: {current_role}, {skills}, {years_experience}, {interests},
///          {career_goals}, {career_title}, {career_skills},
///          {career_description}, {career_category}
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Analyze how well this user profile matches this career opportunity:

User Profile:
- Current Role: {current_role}
- Skills: {skills}
- Experience: {years_experience}
- Interests: {interests}
- Goals: {career_goals}

Career Opportunity:
- Title: {career_title}
- Required Skills: {career_skills}
- Description: {career_description}
- Category: {career_category}

Provide a match score from 0-100 based on:
1. Skills alignment (40%)
2. Experience relevance (30%)
3. Interest compatibility (20%)
4. Career progression fit (10%)

Return only the numeric score (0-100)."#;
