//! Prompt constants and builders for the career mentor.

use crate::models::profile::StudentProfile;

/// System prompt for profile analysis — enforces structured JSON output.
pub const ANALYSIS_SYSTEM: &str = "You are CareerCompass, a friendly AI career mentor. \
    Provide structured, actionable career guidance in JSON format. \
    Be encouraging and specific.";

/// Mentor persona for free-form chat.
const CHAT_PERSONA: &str = "You are CareerCompass, an AI-powered career mentor. \
You help students discover their interests, strengths, and career opportunities.

Your communication style:
- Friendly, modern, and motivating like a mentor
- Use structured answers with emojis (\u{2705} Your strengths, \u{1F4D8} Suggested skills, \u{1F680} Career opportunities)
- Provide actionable, specific advice
- Never give generic responses - always personalize
- Keep responses concise but insightful";

fn or_not_specified(field: Option<&str>) -> &str {
    match field {
        Some(s) if !s.trim().is_empty() => s,
        _ => "Not specified",
    }
}

fn interests_line(interests: &[String]) -> String {
    if interests.is_empty() {
        "Not specified".to_string()
    } else {
        interests.join(", ")
    }
}

/// Builds the analysis prompt embedding every profile field. Missing optional
/// fields are rendered as "Not specified" so the model never sees gaps.
pub fn build_analysis_prompt(profile: &StudentProfile) -> String {
    format!(
        r#"Analyze this student profile and provide personalized career guidance.

Student Profile:
- Name: {name}
- Age: {age}
- Education: {education}
- Field of Study: {field}
- Interests: {interests}
- Skills: {skills}
- Hobbies: {hobbies}
- Career Goals: {goals}
- Work Style: {work_style}
- Areas to Improve: {improvement}

Provide a comprehensive analysis with:
1. Key strengths (4-6 items)
2. Career opportunities (3-4 specific roles with match percentage, description, and market demand)
3. Skills to learn (3-4 skills with priority level and relevance percentage)
4. 6-month learning roadmap (3 phases with duration, resources)

Respond in JSON format matching this structure:
{{
  "strengths": ["strength1", "strength2", ...],
  "careerOpportunities": [
    {{
      "title": "Job Title",
      "match": 95,
      "description": "Brief description",
      "demand": "High demand" | "Growing field" | "Stable market"
    }}
  ],
  "skillsToLearn": [
    {{
      "skill": "Skill Name",
      "priority": "High" | "Medium" | "Low",
      "relevance": 90
    }}
  ],
  "learningRoadmap": [
    {{
      "phase": "1",
      "duration": "Month 1-2",
      "title": "Phase Title",
      "description": "What to focus on",
      "resources": ["Resource 1", "Resource 2"]
    }}
  ]
}}"#,
        name = profile.full_name,
        age = profile.age,
        education = profile.education_level,
        field = or_not_specified(profile.field_of_study.as_deref()),
        interests = interests_line(&profile.interests),
        skills = or_not_specified(profile.skills.as_deref()),
        hobbies = or_not_specified(profile.hobbies.as_deref()),
        goals = or_not_specified(profile.career_goals.as_deref()),
        work_style = or_not_specified(profile.work_style.as_deref()),
        improvement = or_not_specified(profile.improvement_areas.as_deref()),
    )
}

/// Builds the chat system prompt, embedding a condensed profile summary when
/// one is available.
pub fn build_chat_system(profile: Option<&StudentProfile>) -> String {
    let context = match profile {
        Some(p) => format!(
            "\n\nStudent Context:\n\
             - Name: {}\n\
             - Education: {}\n\
             - Interests: {}\n\
             - Skills: {}\n\
             - Goals: {}\n",
            p.full_name,
            p.education_level,
            interests_line(&p.interests),
            or_not_specified(p.skills.as_deref()),
            or_not_specified(p.career_goals.as_deref()),
        ),
        None => String::new(),
    };

    format!(
        "{CHAT_PERSONA}{context}\n\nAlways provide helpful, encouraging, and practical career advice."
    )
}
