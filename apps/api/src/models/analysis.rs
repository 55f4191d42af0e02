use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recommended role with a 0-100 fit percentage and a market demand
/// category (e.g. "High demand", "Growing field", "Stable market").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerOpportunity {
    pub title: String,
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub description: String,
    pub demand: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillToLearn {
    pub skill: String,
    pub priority: SkillPriority,
    /// Relevance to the student's goals, 0-100.
    pub relevance: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub title: String,
    pub description: String,
    pub resources: Vec<String>,
}

/// The structured career guidance returned by the AI for one profile.
/// This is the LLM output shape: strengths (4-6), careerOpportunities (3-4),
/// skillsToLearn (3-4), learningRoadmap (3 phases).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub strengths: Vec<String>,
    pub career_opportunities: Vec<CareerOpportunity>,
    pub skills_to_learn: Vec<SkillToLearn>,
    pub learning_roadmap: Vec<RoadmapPhase>,
}

/// Stored career analysis, at most one per profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub strengths: Vec<String>,
    pub career_opportunities: Vec<CareerOpportunity>,
    pub skills_to_learn: Vec<SkillToLearn>,
    pub learning_roadmap: Vec<RoadmapPhase>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down fixture in the exact shape the analysis prompt requests.
    const ANALYSIS_JSON: &str = r#"{
        "strengths": ["Curious", "Analytical", "Self-directed", "Creative"],
        "careerOpportunities": [
            {
                "title": "Software Developer",
                "match": 92,
                "description": "Builds applications end to end",
                "demand": "High demand"
            },
            {
                "title": "Data Analyst",
                "match": 84,
                "description": "Turns data into decisions",
                "demand": "Growing field"
            },
            {
                "title": "QA Engineer",
                "match": 75,
                "description": "Owns product quality",
                "demand": "Stable market"
            }
        ],
        "skillsToLearn": [
            {"skill": "Python", "priority": "High", "relevance": 95},
            {"skill": "SQL", "priority": "Medium", "relevance": 80},
            {"skill": "Git", "priority": "Low", "relevance": 70}
        ],
        "learningRoadmap": [
            {
                "phase": "1",
                "duration": "Month 1-2",
                "title": "Foundations",
                "description": "Core programming concepts",
                "resources": ["freeCodeCamp", "CS50"]
            },
            {
                "phase": "2",
                "duration": "Month 3-4",
                "title": "Projects",
                "description": "Build two portfolio projects",
                "resources": ["GitHub"]
            },
            {
                "phase": "3",
                "duration": "Month 5-6",
                "title": "Job readiness",
                "description": "Interview preparation",
                "resources": ["LeetCode"]
            }
        ]
    }"#;

    #[test]
    fn test_analysis_result_deserializes_from_model_output() {
        let result: AnalysisResult = serde_json::from_str(ANALYSIS_JSON).unwrap();
        assert_eq!(result.strengths.len(), 4);
        assert_eq!(result.career_opportunities.len(), 3);
        assert_eq!(result.career_opportunities[0].match_percent, 92);
        assert_eq!(result.skills_to_learn.len(), 3);
        assert_eq!(result.skills_to_learn[0].priority, SkillPriority::High);
        assert_eq!(result.learning_roadmap.len(), 3);
        assert_eq!(result.learning_roadmap[2].resources, vec!["LeetCode"]);
    }

    #[test]
    fn test_opportunity_serializes_match_keyword() {
        let opp = CareerOpportunity {
            title: "UX Designer".to_string(),
            match_percent: 88,
            description: "Designs user experiences".to_string(),
            demand: "Growing field".to_string(),
        };
        let json = serde_json::to_value(&opp).unwrap();
        assert_eq!(json["match"], 88);
    }

    #[test]
    fn test_priority_round_trips_as_title_case() {
        let p: SkillPriority = serde_json::from_str(r#""Medium""#).unwrap();
        assert_eq!(p, SkillPriority::Medium);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#""Medium""#);
    }
}
