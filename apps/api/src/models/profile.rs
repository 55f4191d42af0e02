use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student's self-reported attributes, used to personalize all AI output.
/// Created on form submission and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: Uuid,
    pub full_name: String,
    /// Age bracket as submitted by the form (e.g. "19-21"), not a number.
    pub age: String,
    pub education_level: String,
    pub field_of_study: Option<String>,
    pub interests: Vec<String>,
    pub skills: Option<String>,
    pub hobbies: Option<String>,
    pub career_goals: Option<String>,
    pub work_style: Option<String>,
    pub improvement_areas: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for profile creation. `id` and `created_at` are
/// server-assigned.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[serde(default)]
    pub career_goals: Option<String>,
    #[serde(default)]
    pub work_style: Option<String>,
    #[serde(default)]
    pub improvement_areas: Option<String>,
}

impl ProfileInput {
    /// Validates the required fields. Must pass before the profile is stored
    /// and before any AI call is made on its behalf.
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("fullName is required".to_string());
        }
        if self.age.trim().is_empty() {
            return Err("age is required".to_string());
        }
        if self.education_level.trim().is_empty() {
            return Err("educationLevel is required".to_string());
        }
        if self.interests.iter().all(|i| i.trim().is_empty()) {
            return Err("at least one interest is required".to_string());
        }
        Ok(())
    }
}

/// Partial update for an existing profile. Fields left `None` are preserved
/// (shallow merge).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub age: Option<String>,
    pub education_level: Option<String>,
    pub field_of_study: Option<String>,
    pub interests: Option<Vec<String>>,
    pub skills: Option<String>,
    pub hobbies: Option<String>,
    pub career_goals: Option<String>,
    pub work_style: Option<String>,
    pub improvement_areas: Option<String>,
}

impl StudentProfile {
    /// Applies a shallow merge: patch fields that are present overwrite,
    /// absent fields keep their existing value.
    pub fn merged(mut self, patch: ProfilePatch) -> Self {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.age {
            self.age = v;
        }
        if let Some(v) = patch.education_level {
            self.education_level = v;
        }
        if let Some(v) = patch.field_of_study {
            self.field_of_study = Some(v);
        }
        if let Some(v) = patch.interests {
            self.interests = v;
        }
        if let Some(v) = patch.skills {
            self.skills = Some(v);
        }
        if let Some(v) = patch.hobbies {
            self.hobbies = Some(v);
        }
        if let Some(v) = patch.career_goals {
            self.career_goals = Some(v);
        }
        if let Some(v) = patch.work_style {
            self.work_style = Some(v);
        }
        if let Some(v) = patch.improvement_areas {
            self.improvement_areas = Some(v);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProfileInput {
        ProfileInput {
            full_name: "Ana".to_string(),
            age: "19-21".to_string(),
            education_level: "Undergraduate".to_string(),
            interests: vec!["Technology".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_empty_full_name_rejected() {
        let mut input = valid_input();
        input.full_name = "   ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_empty_interests_rejected() {
        let mut input = valid_input();
        input.interests = vec![];
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_blank_interest_entries_rejected() {
        let mut input = valid_input();
        input.interests = vec!["".to_string(), "  ".to_string()];
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_input_deserializes_from_camel_case() {
        let json = r#"{
            "fullName": "Ana",
            "age": "19-21",
            "educationLevel": "Undergraduate",
            "interests": ["Technology"]
        }"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.full_name, "Ana");
        assert!(input.field_of_study.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_merged_preserves_absent_fields() {
        let profile = StudentProfile {
            id: Uuid::new_v4(),
            full_name: "Ana".to_string(),
            age: "19-21".to_string(),
            education_level: "Undergraduate".to_string(),
            field_of_study: Some("CS".to_string()),
            interests: vec!["Technology".to_string()],
            skills: None,
            hobbies: None,
            career_goals: None,
            work_style: None,
            improvement_areas: None,
            created_at: Utc::now(),
        };

        let patch = ProfilePatch {
            skills: Some("Python".to_string()),
            ..Default::default()
        };

        let merged = profile.clone().merged(patch);
        assert_eq!(merged.skills.as_deref(), Some("Python"));
        assert_eq!(merged.full_name, "Ana");
        assert_eq!(merged.field_of_study.as_deref(), Some("CS"));
        assert_eq!(merged.id, profile.id);
    }
}
