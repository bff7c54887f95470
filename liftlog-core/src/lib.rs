//! LiftLog Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types - no business logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Workout template identifier using UUIDv7 for timestamp-sortable IDs.
pub type TemplateId = Uuid;

/// Workout program identifier using UUIDv7 for timestamp-sortable IDs.
pub type ProgramId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 template ID (timestamp-sortable).
pub fn new_template_id() -> TemplateId {
    Uuid::now_v7()
}

/// Generate a new UUIDv7 program ID (timestamp-sortable).
pub fn new_program_id() -> ProgramId {
    Uuid::now_v7()
}

// ============================================================================
// ENUMS
// ============================================================================

/// Training day category, used to group templates and drive suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FullBody,
    Cardio,
    Rest,
}

impl DayType {
    /// Canonical lowercase name, matching the key format of the
    /// template-suggestions index.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Push => "push",
            DayType::Pull => "pull",
            DayType::Legs => "legs",
            DayType::Upper => "upper",
            DayType::Lower => "lower",
            DayType::FullBody => "fullbody",
            DayType::Cardio => "cardio",
            DayType::Rest => "rest",
        }
    }
}

// ============================================================================
// ENTITIES
// ============================================================================

/// One exercise slot inside a workout template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub rest_seconds: Option<u32>,
}

/// Workout template - a reusable plan for a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub template_id: TemplateId,
    pub name: String,
    pub day_type: DayType,
    pub exercises: Vec<TemplateExercise>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub last_used: Option<Timestamp>,
}

/// Workout program - an ordered collection of templates followed over weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutProgram {
    pub program_id: ProgramId,
    pub name: String,
    pub description: Option<String>,
    pub template_ids: Vec<TemplateId>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A single logged set for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub reps: u32,
    pub weight_kg: f64,
}

/// One completed session's worth of sets for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub performed_at: Timestamp,
    pub template_id: Option<TemplateId>,
    pub sets: Vec<SetRecord>,
}

/// Full logged history for one exercise, keyed by exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    pub exercise_name: String,
    pub entries: Vec<HistoryEntry>,
}

/// Summary information about one named day in a program schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTypeInfo {
    pub day_name: String,
    pub day_type: DayType,
    pub last_performed: Option<Timestamp>,
    pub template_ids: Vec<TemplateId>,
}

/// Lightweight reference to a template, used by the suggestions index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateRef {
    pub template_id: TemplateId,
    pub name: String,
    pub day_type: DayType,
}

impl From<&WorkoutTemplate> for TemplateRef {
    fn from(template: &WorkoutTemplate) -> Self {
        Self {
            template_id: template.template_id,
            name: template.name.clone(),
            day_type: template.day_type,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template(name: &str, day_type: DayType) -> WorkoutTemplate {
        WorkoutTemplate {
            template_id: new_template_id(),
            name: name.to_string(),
            day_type,
            exercises: vec![TemplateExercise {
                name: "Bench Press".to_string(),
                sets: 3,
                reps: 8,
                weight_kg: Some(80.0),
                rest_seconds: Some(120),
            }],
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_used: None,
        }
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_template_id();
        let b = new_template_id();
        assert_ne!(a, b);

        let c = new_program_id();
        let d = new_program_id();
        assert_ne!(c, d);
    }

    #[test]
    fn test_uuidv7_ids_are_time_sortable() {
        let earlier = new_template_id();
        let later = new_template_id();
        assert!(earlier < later);
    }

    #[test]
    fn test_template_ref_from_template() {
        let template = make_template("Push Day A", DayType::Push);
        let template_ref = TemplateRef::from(&template);

        assert_eq!(template_ref.template_id, template.template_id);
        assert_eq!(template_ref.name, "Push Day A");
        assert_eq!(template_ref.day_type, DayType::Push);
    }

    #[test]
    fn test_day_type_as_str_is_lowercase() {
        let all = [
            DayType::Push,
            DayType::Pull,
            DayType::Legs,
            DayType::Upper,
            DayType::Lower,
            DayType::FullBody,
            DayType::Cardio,
            DayType::Rest,
        ];
        for day_type in all {
            let s = day_type.as_str();
            assert_eq!(s, s.to_lowercase());
        }
    }

    #[test]
    fn test_template_serde_roundtrip() {
        let template = make_template("Legs", DayType::Legs);
        let json = serde_json::to_string(&template).expect("serialize");
        let back: WorkoutTemplate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(template, back);
    }

    #[test]
    fn test_history_serde_roundtrip() {
        let history = ExerciseHistory {
            exercise_name: "Deadlift".to_string(),
            entries: vec![HistoryEntry {
                performed_at: Utc::now(),
                template_id: Some(new_template_id()),
                sets: vec![SetRecord {
                    reps: 5,
                    weight_kg: 140.0,
                }],
            }],
        };
        let json = serde_json::to_string(&history).expect("serialize");
        let back: ExerciseHistory = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(history, back);
    }
}
