//! Request and response bodies of the `/api/users` endpoints

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    model::{Exercise, User},
    types::Uuid,
    utils::date::display_date,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub description: String,
    pub duration: f64,
    /// An empty string is treated the same as a missing date
    #[serde(default)]
    pub date: Option<String>,
}

impl CreateExerciseRequest {
    /// The raw date if one was actually supplied
    pub fn date(&self) -> Option<&str> {
        self.date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole minutes go out as a json integer (`30` not `30.0`)
fn serialize_duration<S: Serializer>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if duration.fract() == 0.0 && duration.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
    /// Id of the user the exercise belongs to
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: display_date(&exercise.date),
            id: user.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            date: display_date(&exercise.date),
            description: exercise.description,
            duration: exercise.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: &User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            username: user.username.clone(),
            count: log.len(),
            log,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_blank_date_is_absent() {
        let mut req = CreateExerciseRequest {
            description: "run".into(),
            duration: 30.0,
            date: Some("".into()),
        };
        assert_eq!(req.date(), None);

        req.date = Some("  ".into());
        assert_eq!(req.date(), None);

        req.date = Some("2020-02-02".into());
        assert_eq!(req.date(), Some("2020-02-02"));
    }

    #[test]
    fn test_log_response_shape() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
        };
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: user.id,
            description: "run".into(),
            duration: 30.0,
            date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };

        let res = LogResponse::new(&user, vec![exercise.clone()]);
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            serde_json::json!({
                "username": "alice",
                "count": 1,
                "log": [{ "description": "run", "duration": 30, "date": "Mon Jan 01 1990" }],
            })
        );

        let res = ExerciseResponse::new(&user, &exercise);
        assert_eq!(res.id, user.id);
        assert_eq!(res.date, "Mon Jan 01 1990");
    }

    #[test]
    fn test_duration_serialization() {
        let entry = |duration| LogEntry {
            description: "lap".into(),
            duration,
            date: "Mon Jan 01 1990".into(),
        };

        let json = serde_json::to_string(&entry(30.0)).unwrap();
        assert!(json.contains(r#""duration":30,"#), "{json}");

        let json = serde_json::to_string(&entry(12.5)).unwrap();
        assert!(json.contains(r#""duration":12.5,"#), "{json}");

        let json = serde_json::to_string(&entry(-4.0)).unwrap();
        assert!(json.contains(r#""duration":-4,"#), "{json}");
    }
}
