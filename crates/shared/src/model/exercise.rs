use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::ValidateModel,
    types::Uuid,
    utils::date::{epoch_date, today},
};

#[cfg(feature = "backend")]
use {
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{enum_def, Expr, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Minutes
    pub duration: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct NewExercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: f64,
    pub date: NaiveDate,
}

impl NewExercise {
    /// A missing date means the exercise happened today
    pub fn new<T: Into<String>>(
        user_id: Uuid,
        description: T,
        duration: f64,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description: description.into(),
            duration,
            date: date.unwrap_or_else(today),
        }
    }
}

impl ValidateModel for NewExercise {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.duration.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Duration needs to be a finite number of minutes, got {}",
                self.duration
            )))
        }
    }
}

/// Selects a user's exercises within an inclusive date range
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub limit: Option<u64>,
}

impl ExerciseFilter {
    /// Everything from the epoch up to and including today, unlimited
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: epoch_date(),
            to: today(),
            limit: None,
        }
    }

    /// Keeps the default lower bound when `from` is `None`
    pub fn from(mut self, from: Option<NaiveDate>) -> Self {
        if let Some(from) = from {
            self.from = from;
        }
        self
    }

    /// Keeps the default upper bound when `to` is `None`
    pub fn to(mut self, to: Option<NaiveDate>) -> Self {
        if let Some(to) = to {
            self.to = to;
        }
        self
    }

    /// Zero and negative limits mean no limit
    pub fn limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit.filter(|l| *l > 0).map(|l| l as u64);
        self
    }

    /// Parses a raw `limit` query value
    ///
    /// Only the leading integer counts, so `2.5` is 2 and `3abc` is 3. A value
    /// that doesn't start with a (signed) digit is `None`.
    pub fn parse_limit<S: AsRef<str>>(value: Option<S>) -> Option<i64> {
        let value = value?;
        let value = value.as_ref().trim_start();

        let digits_start = usize::from(value.starts_with(['+', '-']));
        let digits_len = value[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits_len == 0 {
            return None;
        }

        match value[..digits_start + digits_len].parse::<i64>() {
            Ok(limit) => Some(limit),
            // Too many digits for an i64 is still a huge positive or negative limit
            Err(_) if value.starts_with('-') => Some(i64::MIN),
            Err(_) => Some(i64::MAX),
        }
    }

    pub fn is_empty_range(&self) -> bool {
        self.from > self.to
    }
}

#[cfg(feature = "backend")]
impl Exercise {
    fn select() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Exercise, rusqlite::Error> {
        let (sql, values) = Self::select()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row)?;
        Ok(res)
    }

    /// Exercises matching `filter`, oldest date first, ties in insertion order
    pub fn fetch_filtered(
        conn: &Connection,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        if filter.is_empty_range() {
            return Ok(Vec::new());
        }

        let mut query = Self::select();
        query
            .and_where(Expr::col(ExerciseIden::UserId).eq(&filter.user_id))
            .and_where(Expr::col(ExerciseIden::Date).gte(filter.from))
            .and_where(Expr::col(ExerciseIden::Date).lte(filter.to))
            .order_by(ExerciseIden::Date, Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc);
        if let Some(limit) = filter.limit {
            query.limit(limit);
        }
        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(conn: &mut Connection, new_exercise: NewExercise) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &new_exercise.id)?
        };
        tx.commit()?;

        Ok(exercise)
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::{ExerciseFilter, NewExercise};
    use crate::{model::ValidateModel, types::Uuid, utils::date::today};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_exercise_defaults_to_today() {
        let e = NewExercise::new(Uuid::new_v4(), "run", 30.0, None);
        assert_eq!(e.date, today());

        let e = NewExercise::new(Uuid::new_v4(), "run", 30.0, Some(ymd(1990, 1, 1)));
        assert_eq!(e.date, ymd(1990, 1, 1));
    }

    #[test]
    fn test_validate_duration() {
        let user_id = Uuid::new_v4();
        assert!(NewExercise::new(user_id, "swim", 12.5, None).validate().is_ok());
        assert!(NewExercise::new(user_id, "swim", -1.0, None).validate().is_ok());
        assert!(NewExercise::new(user_id, "swim", f64::NAN, None).validate().is_err());
        assert!(NewExercise::new(user_id, "swim", f64::INFINITY, None).validate().is_err());
    }

    #[test]
    fn test_filter_defaults_and_overrides() {
        let user_id = Uuid::new_v4();
        let filter = ExerciseFilter::new(user_id);
        assert_eq!(filter.from, ymd(1970, 1, 1));
        assert_eq!(filter.to, today());
        assert_eq!(filter.limit, None);

        let filter = ExerciseFilter::new(user_id)
            .from(Some(ymd(2020, 1, 1)))
            .to(None)
            .limit(Some(2));
        assert_eq!(filter.from, ymd(2020, 1, 1));
        assert_eq!(filter.to, today());
        assert_eq!(filter.limit, Some(2));
    }

    #[test]
    fn test_filter_limit_normalization() {
        let user_id = Uuid::new_v4();
        assert_eq!(ExerciseFilter::new(user_id).limit(Some(0)).limit, None);
        assert_eq!(ExerciseFilter::new(user_id).limit(Some(-4)).limit, None);
        assert_eq!(ExerciseFilter::new(user_id).limit(None).limit, None);

        assert_eq!(ExerciseFilter::parse_limit(Some("7")), Some(7));
        assert_eq!(ExerciseFilter::parse_limit(Some("-1")), Some(-1));
        assert_eq!(ExerciseFilter::parse_limit(Some("lots")), None);
        assert_eq!(ExerciseFilter::parse_limit(None::<&str>), None);
    }

    #[test]
    fn test_parse_limit_keeps_leading_integer() {
        assert_eq!(ExerciseFilter::parse_limit(Some("2.5")), Some(2));
        assert_eq!(ExerciseFilter::parse_limit(Some("3abc")), Some(3));
        assert_eq!(ExerciseFilter::parse_limit(Some(" +4 ")), Some(4));
        assert_eq!(ExerciseFilter::parse_limit(Some("-2.9")), Some(-2));
        assert_eq!(ExerciseFilter::parse_limit(Some("99999999999999999999")), Some(i64::MAX));

        assert_eq!(ExerciseFilter::parse_limit(Some("")), None);
        assert_eq!(ExerciseFilter::parse_limit(Some("-")), None);
        assert_eq!(ExerciseFilter::parse_limit(Some(".5")), None);
        assert_eq!(ExerciseFilter::parse_limit(Some("abc3")), None);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let filter = ExerciseFilter::new(Uuid::new_v4())
            .from(Some(ymd(2022, 5, 1)))
            .to(Some(ymd(2022, 4, 1)));
        assert!(filter.is_empty_range());
    }
}
