use chrono::NaiveDate;
use deadpool_sqlite::Pool;
use shared::{
    model::{Exercise, ExerciseFilter, NewExercise, ValidateModel},
    types::Uuid,
};
use tracing::{debug, instrument};

use super::StoreError;

#[derive(Debug, Clone)]
pub struct ExerciseStore {
    pool: Pool,
}

impl ExerciseStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Persists an exercise for `user_id`, dated today if `date` is `None`
    ///
    /// The caller is expected to have checked the user exists. The foreign key
    /// rejects the write otherwise.
    #[instrument(skip(self))]
    pub async fn create_exercise(
        &self,
        user_id: Uuid,
        description: String,
        duration: f64,
        date: Option<NaiveDate>,
    ) -> Result<Exercise, StoreError> {
        let new_exercise = NewExercise::new(user_id, description, duration, date);
        new_exercise.validate()?;

        let conn = self.pool.get().await?;
        let exercise = conn
            .interact(move |conn| Exercise::create(conn, new_exercise))
            .await??;

        debug!(id = %exercise.id, date = %exercise.date, "Created exercise");
        Ok(exercise)
    }

    #[instrument(skip(self))]
    pub async fn find_user_exercises(
        &self,
        filter: ExerciseFilter,
    ) -> Result<Vec<Exercise>, StoreError> {
        let conn = self.pool.get().await?;
        let exercises = conn
            .interact(move |conn| Exercise::fetch_filtered(conn, &filter))
            .await??;

        Ok(exercises)
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use shared::{model::ExerciseFilter, types::Uuid, utils::date::today};

    use super::ExerciseStore;
    use crate::store::{test_util::temp_pool, StoreError, UserStore};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn stores() -> (tempfile::TempDir, UserStore, ExerciseStore) {
        let (dir, pool) = temp_pool().await;
        (dir, UserStore::new(pool.clone()), ExerciseStore::new(pool))
    }

    #[tokio::test]
    async fn test_missing_date_is_today_and_in_default_range() {
        let (_dir, users, exercises) = stores().await;
        let user = users.create_user("alice".into()).await.unwrap();

        let created = exercises
            .create_exercise(user.id, "run".into(), 30.0, None)
            .await
            .unwrap();
        assert_eq!(created.date, today());
        assert_eq!(created.user_id, user.id);

        let found = exercises
            .find_user_exercises(ExerciseFilter::new(user.id))
            .await
            .unwrap();
        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn test_explicit_date_round_trips() {
        let (_dir, users, exercises) = stores().await;
        let user = users.create_user("alice".into()).await.unwrap();

        exercises
            .create_exercise(user.id, "swim".into(), 45.5, Some(ymd(1999, 12, 31)))
            .await
            .unwrap();

        let found = exercises
            .find_user_exercises(ExerciseFilter::new(user.id))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date, ymd(1999, 12, 31));
        assert_eq!(found[0].duration, 45.5);
        assert_eq!(found[0].description, "swim");
    }

    #[tokio::test]
    async fn test_range_is_inclusive_and_per_user() {
        let (_dir, users, exercises) = stores().await;
        let alice = users.create_user("alice".into()).await.unwrap();
        let bob = users.create_user("bob".into()).await.unwrap();

        for day in [1, 10, 20, 31] {
            exercises
                .create_exercise(alice.id, format!("day {day}"), 10.0, Some(ymd(2021, 1, day)))
                .await
                .unwrap();
        }
        exercises
            .create_exercise(bob.id, "day 15".into(), 10.0, Some(ymd(2021, 1, 15)))
            .await
            .unwrap();

        let filter = ExerciseFilter::new(alice.id)
            .from(Some(ymd(2021, 1, 10)))
            .to(Some(ymd(2021, 1, 20)));
        let found = exercises.find_user_exercises(filter).await.unwrap();

        assert_eq!(
            found.iter().map(|e| e.date).collect::<Vec<_>>(),
            vec![ymd(2021, 1, 10), ymd(2021, 1, 20)]
        );
        assert!(found.iter().all(|e| e.user_id == alice.id));
    }

    #[tokio::test]
    async fn test_limit_caps_results() {
        let (_dir, users, exercises) = stores().await;
        let user = users.create_user("alice".into()).await.unwrap();

        for minutes in 1..=5 {
            exercises
                .create_exercise(user.id, "lap".into(), minutes as f64, None)
                .await
                .unwrap();
        }

        for (limit, expected) in [(Some(2), 2), (Some(5), 5), (Some(9), 5), (Some(0), 5), (Some(-3), 5), (None, 5)] {
            let found = exercises
                .find_user_exercises(ExerciseFilter::new(user.id).limit(limit))
                .await
                .unwrap();
            assert_eq!(found.len(), expected, "limit {limit:?}");
        }
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty() {
        let (_dir, users, exercises) = stores().await;
        let user = users.create_user("alice".into()).await.unwrap();
        exercises
            .create_exercise(user.id, "run".into(), 30.0, Some(ymd(2020, 6, 1)))
            .await
            .unwrap();

        let filter = ExerciseFilter::new(user.id)
            .from(Some(ymd(2020, 7, 1)))
            .to(Some(ymd(2020, 5, 1)));
        assert!(exercises.find_user_exercises(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_is_rejected_by_foreign_key() {
        let (_dir, _users, exercises) = stores().await;

        let err = exercises
            .create_exercise(Uuid::new_v4(), "run".into(), 30.0, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_non_finite_duration_is_rejected() {
        let (_dir, users, exercises) = stores().await;
        let user = users.create_user("alice".into()).await.unwrap();

        let err = exercises
            .create_exercise(user.id, "run".into(), f64::INFINITY, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)), "{err:?}");

        let found = exercises
            .find_user_exercises(ExerciseFilter::new(user.id))
            .await
            .unwrap();
        assert!(found.is_empty());
    }
}
