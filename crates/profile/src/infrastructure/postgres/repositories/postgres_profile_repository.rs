// crates/profile/src/infrastructure/postgres/repositories/postgres_profile_repository.rs

use crate::domain::entities::Profile;
use crate::domain::models::{ProfileListItem, ProfileListQuery};
use crate::domain::params::ProfilePatch;
use crate::domain::repositories::ProfileRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::{PostgresProfileListRow, PostgresProfileRow, PROFILE_COLUMNS};
use async_trait::async_trait;
use chrono::{DateTime, Months, NaiveDate, Utc};
use shared_kernel::application::PageResponse;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::{EntityMetadata, EntityOptionExt};
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;
use std::sync::Arc;

/// Candidats éligibles de la recherche de proximité, sans borne de rayon.
/// $1 demandeur, $2 genre recherché, $3 date de naissance max, $4 date de naissance min (exclue).
const NEARBY_CANDIDATES: &str = r#"
    WITH requester AS (
        SELECT location FROM navigators WHERE profile_id = $1
    ),
    candidates AS (
        SELECT
            p.id, p.display_name, p.birthday, p.gender, p.location, p.last_online,
            ST_Distance(n.location, r.location, false) AS distance
        FROM profiles p
        JOIN statuses s ON s.profile_id = p.id
        LEFT JOIN navigators n ON n.profile_id = p.id
        LEFT JOIN requester r ON TRUE
        WHERE p.id <> $1
          AND s.is_frozen = FALSE
          AND s.is_blocked = FALSE
          AND ($2::text = 'all' OR p.gender = $2::text)
          AND p.birthday <= $3
          AND p.birthday > $4
          AND NOT EXISTS (
              SELECT 1 FROM blocks b
              WHERE b.profile_id = $1 AND b.blocked_profile_id = p.id
          )
    )
"#;

pub struct PostgresProfileRepository {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

/// Bornes de naissance équivalentes à `from <= âge <= to` au jour donné
fn birthday_bounds(today: NaiveDate, from: u8, to: u8) -> (NaiveDate, NaiveDate) {
    let latest = today
        .checked_sub_months(Months::new(12 * from as u32))
        .unwrap_or(NaiveDate::MIN);
    let earliest_excluded = today
        .checked_sub_months(Months::new(12 * (to as u32 + 1)))
        .unwrap_or(NaiveDate::MIN);
    (latest, earliest_excluded)
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn add(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<Profile> {
        let pool = self.pool.clone();
        let p = profile.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                INSERT INTO profiles (
                    id, display_name, birthday, gender, location, description,
                    height, weight, last_online, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING {PROFILE_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresProfileRow>(&sql)
                .bind(p.id.value())
                .bind(p.display_name.as_str())
                .bind(p.birthday)
                .bind(p.gender.as_str())
                .bind(p.location.as_deref())
                .bind(p.description.as_deref())
                .bind(p.height)
                .bind(p.weight)
                .bind(p.last_online)
                .bind(p.created_at)
                .bind(p.updated_at)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            row.try_into()
        })).await
    }

    async fn update(&self, id: ProfileId, patch: &ProfilePatch, tx: Option<&mut dyn Transaction>) -> Result<Profile> {
        let pool = self.pool.clone();
        let patch = patch.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            // Les champs effaçables passent par un couple (fourni, valeur)
            let sql = format!(
                r#"
                UPDATE profiles SET
                    display_name = COALESCE($2, display_name),
                    birthday = COALESCE($3, birthday),
                    gender = COALESCE($4, gender),
                    location = CASE WHEN $5 THEN $6 ELSE location END,
                    description = CASE WHEN $7 THEN $8 ELSE description END,
                    height = CASE WHEN $9 THEN $10 ELSE height END,
                    weight = CASE WHEN $11 THEN $12 ELSE weight END
                WHERE id = $1
                RETURNING {PROFILE_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresProfileRow>(&sql)
                .bind(id.value())
                .bind(patch.display_name.as_ref().map(|n| n.as_str().to_string()))
                .bind(patch.birthday)
                .bind(patch.gender.map(|g| g.as_str()))
                .bind(patch.location.is_some())
                .bind(patch.location.clone().flatten())
                .bind(patch.description.is_some())
                .bind(patch.description.clone().flatten())
                .bind(patch.height.is_some())
                .bind(patch.height.flatten())
                .bind(patch.weight.is_some())
                .bind(patch.weight.flatten())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            row.map(Profile::try_from).transpose()?.ok_or_not_found(id)
        })).await
    }

    async fn touch_last_online(&self, id: ProfileId, at: DateTime<Utc>, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let result = sqlx::query("UPDATE profiles SET last_online = $2 WHERE id = $1")
                .bind(id.value())
                .bind(at)
                .execute(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            if result.rows_affected() == 0 {
                return Err(Profile::not_found(id));
            }
            Ok(())
        })).await
    }

    async fn find_by_id(&self, id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Profile>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");

            let row = sqlx::query_as::<_, PostgresProfileRow>(&sql)
                .bind(id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            row.map(Profile::try_from).transpose()
        })).await
    }

    async fn delete(&self, id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            // ON DELETE CASCADE emporte les six sous-enregistrements et les relations
            let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
                .bind(id.value())
                .execute(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            if result.rows_affected() == 0 {
                return Err(Profile::not_found(id));
            }
            Ok(())
        })).await
    }

    async fn find_nearby(&self, query: &ProfileListQuery) -> Result<PageResponse<ProfileListItem>> {
        let today = self.clock.now().date_naive();
        let (latest_birthday, earliest_birthday) =
            birthday_bounds(today, query.age_range.from(), query.age_range.to());

        // Le total ignore le rayon et la pagination
        let count_sql = format!("{NEARBY_CANDIDATES} SELECT COUNT(*) FROM candidates");
        let page_sql = format!(
            r#"
            {NEARBY_CANDIDATES}
            SELECT
                c.id, c.display_name, c.birthday, c.gender, c.location, c.distance, c.last_online,
                c.last_online >= $6 AS is_online,
                (
                    SELECT i.url FROM images i
                    WHERE i.profile_id = c.id
                      AND i.deleted_at IS NULL
                      AND i.is_blocked = FALSE
                      AND i.is_private = FALSE
                    ORDER BY i.created_at DESC, i.id DESC
                    LIMIT 1
                ) AS image_url
            FROM candidates c
            -- $5 rayon en mètres, une position inconnue n'exclut personne
            WHERE c.distance IS NULL OR c.distance <= $5
            ORDER BY c.distance ASC NULLS LAST, c.last_online DESC, c.id ASC
            LIMIT $7 OFFSET $8
            "#
        );

        let count = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(query.requester_id.value())
            .bind(query.search_gender.as_str())
            .bind(latest_birthday)
            .bind(earliest_birthday)
            .fetch_one(&self.pool);

        let rows = sqlx::query_as::<_, PostgresProfileListRow>(&page_sql)
            .bind(query.requester_id.value())
            .bind(query.search_gender.as_str())
            .bind(latest_birthday)
            .bind(earliest_birthday)
            .bind(query.distance.meters())
            .bind(query.online_since)
            .bind(query.page.size() as i64)
            .bind(query.page.offset() as i64)
            .fetch_all(&self.pool);

        let (total, rows) = tokio::try_join!(
            async { count.await.map_domain_infra("ProfileNearbyCount") },
            async { rows.await.map_domain_infra("ProfileNearbyPage") },
        )?;

        let content = rows
            .into_iter()
            .map(|r| r.into_item(today))
            .collect::<Result<Vec<_>>>()?;

        Ok(PageResponse::new(content, query.page, total.max(0) as u64))
    }
}
