//! PostgreSQL implementation of CampRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use codecamp::{Camp, CampChange, CampRepository, DomainError, Location, Speaker, Talk};

const CAMP_COLUMNS: &str = "id, moniker, name, description, event_date, length, venue_name, \
     address1, address2, address3, city_town, state_province, postal_code, country";

const CAMP_ORDER: &str = "ORDER BY event_date DESC, moniker ASC";

/// PostgreSQL implementation of CampRepository
pub struct PgCampRepository {
    pool: PgPool,
}

impl PgCampRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Populate each camp's talks with one query for the whole batch
    async fn attach_talks(&self, camps: &mut [Camp]) -> Result<(), DomainError> {
        if camps.is_empty() {
            return Ok(());
        }

        let camp_ids: Vec<Uuid> = camps.iter().map(|c| c.id).collect();
        let rows = sqlx::query_as::<_, TalkRow>(
            r#"
            SELECT t.id, t.camp_id, t.title, t.abstract, t.level,
                   s.id AS speaker_id, s.first_name, s.middle_name, s.last_name,
                   s.company, s.company_url, s.blog_url, s.twitter, s.github
            FROM talks t
            LEFT JOIN speakers s ON s.id = t.speaker_id
            WHERE t.camp_id = ANY($1)
            ORDER BY t.title
            "#,
        )
        .bind(&camp_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let mut by_camp: HashMap<Uuid, Vec<Talk>> = HashMap::new();
        for row in rows {
            by_camp.entry(row.camp_id).or_default().push(row.into());
        }
        for camp in camps.iter_mut() {
            camp.talks = by_camp.remove(&camp.id).unwrap_or_default();
        }

        Ok(())
    }

    async fn hydrate(
        &self,
        rows: Vec<CampRow>,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DomainError> {
        let mut camps: Vec<Camp> = rows.into_iter().map(Into::into).collect();
        if include_talks {
            self.attach_talks(&mut camps).await?;
        }
        Ok(camps)
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CampRow {
    id: Uuid,
    moniker: String,
    name: String,
    description: Option<String>,
    event_date: NaiveDate,
    length: i32,
    venue_name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    city_town: Option<String>,
    state_province: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl From<CampRow> for Camp {
    fn from(row: CampRow) -> Self {
        Self {
            id: row.id,
            moniker: row.moniker,
            name: row.name,
            description: row.description,
            event_date: row.event_date,
            length: row.length,
            location: Location {
                venue_name: row.venue_name,
                address1: row.address1,
                address2: row.address2,
                address3: row.address3,
                city_town: row.city_town,
                state_province: row.state_province,
                postal_code: row.postal_code,
                country: row.country,
            },
            talks: Vec::new(),
        }
    }
}

/// Talk joined with its (optional) speaker
#[derive(sqlx::FromRow)]
struct TalkRow {
    id: Uuid,
    camp_id: Uuid,
    title: String,
    #[sqlx(rename = "abstract")]
    abstract_text: String,
    level: i32,
    speaker_id: Option<Uuid>,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    github: Option<String>,
}

impl From<TalkRow> for Talk {
    fn from(row: TalkRow) -> Self {
        let speaker = row.speaker_id.map(|id| Speaker {
            id,
            first_name: row.first_name.unwrap_or_default(),
            middle_name: row.middle_name,
            last_name: row.last_name.unwrap_or_default(),
            company: row.company,
            company_url: row.company_url,
            blog_url: row.blog_url,
            twitter: row.twitter,
            github: row.github,
        });

        Self {
            id: row.id,
            title: row.title,
            abstract_text: row.abstract_text,
            level: row.level,
            speaker,
        }
    }
}

#[async_trait]
impl CampRepository for PgCampRepository {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DomainError> {
        let sql = format!("SELECT {} FROM camps {}", CAMP_COLUMNS, CAMP_ORDER);
        let rows = sqlx::query_as::<_, CampRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        self.hydrate(rows, include_talks).await
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, DomainError> {
        let sql = format!("SELECT {} FROM camps WHERE moniker = $1", CAMP_COLUMNS);
        let row = sqlx::query_as::<_, CampRow>(&sql)
            .bind(moniker)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        let camps = self.hydrate(row.into_iter().collect(), include_talks).await?;
        Ok(camps.into_iter().next())
    }

    async fn get_all_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DomainError> {
        let sql = format!(
            "SELECT {} FROM camps WHERE event_date = $1 {}",
            CAMP_COLUMNS, CAMP_ORDER
        );
        let rows = sqlx::query_as::<_, CampRow>(&sql)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        self.hydrate(rows, include_talks).await
    }

    async fn save_changes(&self, changes: &[CampChange]) -> Result<usize, DomainError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;
        let mut affected: u64 = 0;

        for change in changes {
            affected += match change {
                CampChange::Add(camp) => insert_camp(&mut tx, camp).await,
                CampChange::Update(camp) => update_camp(&mut tx, camp).await,
                CampChange::Delete(camp) => delete_camp(&mut tx, camp).await,
            }
            .map_err(write_error)?;
        }

        tx.commit().await.map_err(repository_error)?;

        Ok(affected as usize)
    }
}

async fn insert_camp(conn: &mut PgConnection, camp: &Camp) -> Result<u64, sqlx::Error> {
    let location = &camp.location;
    let mut affected = sqlx::query(
        r#"
        INSERT INTO camps (id, moniker, name, description, event_date, length, venue_name,
                           address1, address2, address3, city_town, state_province,
                           postal_code, country)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(camp.id)
    .bind(&camp.moniker)
    .bind(&camp.name)
    .bind(&camp.description)
    .bind(camp.event_date)
    .bind(camp.length)
    .bind(&location.venue_name)
    .bind(&location.address1)
    .bind(&location.address2)
    .bind(&location.address3)
    .bind(&location.city_town)
    .bind(&location.state_province)
    .bind(&location.postal_code)
    .bind(&location.country)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    for talk in &camp.talks {
        if let Some(speaker) = &talk.speaker {
            sqlx::query(
                r#"
                INSERT INTO speakers (id, first_name, middle_name, last_name, company,
                                      company_url, blog_url, twitter, github)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(speaker.id)
            .bind(&speaker.first_name)
            .bind(&speaker.middle_name)
            .bind(&speaker.last_name)
            .bind(&speaker.company)
            .bind(&speaker.company_url)
            .bind(&speaker.blog_url)
            .bind(&speaker.twitter)
            .bind(&speaker.github)
            .execute(&mut *conn)
            .await?;
        }

        affected += sqlx::query(
            r#"
            INSERT INTO talks (id, camp_id, title, abstract, level, speaker_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(talk.id)
        .bind(camp.id)
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .bind(talk.speaker.as_ref().map(|s| s.id))
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    Ok(affected)
}

async fn update_camp(conn: &mut PgConnection, camp: &Camp) -> Result<u64, sqlx::Error> {
    let location = &camp.location;
    let result = sqlx::query(
        r#"
        UPDATE camps
        SET name = $2, description = $3, event_date = $4, length = $5, venue_name = $6,
            address1 = $7, address2 = $8, address3 = $9, city_town = $10,
            state_province = $11, postal_code = $12, country = $13, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(camp.id)
    .bind(&camp.name)
    .bind(&camp.description)
    .bind(camp.event_date)
    .bind(camp.length)
    .bind(&location.venue_name)
    .bind(&location.address1)
    .bind(&location.address2)
    .bind(&location.address3)
    .bind(&location.city_town)
    .bind(&location.state_province)
    .bind(&location.postal_code)
    .bind(&location.country)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

async fn delete_camp(conn: &mut PgConnection, camp: &Camp) -> Result<u64, sqlx::Error> {
    // talks go with the camp via ON DELETE CASCADE
    let result = sqlx::query("DELETE FROM camps WHERE id = $1")
        .bind(camp.id)
        .execute(&mut *conn)
        .await?;

    let pruned = sqlx::query(
        r#"
        DELETE FROM speakers s
        WHERE NOT EXISTS (SELECT 1 FROM talks t WHERE t.speaker_id = s.id)
        "#,
    )
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if pruned > 0 {
        tracing::debug!("Pruned {} speakers without talks", pruned);
    }

    Ok(result.rows_affected())
}

fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

/// Unique violations mean another request claimed the moniker first
fn write_error(e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::Conflict("Moniker in use".to_string())
        }
        _ => repository_error(e),
    }
}
