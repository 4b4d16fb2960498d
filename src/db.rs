use chrono::{Datelike, NaiveDate};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};

use crate::config::NewsEntry;

#[derive(Debug, Clone, FromRow)]
pub struct NewsItem {
    pub id: i64,
    /// ISO date, YYYY-MM-DD
    pub date: String,
    pub title: String,
    pub desc: String,
    pub content: String,
}

impl NewsItem {
    /// Date the way the site displays it: unpadded M/D/YYYY, e.g. "7/24/2015".
    /// A date that does not parse is shown verbatim.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
            Err(_) => self.date.clone(),
        }
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn initialize(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS news (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                title TEXT NOT NULL,
                "desc" TEXT NOT NULL,
                content TEXT NOT NULL,
                UNIQUE(date, title)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_news_date
            ON news(date DESC)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Sync configured news entries into the table, keyed on (date, title).
    pub async fn sync_news(&self, entries: &[NewsEntry]) -> anyhow::Result<()> {
        for entry in entries {
            self.upsert_news(entry).await?;
        }
        Ok(())
    }

    pub async fn upsert_news(&self, entry: &NewsEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO news (date, title, "desc", content)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(date, title) DO UPDATE SET
                "desc" = excluded."desc",
                content = excluded.content
            "#,
        )
        .bind(&entry.date)
        .bind(&entry.title)
        .bind(&entry.desc)
        .bind(&entry.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The single most recent item, shown on the home page.
    pub async fn latest_news(&self) -> anyhow::Result<Option<NewsItem>> {
        let item = sqlx::query_as::<_, NewsItem>(
            r#"
            SELECT * FROM news
            ORDER BY date DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    /// Every item, most recent first, for the news archive page.
    pub async fn all_news(&self) -> anyhow::Result<Vec<NewsItem>> {
        let items = sqlx::query_as::<_, NewsItem>(
            r#"
            SELECT * FROM news
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
