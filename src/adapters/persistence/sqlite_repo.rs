//! SQLite-backed household store via libsql. Implements HouseholdRepo and DeliveryLogPort.
//!
//! Records are stored as JSON payloads keyed by their natural id; list order
//! is an explicit `position` column. One database file: data/household.db

use crate::domain::{
    AutoSendSettings, Contact, DailyPlan, DayOfWeek, DeliveryRecord, DomainError, GroceryItem,
    MessageKind, TaskItem,
};
use crate::ports::{DeliveryLogPort, HouseholdRepo};
use libsql::{Connection, Database, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

const CONTACTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id TEXT PRIMARY KEY,
    payload TEXT NOT NULL
)"#;

const TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    position INTEGER PRIMARY KEY,
    payload TEXT NOT NULL
)"#;

const DAILY_PLANS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS daily_plans (
    day TEXT PRIMARY KEY,
    payload TEXT NOT NULL
)"#;

const GROCERY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS grocery_items (
    position INTEGER PRIMARY KEY,
    payload TEXT NOT NULL
)"#;

const AUTO_SEND_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS auto_send_settings (
    contact_id TEXT PRIMARY KEY,
    payload TEXT NOT NULL
)"#;

const DELIVERIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS deliveries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id TEXT NOT NULL,
    kind TEXT NOT NULL,
    text TEXT NOT NULL,
    sent_at INTEGER NOT NULL,
    reference TEXT
)"#;
const DELIVERIES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_deliveries_sent_at ON deliveries (sent_at DESC)";

/// SQLite repository. One database file (household.db) in the given base directory.
pub struct SqliteRepo {
    db: Database,
    db_path: PathBuf,
}

impl SqliteRepo {
    /// Connect to (or create) the SQLite database and ensure the schema exists.
    /// Call this once at startup; the returned repo is safe to share via Arc.
    ///
    /// Sets WAL mode and synchronous=NORMAL so the scheduler can write while
    /// the TUI reads.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| DomainError::Repo(e.to_string()))?;
        let db_path = base.join("household.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Repo(e.to_string()))?;

        // PRAGMA returns a row (new value); use query and consume rows (execute fails when rows are returned).
        for pragma in ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"] {
            let mut rows = conn
                .query(pragma, ())
                .await
                .map_err(|e| DomainError::Repo(format!("{} failed: {}", pragma, e)))?;
            while rows
                .next()
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?
                .is_some()
            {}
        }

        for ddl in [
            CONTACTS_TABLE,
            TASKS_TABLE,
            DAILY_PLANS_TABLE,
            GROCERY_TABLE,
            AUTO_SEND_TABLE,
            DELIVERIES_TABLE,
            DELIVERIES_INDEX,
        ] {
            conn.execute(ddl, ())
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
        }

        info!("SQLite connected with WAL mode");

        Ok(Self { db, db_path })
    }

    /// Database file inside the data directory.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn conn(&self) -> Result<Connection, DomainError> {
        self.db
            .connect()
            .map_err(|e| DomainError::Repo(e.to_string()))
    }

    /// Read every payload of a single-column query, in row order.
    async fn query_payloads<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<T>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(sql, params)
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut out = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            let payload: String = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
            out.push(from_json(&payload)?);
        }
        Ok(out)
    }

    /// Replace all rows of a positional list table inside one transaction.
    async fn replace_list<T: Serialize>(&self, table: &str, items: &[T]) -> Result<(), DomainError> {
        let conn = self.conn()?;
        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        tx.execute(&format!("DELETE FROM {}", table), ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let insert = format!("INSERT INTO {} (position, payload) VALUES (?1, ?2)", table);
        for (position, item) in items.iter().enumerate() {
            tx.execute(&insert, params![position as i64, to_json(item)?])
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
        }
        tx.commit()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        info!(table, count = items.len(), "list saved");
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| DomainError::Repo(format!("encode: {}", e)))
}

fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, DomainError> {
    serde_json::from_str(payload).map_err(|e| DomainError::Repo(format!("decode: {}", e)))
}

fn parse_kind(kind: &str) -> MessageKind {
    match kind {
        "meals" => MessageKind::Meals,
        "groceries" => MessageKind::Groceries,
        "confirmation" => MessageKind::Confirmation,
        _ => MessageKind::Tasks,
    }
}

#[async_trait::async_trait]
impl HouseholdRepo for SqliteRepo {
    async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        self.query_payloads("SELECT payload FROM contacts ORDER BY rowid", ())
            .await
    }

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>, DomainError> {
        let mut found: Vec<Contact> = self
            .query_payloads("SELECT payload FROM contacts WHERE id = ?1", params![id])
            .await?;
        Ok(found.pop())
    }

    async fn save_contact(&self, contact: &Contact) -> Result<(), DomainError> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO contacts (id, payload) VALUES (?1, ?2)
            ON CONFLICT (id) DO UPDATE SET payload = excluded.payload
            "#,
            params![contact.id.as_str(), to_json(contact)?],
        )
        .await
        .map_err(|e| DomainError::Repo(e.to_string()))?;
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<TaskItem>, DomainError> {
        self.query_payloads("SELECT payload FROM tasks ORDER BY position", ())
            .await
    }

    async fn save_tasks(&self, tasks: &[TaskItem]) -> Result<(), DomainError> {
        self.replace_list("tasks", tasks).await
    }

    async fn get_daily_plan(&self, day: DayOfWeek) -> Result<DailyPlan, DomainError> {
        let mut found: Vec<DailyPlan> = self
            .query_payloads(
                "SELECT payload FROM daily_plans WHERE day = ?1",
                params![day.as_str()],
            )
            .await?;
        Ok(found.pop().unwrap_or_default())
    }

    async fn save_daily_plan(&self, day: DayOfWeek, plan: &DailyPlan) -> Result<(), DomainError> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO daily_plans (day, payload) VALUES (?1, ?2)
            ON CONFLICT (day) DO UPDATE SET payload = excluded.payload
            "#,
            params![day.as_str(), to_json(plan)?],
        )
        .await
        .map_err(|e| DomainError::Repo(e.to_string()))?;
        Ok(())
    }

    async fn list_grocery_items(&self) -> Result<Vec<GroceryItem>, DomainError> {
        self.query_payloads("SELECT payload FROM grocery_items ORDER BY position", ())
            .await
    }

    async fn save_grocery_items(&self, items: &[GroceryItem]) -> Result<(), DomainError> {
        self.replace_list("grocery_items", items).await
    }

    async fn get_auto_send_settings(
        &self,
        contact_id: &str,
    ) -> Result<AutoSendSettings, DomainError> {
        let mut found: Vec<AutoSendSettings> = self
            .query_payloads(
                "SELECT payload FROM auto_send_settings WHERE contact_id = ?1",
                params![contact_id],
            )
            .await?;
        Ok(found.pop().unwrap_or_default())
    }

    async fn save_auto_send_settings(
        &self,
        contact_id: &str,
        settings: &AutoSendSettings,
    ) -> Result<(), DomainError> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO auto_send_settings (contact_id, payload) VALUES (?1, ?2)
            ON CONFLICT (contact_id) DO UPDATE SET payload = excluded.payload
            "#,
            params![contact_id, to_json(settings)?],
        )
        .await
        .map_err(|e| DomainError::Repo(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DeliveryLogPort for SqliteRepo {
    async fn record_delivery(&self, record: &DeliveryRecord) -> Result<(), DomainError> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO deliveries (contact_id, kind, text, sent_at, reference)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.contact_id.as_str(),
                record.kind.as_str(),
                record.text.as_str(),
                record.sent_at,
                record.reference.clone()
            ],
        )
        .await
        .map_err(|e| DomainError::Repo(e.to_string()))?;
        Ok(())
    }

    async fn recent_deliveries(&self, limit: usize) -> Result<Vec<DeliveryRecord>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                r#"
                SELECT contact_id, kind, text, sent_at, reference
                FROM deliveries
                ORDER BY sent_at DESC, id DESC
                LIMIT ?1
                "#,
                params![limit as i64],
            )
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            let contact_id: String = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
            let kind: String = row.get(1).map_err(|e| DomainError::Repo(e.to_string()))?;
            let text: String = row.get(2).map_err(|e| DomainError::Repo(e.to_string()))?;
            let sent_at: i64 = row.get(3).map_err(|e| DomainError::Repo(e.to_string()))?;
            let reference: Option<String> = row.get(4).ok();
            records.push(DeliveryRecord {
                contact_id,
                kind: parse_kind(&kind),
                text,
                sent_at,
                reference,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactRole, Frequency, LanguageCode, MealEntry, MealSlot};

    async fn repo() -> (tempfile::TempDir, SqliteRepo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        (dir, repo)
    }

    #[tokio::test]
    async fn test_database_file_lives_in_data_dir() {
        let (dir, repo) = repo().await;
        assert_eq!(repo.path(), dir.path().join("household.db"));
        assert!(repo.path().exists());
    }

    #[tokio::test]
    async fn test_contacts_upsert_keeps_order() {
        let (_dir, repo) = repo().await;
        let mut asha = Contact {
            id: "c1".into(),
            name: "Asha".into(),
            phone: "+91 98765 43210".into(),
            role: ContactRole::Maid,
            preferred_language: LanguageCode::Hindi,
        };
        let ravi = Contact {
            id: "c2".into(),
            name: "Ravi".into(),
            phone: "+91 90000 00000".into(),
            role: ContactRole::Cook,
            preferred_language: LanguageCode::Tamil,
        };
        repo.save_contact(&asha).await.unwrap();
        repo.save_contact(&ravi).await.unwrap();
        asha.preferred_language = LanguageCode::Kannada;
        repo.save_contact(&asha).await.unwrap();

        let contacts = repo.list_contacts().await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, "c1");
        assert_eq!(contacts[0].preferred_language, LanguageCode::Kannada);
        assert_eq!(repo.get_contact("c2").await.unwrap(), Some(ravi));
        assert_eq!(repo.get_contact("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_task_list_replaced_in_order() {
        let (_dir, repo) = repo().await;
        let tasks = vec![
            TaskItem::new("2", "Mop floor"),
            TaskItem::new("1", "Wash dishes").selected(),
        ];
        repo.save_tasks(&tasks).await.unwrap();
        assert_eq!(repo.list_tasks().await.unwrap(), tasks);

        repo.save_tasks(&tasks[1..]).await.unwrap();
        assert_eq!(repo.list_tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_daily_plan_and_settings_defaults() {
        let (_dir, repo) = repo().await;
        assert!(repo.get_daily_plan(DayOfWeek::Monday).await.unwrap().is_empty());
        assert_eq!(
            repo.get_auto_send_settings("c1").await.unwrap(),
            AutoSendSettings::default()
        );

        let mut plan = DailyPlan::default();
        plan.dinner.push(MealEntry::new("m1", "Chapati", MealSlot::Dinner));
        repo.save_daily_plan(DayOfWeek::Monday, &plan).await.unwrap();
        assert_eq!(repo.get_daily_plan(DayOfWeek::Monday).await.unwrap(), plan);
        assert!(repo.get_daily_plan(DayOfWeek::Tuesday).await.unwrap().is_empty());

        let settings = AutoSendSettings {
            auto_send: true,
            frequency: Frequency::Weekly,
            days_of_week: vec![DayOfWeek::Friday],
            ..AutoSendSettings::default()
        };
        repo.save_auto_send_settings("c1", &settings).await.unwrap();
        assert_eq!(repo.get_auto_send_settings("c1").await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_delivery_log_most_recent_first() {
        let (_dir, repo) = repo().await;
        for (i, kind) in [MessageKind::Tasks, MessageKind::Meals, MessageKind::Confirmation]
            .into_iter()
            .enumerate()
        {
            repo.record_delivery(&DeliveryRecord {
                contact_id: "c1".into(),
                kind,
                text: format!("message {}", i),
                sent_at: 1_700_000_000 + i as i64,
                reference: (i == 1).then(|| "wamid.1".to_string()),
            })
            .await
            .unwrap();
        }
        let recent = repo.recent_deliveries(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].kind, MessageKind::Confirmation);
        assert_eq!(recent[1].kind, MessageKind::Meals);
        assert_eq!(recent[1].reference.as_deref(), Some("wamid.1"));
    }
}
