//! `DocumentStore` implementation for [`SqliteStore`].

use async_trait::async_trait;
use tokio_rusqlite::{params, rusqlite};

use super::connection::SqliteStore;
use crate::Error;
use crate::store::document::{iso8601, parse_timestamp};
use crate::store::{Document, DocumentStore, FieldUpdate, FieldValue, Fields, OrderField, OrderValue, Query, ids};

const SELECT_COLUMNS: &str = "id, views, uploaded_at, last_viewed, data";

/// A `websites` row: promoted columns plus the remaining fields as JSON.
#[derive(Debug, Clone, PartialEq)]
struct StoredRow {
    id: String,
    views: Option<i64>,
    uploaded_at: Option<String>,
    last_viewed: Option<String>,
    data: String,
}

impl StoredRow {
    fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            views: row.get(1)?,
            uploaded_at: row.get(2)?,
            last_viewed: row.get(3)?,
            data: row.get(4)?,
        })
    }

    /// Split a document into promoted columns and a JSON payload.
    ///
    /// A promoted field only moves to its column when it has the column's
    /// type; otherwise it stays in the payload untouched.
    fn from_document(doc: &Document) -> Result<Self, Error> {
        let mut fields = doc.fields.clone();

        let views = take_if(&mut fields, "views", FieldValue::as_count);
        let uploaded_at = take_if(&mut fields, "uploadedAt", FieldValue::as_timestamp).map(|ts| iso8601(&ts));
        let last_viewed = take_if(&mut fields, "lastViewed", FieldValue::as_timestamp).map(|ts| iso8601(&ts));

        Ok(Self { id: doc.id.clone(), views, uploaded_at, last_viewed, data: serde_json::to_string(&fields)? })
    }

    fn into_document(self) -> Result<Document, Error> {
        let mut fields: Fields = serde_json::from_str(&self.data)?;

        if let Some(views) = self.views {
            fields.insert("views".into(), FieldValue::Integer(views));
        }
        if let Some(raw) = self.uploaded_at {
            fields.insert("uploadedAt".into(), timestamp_value(raw));
        }
        if let Some(raw) = self.last_viewed {
            fields.insert("lastViewed".into(), timestamp_value(raw));
        }

        Ok(Document { id: self.id, fields })
    }
}

fn take_if<T>(fields: &mut Fields, key: &str, extract: impl Fn(&FieldValue) -> Option<T>) -> Option<T> {
    let value = fields.get(key).and_then(extract)?;
    fields.remove(key);
    Some(value)
}

fn timestamp_value(raw: String) -> FieldValue {
    match parse_timestamp(&raw) {
        Some(ts) => FieldValue::Timestamp(ts),
        None => FieldValue::String(raw),
    }
}

fn order_column(field: OrderField) -> &'static str {
    match field {
        OrderField::Views => "views",
        OrderField::UploadedAt => "uploaded_at",
    }
}

fn order_arg(value: &OrderValue) -> rusqlite::types::Value {
    match value {
        OrderValue::Views(n) => rusqlite::types::Value::Integer(*n),
        OrderValue::UploadedAt(ts) => rusqlite::types::Value::Text(iso8601(ts)),
    }
}

fn select_one(conn: &rusqlite::Connection, id: &str) -> Result<Option<StoredRow>, Error> {
    let result = conn.query_row(
        &format!("SELECT {SELECT_COLUMNS} FROM websites WHERE id = ?1"),
        params![id],
        StoredRow::read,
    );

    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn upsert(conn: &rusqlite::Connection, row: &StoredRow) -> Result<(), Error> {
    conn.execute(
        "INSERT INTO websites (id, views, uploaded_at, last_viewed, data)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(id) DO UPDATE SET
            views = excluded.views,
            uploaded_at = excluded.uploaded_at,
            last_viewed = excluded.last_viewed,
            data = excluded.data",
        params![&row.id, &row.views, &row.uploaded_at, &row.last_viewed, &row.data],
    )?;
    Ok(())
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn get(&self, id: &str) -> Result<Option<Document>, Error> {
        let id = id.to_string();
        self.conn
            .call(move |conn| -> Result<Option<Document>, Error> {
                select_one(conn, &id)?.map(StoredRow::into_document).transpose()
            })
            .await
            .map_err(Error::from)
    }

    async fn query(&self, query: &Query) -> Result<Vec<Document>, Error> {
        query.check_cursor()?;

        let column = order_column(query.order_by);
        let mut sql = format!("SELECT {SELECT_COLUMNS} FROM websites WHERE {column} IS NOT NULL");
        let mut args: Vec<rusqlite::types::Value> = Vec::new();

        if let Some(cursor) = &query.start_after {
            sql.push_str(&format!(" AND ({column} < ?1 OR ({column} = ?1 AND id < ?2))"));
            args.push(order_arg(&cursor.value));
            args.push(rusqlite::types::Value::Text(cursor.id.clone()));
        }

        sql.push_str(&format!(" ORDER BY {column} DESC, id DESC"));
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        self.conn
            .call(move |conn| -> Result<Vec<Document>, Error> {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), StoredRow::read)?;
                rows.map(|row| row.map_err(Error::from).and_then(StoredRow::into_document))
                    .collect()
            })
            .await
            .map_err(Error::from)
    }

    async fn update(&self, id: &str, updates: &[FieldUpdate]) -> Result<(), Error> {
        let id = id.to_string();
        let updates = updates.to_vec();
        self.conn
            .call(move |conn| -> Result<(), Error> {
                let tx = conn.transaction()?;

                let mut doc = select_one(&tx, &id)?
                    .ok_or_else(|| Error::NotFound(id.clone()))?
                    .into_document()?;
                for update in &updates {
                    update.apply(&mut doc.fields);
                }
                upsert(&tx, &StoredRow::from_document(&doc)?)?;

                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    async fn scan(&self) -> Result<Vec<Document>, Error> {
        self.conn
            .call(|conn| -> Result<Vec<Document>, Error> {
                let mut stmt = conn.prepare(&format!("SELECT {SELECT_COLUMNS} FROM websites"))?;
                let rows = stmt.query_map([], StoredRow::read)?;
                rows.map(|row| row.map_err(Error::from).and_then(StoredRow::into_document))
                    .collect()
            })
            .await
            .map_err(Error::from)
    }

    async fn insert(&self, mut doc: Document) -> Result<String, Error> {
        if doc.id.is_empty() {
            let name = doc.get("name").and_then(FieldValue::as_str).unwrap_or_default();
            let url = doc.get("url").and_then(FieldValue::as_str).unwrap_or_default();
            doc.id = ids::generate_id(name, url);
        }

        let row = StoredRow::from_document(&doc)?;
        let id = row.id.clone();
        self.conn
            .call(move |conn| -> Result<(), Error> { upsert(conn, &row) })
            .await
            .map_err(Error::from)?;
        Ok(id)
    }
}
