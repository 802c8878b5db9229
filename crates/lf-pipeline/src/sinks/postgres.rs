//! Relational sink: append-only `log_entries` table over a single
//! connection, one transaction per load call.

use sqlx::{Connection, PgConnection, QueryBuilder};

use lf_records::LogRecord;

pub const TABLE_NAME: &str = "log_entries";

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS log_entries (
    id BIGSERIAL PRIMARY KEY,
    timestamp TIMESTAMPTZ,
    level VARCHAR(20),
    category VARCHAR(100),
    message TEXT,
    generalized_message TEXT,
    file_name VARCHAR(255),
    line_number INTEGER,
    raw_line TEXT,
    created_at TIMESTAMPTZ DEFAULT NOW()
)";

/// Ensure the schema exists, then insert all records in bounded batches
/// within one transaction. The connection is released on every exit path.
pub async fn write(
    database_url: &str,
    records: &[LogRecord],
    batch_size: usize,
) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(database_url).await?;
    let result = insert_all(&mut conn, records, batch_size).await;
    let _ = conn.close().await;
    result?;
    tracing::info!(records = records.len(), table = TABLE_NAME, "relational sink written");
    Ok(())
}

async fn insert_all(
    conn: &mut PgConnection,
    records: &[LogRecord],
    batch_size: usize,
) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_TABLE).execute(&mut *conn).await?;

    let mut tx = conn.begin().await?;
    for chunk in records.chunks(batch_size.max(1)) {
        let mut builder = QueryBuilder::<sqlx::Postgres>::new(
            "INSERT INTO log_entries \
             (timestamp, level, category, message, generalized_message, \
              file_name, line_number, raw_line) ",
        );
        builder.push_values(chunk, |mut row, record| {
            row.push_bind(record.timestamp)
                .push_bind(record.level.as_str())
                .push_bind(&record.category)
                .push_bind(&record.message)
                .push_bind(record.generalized_message.as_deref())
                .push_bind(&record.source_file)
                .push_bind(record.line_number as i32)
                .push_bind(&record.raw_line);
        });
        builder.build().execute(&mut *tx).await?;
    }
    tx.commit().await
}
