//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `corkboard_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use corkboard_core::db::open_db_in_memory;
use corkboard_core::{BoardStore, SqliteBoardRepository};

fn main() {
    println!("corkboard_core version={}", corkboard_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let store = BoardStore::open(SqliteBoardRepository::new(&conn));
            for column in &store.board().columns {
                println!(
                    "column id={} title={} tasks={}",
                    column.id,
                    column.title,
                    column.task_ids.len()
                );
            }
        }
        Err(err) => eprintln!("failed to open in-memory store: {err}"),
    }
}
