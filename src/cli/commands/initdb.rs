//! Create or reset the database schema

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_initdb(config: &Config, drop: bool) -> anyhow::Result<()> {
    let store = Store::connect(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    if drop {
        store.reset().await?;
        println!("✓ Dropped all tables and created a fresh database.");
    } else {
        store.migrate().await?;
        println!("✓ Initialized database.");
    }

    Ok(())
}
