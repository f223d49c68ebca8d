//! Seed demo data

use crate::config::Config;
use crate::db::Store;
use crate::models::movie::MovieInput;

pub const DEMO_USER_NAME: &str = "Grey Li";

pub const DEMO_MOVIES: [(&str, &str); 10] = [
    ("My Neighbor Totoro", "1988"),
    ("Dead Poets Society", "1989"),
    ("A Perfect World", "1993"),
    ("Leon", "1994"),
    ("Mahjong", "1996"),
    ("Swallowtail Butterfly", "1996"),
    ("King of Comedy", "1999"),
    ("Devils on the Doorstep", "1999"),
    ("WALL-E", "2008"),
    ("The Pork of Music", "2012"),
];

/// Set the demo display name and insert the demo movies. Returns the number
/// of movies inserted.
pub async fn forge(store: &Store) -> anyhow::Result<usize> {
    store.upsert_user_name(DEMO_USER_NAME).await?;

    let movies: Vec<MovieInput> = DEMO_MOVIES
        .iter()
        .map(|(title, year)| MovieInput::new(*title, *year))
        .collect();

    store.add_movies(&movies).await
}

pub async fn cmd_forge(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let inserted = forge(&store).await?;
    println!("✓ Set display name to '{DEMO_USER_NAME}' and added {inserted} movies.");
    Ok(())
}
