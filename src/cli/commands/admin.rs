//! Create or update the sole account

use anyhow::Context;
use std::io::{BufRead, Write};

use crate::config::{Config, SecurityConfig};
use crate::db::Store;
use crate::services::validation::validate_credentials;

fn prompt(input: &mut impl BufRead, label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Fill in whatever was not given on the command line. The password is asked
/// twice and must match.
fn resolve_credentials(
    input: &mut impl BufRead,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<(String, String)> {
    let username = match username {
        Some(username) => username,
        None => prompt(input, "Username")?,
    };

    let password = match password {
        Some(password) => password,
        None => {
            let first = prompt(input, "Password")?;
            let second = prompt(input, "Repeat for confirmation")?;
            if first != second {
                anyhow::bail!("The two entered values do not match");
            }
            first
        }
    };

    validate_credentials(&username, &password)?;
    Ok((username, password))
}

pub async fn admin(
    store: &Store,
    security: &SecurityConfig,
    username: &str,
    password: &str,
) -> anyhow::Result<bool> {
    validate_credentials(username, password)?;
    store
        .upsert_user_credentials(username, password, security)
        .await
}

pub async fn cmd_admin(
    config: &Config,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let (username, password) = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        resolve_credentials(&mut input, username, password)?
    };

    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    if admin(&store, &config.security, &username, &password).await? {
        println!("✓ Created user '{username}'.");
    } else {
        println!("✓ Updated user '{username}'.");
    }

    Ok(())
}
