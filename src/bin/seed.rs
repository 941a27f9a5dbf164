// src/bin/seed.rs
// DOCUMENTATION: Demo data loader
// PURPOSE: Insert a fixed set of users, photos and comments into DATABASE_URL
//
// Usage: cargo run --bin seed
// Rows whose ids already exist are left untouched, so the loader can be re-run.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use dotenv::dotenv;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::env;
use uuid::Uuid;

struct SeedUser {
    id: Uuid,
    first_name: &'static str,
    last_name: &'static str,
    location: &'static str,
    description: &'static str,
    occupation: &'static str,
}

struct SeedPhoto {
    id: Uuid,
    owner: Uuid,
    file_name: &'static str,
    /// (author, body) in thread order
    comments: Vec<(Uuid, &'static str)>,
}

fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0000 | n)
}

fn users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: seed_id(1),
            first_name: "Ian",
            last_name: "Malcolm",
            location: "Austin, TX",
            description: "Should've stayed in the car.",
            occupation: "Mathematician",
        },
        SeedUser {
            id: seed_id(2),
            first_name: "Ellen",
            last_name: "Ripley",
            location: "Nostromo",
            description: "Lvl 1 warrant officer.",
            occupation: "Rocket Scientist",
        },
        SeedUser {
            id: seed_id(3),
            first_name: "Peregrin",
            last_name: "Took",
            location: "Gondor",
            description: "Home is behind, the world ahead...",
            occupation: "Thane",
        },
        SeedUser {
            id: seed_id(4),
            first_name: "Rey",
            last_name: "Kenobi",
            location: "D'Qar",
            description: "Excited to be here!",
            occupation: "Rebel",
        },
    ]
}

fn photos() -> Vec<SeedPhoto> {
    let (ian, ellen, pippin, rey) = (seed_id(1), seed_id(2), seed_id(3), seed_id(4));
    vec![
        SeedPhoto {
            id: seed_id(101),
            owner: ian,
            file_name: "malcolm1.jpg",
            comments: vec![
                (ellen, "Life finds a way, apparently."),
                (ian, "It does. It really does."),
            ],
        },
        SeedPhoto {
            id: seed_id(102),
            owner: ian,
            file_name: "malcolm2.jpg",
            comments: vec![],
        },
        SeedPhoto {
            id: seed_id(103),
            owner: ellen,
            file_name: "ripley1.jpg",
            comments: vec![(rey, "Is that the cat?"), (pippin, "Second breakfast?")],
        },
        SeedPhoto {
            id: seed_id(104),
            owner: pippin,
            file_name: "took1.jpg",
            comments: vec![(pippin, "Fool of a Took.")],
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .context("connecting to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("applying migrations")?;

    let mut users_created = 0;
    for user in users() {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, location, description, occupation)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.location)
        .bind(user.description)
        .bind(user.occupation)
        .execute(&pool)
        .await
        .with_context(|| format!("inserting user {} {}", user.first_name, user.last_name))?;
        users_created += result.rows_affected();
    }

    let base: DateTime<Utc> = Utc::now() - Duration::days(30);
    let mut photos_created = 0;
    for (i, photo) in photos().into_iter().enumerate() {
        let taken = base + Duration::days(i as i64);
        let comments: Vec<_> = photo
            .comments
            .iter()
            .enumerate()
            .map(|(j, (author, body))| {
                json!({
                    "id": Uuid::new_v4(),
                    "comment": body,
                    "user_id": author,
                    "date_time": taken + Duration::hours(j as i64 + 1),
                })
            })
            .collect();

        let result = sqlx::query(
            r#"
            INSERT INTO photos (id, user_id, file_name, date_time, comments)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(photo.id)
        .bind(photo.owner)
        .bind(photo.file_name)
        .bind(taken)
        .bind(sqlx::types::Json(comments))
        .execute(&pool)
        .await
        .with_context(|| format!("inserting photo {}", photo.file_name))?;
        photos_created += result.rows_affected();
    }

    log::info!(
        "Seed complete: {} users and {} photos created",
        users_created,
        photos_created
    );
    Ok(())
}
