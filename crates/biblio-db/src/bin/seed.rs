//! # Seed Data Generator
//!
//! Populates the database with a development catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p biblio-db --bin seed
//!
//! # Specify database path
//! cargo run -p biblio-db --bin seed -- --db ./data/biblio.db
//! ```
//!
//! ## Generated Data
//! - A handful of publishers and authors
//! - A catalog of books across genres with deterministic prices and
//!   copies-sold counters (so the top-sellers shelf has real content)
//! - Rating records producing per-book averages between 1 and 5

use chrono::Utc;
use std::env;

use biblio_core::Book;
use biblio_db::{Database, DbConfig};

/// Publishers seeded first; books reference them by list position.
const PUBLISHERS: &[(&str, Option<&str>)] = &[
    ("Tech Books Publishing", Some("123 Publisher Street")),
    ("Science Publishers", Some("456 Science Avenue")),
    ("Harbor House", None),
];

const AUTHORS: &[&str] = &[
    "Grace Okafor",
    "Martin Vale",
    "Yuki Tanaka",
    "Elena Petrova",
];

/// (isbn, title, genre, price_cents, copies_sold, publisher_idx, author_idx, ratings)
const BOOKS: &[(&str, &str, &str, i64, i64, usize, usize, &[i64])] = &[
    (
        "9780123456789",
        "Systems Programming in Practice",
        "Technology",
        4999,
        1000,
        0,
        0,
        &[5, 4, 5],
    ),
    (
        "9780987654321",
        "The Pragmatic Database",
        "Technology",
        3999,
        750,
        0,
        1,
        &[4, 4],
    ),
    (
        "9781111111111",
        "Tidewater Letters",
        "Fiction",
        1899,
        2100,
        2,
        2,
        &[5, 5, 4, 5],
    ),
    (
        "9782222222222",
        "A Field Guide to Estuaries",
        "Science",
        2750,
        430,
        1,
        3,
        &[3, 4],
    ),
    (
        "9783333333333",
        "Careful Structures",
        "Technology",
        5499,
        120,
        0,
        1,
        &[2, 3],
    ),
    (
        "9784444444444",
        "The Glass Harbor",
        "Fiction",
        2199,
        1650,
        2,
        2,
        &[],
    ),
    (
        "9785555555555",
        "Notes on Probability",
        "Science",
        3350,
        980,
        1,
        3,
        &[4],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./biblio_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Biblio Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./biblio_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Biblio Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.books().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} books", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding publishers and authors...");

    let mut publisher_ids = Vec::new();
    for (name, address) in PUBLISHERS {
        let publisher = db.publishers().insert(name, *address).await?;
        publisher_ids.push(publisher.id);
    }

    let mut author_ids = Vec::new();
    for name in AUTHORS {
        let author = db.authors().insert(name).await?;
        author_ids.push(author.id);
    }

    println!(
        "  {} publishers, {} authors",
        publisher_ids.len(),
        author_ids.len()
    );

    println!("Seeding catalog...");

    let now = Utc::now();
    let mut rating_count = 0;

    for (isbn, title, genre, price_cents, copies_sold, pub_idx, auth_idx, ratings) in BOOKS {
        let book = Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            description: Some(format!("{} ({})", title, genre)),
            price_cents: *price_cents,
            genre: genre.to_string(),
            year_published: Some(2023),
            copies_sold: *copies_sold,
            publisher_id: Some(publisher_ids[*pub_idx]),
            author_id: Some(author_ids[*auth_idx]),
            created_at: now,
            updated_at: now,
        };
        db.books().save(&book).await?;

        for rating in *ratings {
            db.ratings().insert(isbn, *rating).await?;
            rating_count += 1;
        }
    }

    println!("  {} books, {} ratings", BOOKS.len(), rating_count);

    println!();
    println!("✓ Seed complete!");
    println!("  Try: GET /api/books/top-sellers");
    println!("       GET /api/books/genre/Technology");
    println!("       GET /api/books/rating/4");

    Ok(())
}
