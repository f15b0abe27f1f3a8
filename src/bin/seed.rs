// src/bin/seed.rs
// Developer tool: seeds a running placeshare API with a demo account
// and a handful of sample places over plain HTTP.

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Instant;

// --- ANSI colors for terminal output ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Deserialize)]
struct AuthResponse {
    user_id: String,
    token: String,
}

struct SamplePlace {
    title: &'static str,
    description: &'static str,
    address: &'static str,
    image: &'static str,
}

const SAMPLE_PLACES: &[SamplePlace] = &[
    SamplePlace {
        title: "Empire State Building",
        description: "One of the most famous skyscrapers in the world",
        address: "20 W 34th St, New York, NY 10001",
        image: "uploads/images/empire-state.jpg",
    },
    SamplePlace {
        title: "Brooklyn Bridge",
        description: "Hybrid cable-stayed suspension bridge across the East River",
        address: "Brooklyn Bridge, New York, NY 10038",
        image: "uploads/images/brooklyn-bridge.jpg",
    },
    SamplePlace {
        title: "Basilica del Pilar",
        description: "Baroque basilica on the banks of the Ebro",
        address: "Plaza del Pilar, 50003 Zaragoza, Spain",
        image: "uploads/images/pilar.jpg",
    },
];

const DEMO_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@placeshare.dev";
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url =
        env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let client = Client::new();

    println!("{}{}placeshare seeder{}", BOLD, CYAN, RESET);
    println!("Target API: {}\n", base_url);

    let auth = signup_or_login(&client, &base_url).await?;
    println!(
        "{}Authenticated{} as {} ({})\n",
        GREEN, RESET, DEMO_EMAIL, auth.user_id
    );

    let started = Instant::now();
    let mut created = 0usize;
    let mut failed = 0usize;

    for place in SAMPLE_PLACES {
        let response = client
            .post(format!("{}/api/places", base_url))
            .bearer_auth(&auth.token)
            .json(&json!({
                "title": place.title,
                "description": place.description,
                "address": place.address,
                "image": place.image,
            }))
            .send()
            .await
            .with_context(|| format!("request failed for '{}'", place.title))?;

        if response.status().is_success() {
            println!("  {}created{}  {}", GREEN, RESET, place.title);
            created += 1;
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            println!(
                "  {}failed{}   {} ({}): {}",
                RED, RESET, place.title, status, body
            );
            failed += 1;
        }
    }

    println!(
        "\n{}Done{} in {:.1}s: {} created, {}{}{} failed",
        BOLD,
        RESET,
        started.elapsed().as_secs_f64(),
        created,
        if failed > 0 { YELLOW } else { GREEN },
        failed,
        RESET
    );

    Ok(())
}

/// Sign up the demo account, falling back to login if it already exists
async fn signup_or_login(client: &Client, base_url: &str) -> Result<AuthResponse> {
    let signup = client
        .post(format!("{}/api/users/signup", base_url))
        .json(&json!({
            "name": DEMO_NAME,
            "email": DEMO_EMAIL,
            "password": DEMO_PASSWORD,
        }))
        .send()
        .await
        .context("signup request failed - is the API running?")?;

    if signup.status().is_success() {
        return signup.json().await.context("malformed signup response");
    }

    let login = client
        .post(format!("{}/api/users/login", base_url))
        .json(&json!({
            "email": DEMO_EMAIL,
            "password": DEMO_PASSWORD,
        }))
        .send()
        .await
        .context("login request failed")?;

    if !login.status().is_success() {
        bail!("could not sign up or log in the demo user ({})", login.status());
    }

    login.json().await.context("malformed login response")
}
