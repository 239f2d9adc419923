//! Paste Demo
//!
//! Submits an anonymous paste, shows the trending list and, when
//! `PASTEBIN_USER` and `PASTEBIN_PASSWORD` are set, lists the account's pastes.
//!
//! Run with: PASTEBIN_DEV_KEY=... cargo run --example paste_demo

use pastebin_rs::{Client, Config, Expiration, NewPaste, Visibility};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pastebin_rs=debug,pastebin_core=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    let config = Config::load("pastebin.json").unwrap_or_else(|_| {
        tracing::warn!("Failed to load pastebin.json, using environment");
        Config::from_env()
    });

    let client = Client::new(config)?;

    let paste = NewPaste::new("fn main() {\n    println!(\"hello\");\n}")
        .title("pastebin-rs demo")
        .format("rust")
        .expire(Expiration::TenMinutes.code())
        .visibility(Visibility::Unlisted.code());
    let url = client.paste_anonymous(&paste).await?;
    println!("📝 Pasted: {}", url);

    println!("\n🔥 Trending:");
    for record in client.list_trending().await? {
        println!("   {} ({} hits) {}", record.title, record.hits, record.url);
    }

    if let (Ok(user), Ok(password)) = (
        std::env::var("PASTEBIN_USER"),
        std::env::var("PASTEBIN_PASSWORD"),
    ) {
        let client = client.login(&user, &password).await?;
        println!("\n📂 Pastes of {}:", user);
        for record in client.list_pastes(10).await? {
            let expires = if record.never_expires() {
                "never".to_string()
            } else {
                record.expires_at.to_rfc3339()
            };
            println!("   {} {} (expires: {})", record.key, record.title, expires);
        }
    }

    Ok(())
}
