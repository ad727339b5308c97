/*
 * Responsibility
 * - tokio runtime entry
 * - Calls app::run() and nothing else
 */
use anyhow::Result;

mod api;
mod app;
mod config;
mod error;
mod middleware;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
