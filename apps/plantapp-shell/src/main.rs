//! # PlantApp Shell Entry Point
//!
//! Thin binary around [`plantapp_shell::run`]; the setup lives in the
//! library so it can be tested.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    plantapp_shell::run().await
}
