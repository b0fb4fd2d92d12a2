#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashdeck_study::run().await
}
