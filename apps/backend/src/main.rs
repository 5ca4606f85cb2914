#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_master_backend::run().await
}
