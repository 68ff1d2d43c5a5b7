#[tokio::main]
async fn main() -> anyhow::Result<()> {
    parley_client_lib::run().await
}
