#[tokio::main]
async fn main() -> anyhow::Result<()> {
    depview_lib::main().await
}
