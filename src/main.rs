#[tokio::main]
async fn main() {
    airooh_server::run().await;
}
