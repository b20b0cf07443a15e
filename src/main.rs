#[tokio::main]
async fn main() {
    rentmate::run().await;
}
