#[tokio::main]
async fn main() {
    staydesk::run().await;
}
