#[tokio::main]
async fn main() {
    parking_mate_be::start_server().await;
}
