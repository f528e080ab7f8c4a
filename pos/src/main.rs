#[tokio::main]
async fn main() {
    pos::start_server().await;
}
