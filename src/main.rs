#[tokio::main(flavor = "current_thread")]
async fn main() {
    linkedin_automation_client::run().await;
}
