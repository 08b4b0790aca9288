#[tokio::main]
async fn main() {
    if let Err(error) = seismic_arena::run_local().await {
        tracing::error!(%error, "runtime failed");
        std::process::exit(1);
    }
}
