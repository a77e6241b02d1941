use clap::Parser;
use env_logger::Env;
use generations::GenerationArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = GenerationArgs::parse();
    generations::run(&args).await
}
