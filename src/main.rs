use clap::Parser;
use likes_cli::display::print_error;
use likes_cli::{init_logging, run, Cli};

#[tokio::main]
async fn main() {
    // Pick up FF_LIKES_* variables from a local .env before clap reads the environment
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&format!("Fatal error: {}", e));
        std::process::exit(1);
    }
}
