use clap::Parser;
use cellforth::config::Config;

fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let exit_code = cellforth::repl::run(config);
    std::process::exit(exit_code);
}
