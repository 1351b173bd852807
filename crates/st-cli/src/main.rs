use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let exit_code = st_cli::run_cli_from_args(std::env::args_os());
    std::process::exit(exit_code);
}
