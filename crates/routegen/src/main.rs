//! routegen - typed TypeScript clients from file-system route definitions

fn main() {
    std::process::exit(routegen_cli::run_cli(std::env::args().collect()));
}
