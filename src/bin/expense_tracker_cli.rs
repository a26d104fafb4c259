use clap::Parser;
use expense_tracker::{
    cli::{run_cli, Cli},
    init,
};

fn main() {
    init();

    let cli = Cli::parse();
    if let Err(err) = run_cli(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
