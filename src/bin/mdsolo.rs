//! mdsolo command-line binary

fn main() -> anyhow::Result<()> {
    mdsolo::cli::run_cli()
}
