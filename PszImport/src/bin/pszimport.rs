fn main() -> anyhow::Result<()> {
    pszimport::cli::run_cli()
}
