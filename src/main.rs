use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = folder_renumber::cli::parse();
    app::run(args)
}
