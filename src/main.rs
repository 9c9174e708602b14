use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = filesmith::cli::parse();
    app::run(args)
}
