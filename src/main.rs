use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = link_export::cli::parse();
    app::run(args)
}
