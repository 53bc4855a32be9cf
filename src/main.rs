mod cli;
mod depths;
mod document;
mod logging;
mod output;
mod runner;
mod sizes;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
