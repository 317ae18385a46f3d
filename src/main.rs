mod app;
mod chat;
mod constellation;
mod portfolio;
mod util;

use std::path::PathBuf;

use clap::Parser;

use app::{LaunchOptions, PortfolioApp};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Portfolio content document (JSON).
    #[arg(long, default_value = "public/data/Portfoliodata.json")]
    portfolio: PathBuf,
    /// How many skills the constellation animates.
    #[arg(long, default_value_t = 16)]
    max_skills: usize,
    /// Fixed seed for a reproducible layout.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };
    let launch = LaunchOptions {
        portfolio_path: args.portfolio,
        max_skills: args.max_skills,
        seed: args.seed,
    };

    eframe::run_native(
        "skill-constellation",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, launch)))),
    )
}
