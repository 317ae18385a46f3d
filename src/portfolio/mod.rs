mod load;
mod model;

pub use load::load_portfolio;
#[cfg(test)]
pub use load::parse_portfolio;
pub use model::PortfolioData;
