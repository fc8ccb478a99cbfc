pub mod gbm;
pub mod params;
pub mod path;
pub mod time_grid;

pub use gbm::Gbm;
pub use params::SimulationParameters;
pub use path::PricePath;
pub use time_grid::TimeGrid;
