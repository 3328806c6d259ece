mod calculation;
mod state;

pub use calculation::Calculation;
pub use state::AppState;
