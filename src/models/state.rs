use tracing::info;

use crate::services::calculator::CalculatorService;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// The service performing the arithmetic behind `/plus`.
    pub calculator_service: CalculatorService,
}

impl AppState {
    /// Creates a new application state with the provided services.
    ///
    /// # Arguments
    ///
    /// * `calculator_service` - Service for the addition endpoint
    pub fn new(calculator_service: CalculatorService) -> Self {
        info!("Initializing application state");

        Self { calculator_service }
    }
}
