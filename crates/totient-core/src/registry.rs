//! Calculator factory and mode registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, TotientError};
use crate::options::ParallelOptions;
use crate::parallel::ParallelCalculator;
use crate::sequential::SequentialCalculator;

/// Factory trait for creating calculators from a mode identifier.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by mode name or alias.
    fn get(&self, mode: &str) -> Result<Arc<dyn Calculator>, TotientError>;

    /// List all canonical mode names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    options: ParallelOptions,
    cache: RwLock<HashMap<&'static str, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a factory whose parallel calculator uses the hardware default.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ParallelOptions::default())
    }

    #[must_use]
    pub fn with_options(options: ParallelOptions) -> Self {
        Self {
            options,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a mode identifier or alias to its canonical name.
    fn canonical(mode: &str) -> Result<&'static str, TotientError> {
        match mode {
            "sequential" | "seq" => Ok("sequential"),
            "parallel" | "par" => Ok("parallel"),
            _ => Err(TotientError::Config(format!("unknown mode: {mode}"))),
        }
    }

    fn create_calculator(&self, canonical: &str) -> Arc<dyn Calculator> {
        if canonical == "parallel" {
            Arc::new(ParallelCalculator::with_options(self.options))
        } else {
            Arc::new(SequentialCalculator::new())
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, mode: &str) -> Result<Arc<dyn Calculator>, TotientError> {
        let key = Self::canonical(mode)?;

        // Check cache first
        if let Some(calc) = self.cache.read().get(key) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache
        let calc = self.create_calculator(key);
        self.cache.write().insert(key, Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["sequential", "parallel"]
    }
}
