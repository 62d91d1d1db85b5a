//! Process-wide calculator with one-shot initialization.
use lsh::minhash::HashCoefficient;
use once_cell::sync::OnceCell;

use crate::calculator::{CalculatorConfig, SignatureCalculator};
use crate::errors::{Result, RouteLshError};
use crate::tile::GpsPoint;

/// A calculator slot that is filled exactly once and read concurrently afterwards.
///
/// Initialization happens-before every successful read, so callers on other
/// threads either see the complete calculator or get
/// [`RouteLshError::InvalidState`].
///
/// # Examples
///
/// ```
/// use lsh::minhash::coefficients_from_seed;
/// use route_lsh::{CalculatorConfig, SharedCalculator};
///
/// static CALCULATOR: SharedCalculator = SharedCalculator::new();
///
/// let track = [(46.5197, 6.6323), (46.5210, 6.6400), (46.5250, 6.6500)];
/// assert!(CALCULATOR.buckets(&track).is_err());
///
/// let config = CalculatorConfig::new(15, 2, 4, 1 << 24).unwrap();
/// CALCULATOR
///     .initialize(&config, coefficients_from_seed(config.signature_size(), 42))
///     .unwrap();
/// assert_eq!(CALCULATOR.buckets(&track).unwrap().len(), 4);
/// ```
pub struct SharedCalculator {
    cell: OnceCell<SignatureCalculator>,
}

impl SharedCalculator {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Sets up the calculator from `config` and `coefficients`.
    ///
    /// Fails with the error of [`CalculatorConfig::setup`], or with
    /// [`RouteLshError::InvalidState`] if already initialized. A failed call
    /// leaves the slot as it was.
    pub fn initialize(
        &self,
        config: &CalculatorConfig,
        coefficients: Vec<HashCoefficient>,
    ) -> Result<&SignatureCalculator> {
        if self.is_initialized() {
            return Err(RouteLshError::invalid_state(
                "the calculator is already initialized",
            ));
        }
        let calculator = config.setup(coefficients)?;
        self.cell.set(calculator).map_err(|_| {
            RouteLshError::invalid_state("the calculator is already initialized")
        })?;
        log::info!(
            "[SharedCalculator::initialize] initialized with {} coefficients",
            config.signature_size()
        );
        self.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<&SignatureCalculator> {
        self.cell
            .get()
            .ok_or_else(|| RouteLshError::invalid_state("the calculator is not initialized"))
    }

    pub fn signature<P>(&self, points: &[P]) -> Result<Vec<u64>>
    where
        P: Copy + Into<GpsPoint>,
    {
        Ok(self.get()?.signature(points))
    }

    pub fn buckets<P>(&self, points: &[P]) -> Result<Vec<u64>>
    where
        P: Copy + Into<GpsPoint>,
    {
        Ok(self.get()?.buckets(points))
    }
}

impl Default for SharedCalculator {
    fn default() -> Self {
        Self::new()
    }
}
