//! Indicator trait definitions.

/// Trait for rolling technical indicators.
///
/// Output is aligned with the input: one value per observation, NaN where
/// the trailing window does not yet hold enough history.
pub trait Indicator: Send + Sync {
    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically prices)
    ///
    /// # Returns
    /// A vector the same length as `data`
    fn calculate(&self, data: &[f64]) -> Vec<f64>;

    /// Get the number of observations needed before the first defined value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
