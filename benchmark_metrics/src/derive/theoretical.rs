//!
//! Theoretical speedup model.
//!

///
/// Normalization coefficient of the model for a grid size: `N² / (N² + 1)`.
///
pub fn scale(grid_size: u64) -> f64 {
    let area = (grid_size as f64).powi(2);
    area / (area + 1.0)
}

///
/// Evaluates `scale * (N² / (N²/P + P))` for every processor count, in the order given.
///
/// The model counts `N²/P` cells of work per processor plus a communication
/// term linear in `P`.
///
pub fn theoretical_speedup_curve(grid_size: u64, processor_values: &[u32]) -> Vec<(u32, f64)> {
    let area = (grid_size as f64).powi(2);
    let scale = scale(grid_size);
    processor_values
        .iter()
        .map(|processors| {
            let processors_f64 = *processors as f64;
            let raw = area / (area / processors_f64 + processors_f64);
            (*processors, scale * raw)
        })
        .collect()
}
