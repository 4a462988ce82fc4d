//! Configuration parameters for pattern identification

/// Pattern identification configuration
#[derive(Debug, Clone)]
pub struct IdentifyConfig {
    /// Minimum normalized similarity for a window to count as a match
    /// (default: 0.95)
    ///
    /// Similarity is the cross-correlation of the window against the
    /// pattern, divided by the pattern's self-correlation.
    pub threshold: f64,

    /// Multiply-count cutover between the direct scan and the
    /// FFT-accelerated scan (default: 262144)
    ///
    /// When `(windows * pattern_len)` reaches this value the per-window
    /// dot products are computed with one FFT cross-correlation pass
    /// instead of the O(n*m) direct loop. Both paths produce the same
    /// match set.
    pub fft_cutover: usize,
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            threshold: 0.95,
            fft_cutover: 1 << 18,
        }
    }
}
