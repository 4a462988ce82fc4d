//! Cross-correlation kernels
//!
//! The direct kernel is the definition: a dot product accumulated in `f64`.
//! The scan over every candidate window has an FFT-accelerated form using
//! the identity `corr = IFFT(FFT(target) * conj(FFT(pattern)))`, which
//! computes all window dot products in O(n log n) instead of O(n*m). Both
//! forms produce the same values up to floating-point rounding.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Σ a[n]·b[n] over two equal-length windows, accumulated in `f64`
pub fn cross_correlation(a: &[i16], b: &[i16]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

/// Dot product of the pattern against every candidate window of the target
///
/// Returns one value per start offset, `target.len() - pattern.len() + 1`
/// in total. Callers must ensure `0 < pattern.len() <= target.len()`.
pub(crate) fn correlation_scan_direct(target: &[i16], pattern: &[i16]) -> Vec<f64> {
    let windows = target.len() - pattern.len() + 1;
    (0..windows)
        .map(|i| cross_correlation(&target[i..i + pattern.len()], pattern))
        .collect()
}

/// FFT-accelerated form of [`correlation_scan_direct`]
pub(crate) fn correlation_scan_fft(target: &[i16], pattern: &[i16]) -> Vec<f64> {
    let n = target.len();
    let m = pattern.len();
    let windows = n - m + 1;

    // zero-pad past n + m so the circular correlation never wraps into the
    // lags we read back
    let fft_size = (n + m).next_power_of_two();

    let mut target_fd: Vec<Complex<f64>> = target
        .iter()
        .map(|&x| Complex::new(f64::from(x), 0.0))
        .collect();
    target_fd.resize(fft_size, Complex::new(0.0, 0.0));

    let mut pattern_fd: Vec<Complex<f64>> = pattern
        .iter()
        .map(|&x| Complex::new(f64::from(x), 0.0))
        .collect();
    pattern_fd.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut target_fd);
    fft.process(&mut pattern_fd);

    // cross power spectrum: FFT(target) * conj(FFT(pattern))
    for (t, p) in target_fd.iter_mut().zip(pattern_fd.iter()) {
        *t *= p.conj();
    }

    let ifft = planner.plan_fft_inverse(fft_size);
    ifft.process(&mut target_fd);

    // lag k of the inverse transform is the window dot product at offset k
    let scale = 1.0 / fft_size as f64;
    target_fd[..windows].iter().map(|c| c.re * scale).collect()
}
