//! Pattern identification over flattened track views
//!
//! Finds occurrences of a short reference pattern ("ad") inside a longer
//! track by normalized cross-correlation:
//! - Similarity of each candidate window = window/pattern correlation
//!   divided by the pattern's self-correlation
//! - Windows at or above the threshold are recorded and the scan skips past
//!   them, so reported matches never overlap

pub mod correlation;

pub use correlation::cross_correlation;

use crate::config::IdentifyConfig;
use crate::error::TrackError;
use crate::track::Track;
use correlation::{correlation_scan_direct, correlation_scan_fft};
use serde::{Deserialize, Serialize};

/// One identified occurrence of the pattern, as a closed sample interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdMatch {
    /// First sample of the occurrence
    pub start: usize,
    /// Last sample of the occurrence (inclusive)
    pub end: usize,
}

/// Identify non-overlapping occurrences of `ad` within `target`
///
/// Scans every candidate start offset in order. A window whose normalized
/// similarity reaches `config.threshold` is recorded as a match and the
/// scan advances past it (`ad` length minus one further positions, or the
/// full length for single-sample patterns), suppressing overlapping
/// re-detection of the same occurrence.
///
/// A pattern longer than the target yields an empty result.
///
/// # Errors
///
/// Returns `DegenerateCorrelation` for a zero-length or zero-energy
/// (all-silent) pattern; similarity is undefined for those and is never
/// left to produce NaN/Inf comparisons.
///
/// # Example
///
/// ```
/// use segtrack::{identify, IdentifyConfig, Track};
///
/// let target = Track::from_samples(&[100, 200, 300, 1, 2, 3, 100, 200, 300]);
/// let ad = Track::from_samples(&[100, 200, 300]);
///
/// let matches = identify(&target, &ad, &IdentifyConfig::default())?;
/// assert_eq!(matches.len(), 2);
/// assert_eq!((matches[0].start, matches[0].end), (0, 2));
/// # Ok::<(), segtrack::TrackError>(())
/// ```
pub fn identify(
    target: &Track,
    ad: &Track,
    config: &IdentifyConfig,
) -> Result<Vec<AdMatch>, TrackError> {
    let ad_len = ad.len();
    let target_len = target.len();

    if ad_len == 0 {
        return Err(TrackError::DegenerateCorrelation("zero-length pattern"));
    }
    if ad_len > target_len {
        return Ok(Vec::new());
    }

    let target_samples = target.to_vec();
    let ad_samples = ad.to_vec();

    let auto = cross_correlation(&ad_samples, &ad_samples);
    if auto == 0.0 {
        return Err(TrackError::DegenerateCorrelation("zero-energy pattern"));
    }

    let windows = target_len - ad_len + 1;
    let use_fft = windows.saturating_mul(ad_len) >= config.fft_cutover;
    log::debug!(
        "identify: target_len={}, ad_len={}, windows={}, fft={}",
        target_len,
        ad_len,
        windows,
        use_fft
    );

    let scores = if use_fft {
        correlation_scan_fft(&target_samples, &ad_samples)
    } else {
        correlation_scan_direct(&target_samples, &ad_samples)
    };

    let mut matches = Vec::new();
    let mut i = 0;
    while i < windows {
        let similarity = scores[i] / auto;
        if similarity >= config.threshold {
            matches.push(AdMatch {
                start: i,
                end: i + ad_len - 1,
            });
            // skip past the matched occurrence so matches never overlap
            i += if ad_len > 1 { ad_len - 1 } else { ad_len };
        }
        i += 1;
    }

    log::debug!("identify: {} matches", matches.len());
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: &[i16], ad: &[i16]) -> Vec<(usize, usize)> {
        let target = Track::from_samples(target);
        let ad = Track::from_samples(ad);
        identify(&target, &ad, &IdentifyConfig::default())
            .unwrap()
            .iter()
            .map(|m| (m.start, m.end))
            .collect()
    }

    #[test]
    fn test_identify_repeated_pattern() {
        let matches = run(
            &[100, 200, 300, 1, 2, 3, 100, 200, 300, 7, 8, 9, 100, 200, 300],
            &[100, 200, 300],
        );
        assert_eq!(matches, vec![(0, 2), (6, 8), (12, 14)]);
    }

    #[test]
    fn test_identify_no_match() {
        let matches = run(&[9, 9, 9, 9, 9, 9], &[1, 2, 3]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_identify_match_at_end() {
        let matches = run(&[0, 0, 0, 4, 5, 6], &[4, 5, 6]);
        assert_eq!(matches, vec![(3, 5)]);
    }

    #[test]
    fn test_identify_adjacent_occurrences_do_not_overlap() {
        let matches = run(&[5, 6, 7, 5, 6, 7, 5, 6, 7], &[5, 6, 7]);
        assert_eq!(matches, vec![(0, 2), (3, 5), (6, 8)]);
        for pair in matches.windows(2) {
            assert!(pair[1].0 > pair[0].1);
        }
    }

    #[test]
    fn test_identify_pattern_longer_than_target() {
        let matches = run(&[1, 2], &[1, 2, 3]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_identify_zero_length_pattern_is_degenerate() {
        let target = Track::from_samples(&[1, 2, 3]);
        let ad = Track::new();
        let result = identify(&target, &ad, &IdentifyConfig::default());
        assert!(matches!(
            result,
            Err(TrackError::DegenerateCorrelation(_))
        ));
    }

    #[test]
    fn test_identify_silent_pattern_is_degenerate() {
        let target = Track::from_samples(&[1, 2, 3, 0, 0, 0]);
        let ad = Track::from_samples(&[0, 0, 0]);
        let result = identify(&target, &ad, &IdentifyConfig::default());
        assert!(matches!(
            result,
            Err(TrackError::DegenerateCorrelation(_))
        ));
    }

    #[test]
    fn test_identify_over_spliced_target() {
        // the matcher sees the flattened view, splice structure is invisible
        let mut target = Track::from_samples(&[100, 200, 300, 7, 8, 9]);
        let mut tail = Track::from_samples(&[100, 200, 300]);
        target.insert(6, &mut tail, 0, 3).unwrap();

        let ad = Track::from_samples(&[100, 200, 300]);
        let matches = identify(&target, &ad, &IdentifyConfig::default()).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[1].start, matches[1].end), (6, 8));
    }

    #[test]
    fn test_identify_fft_path_agrees_with_direct() {
        let base = [100i16, 200, 300, 1, 2, 3, 100, 200, 300, 7, 8, 9];
        let target: Vec<i16> = base.iter().cycle().take(600).copied().collect();
        let t = Track::from_samples(&target);
        let ad = Track::from_samples(&[100, 200, 300]);

        let direct = identify(
            &t,
            &ad,
            &IdentifyConfig {
                fft_cutover: usize::MAX,
                ..IdentifyConfig::default()
            },
        )
        .unwrap();
        let fft = identify(
            &t,
            &ad,
            &IdentifyConfig {
                fft_cutover: 0,
                ..IdentifyConfig::default()
            },
        )
        .unwrap();
        assert_eq!(direct, fft);
        assert!(!direct.is_empty());
    }

    #[test]
    fn test_match_serialization() {
        let m = AdMatch { start: 3, end: 5 };
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"start":3,"end":5}"#);
        let back: AdMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
