/// Cubic ease-out: fast start, slow finish. Progress is clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Fraction of `duration_ms` covered by `elapsed_ms`, in [0, 1].
///
/// A frame timestamp can land slightly before the anchor taken with
/// `performance.now()`, so negative elapsed time counts as zero.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn test_ease_out_cubic_clamps() {
        assert_eq!(ease_out_cubic(-0.25), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=1000 {
            let eased = ease_out_cubic(i as f64 / 1000.0);
            assert!(eased >= last, "eased value dropped at step {}", i);
            last = eased;
        }
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(0.0, 1000.0), 0.0);
        assert_eq!(progress(250.0, 1000.0), 0.25);
        assert_eq!(progress(1000.0, 1000.0), 1.0);
        assert_eq!(progress(4000.0, 1000.0), 1.0);
        assert_eq!(progress(-3.0, 1000.0), 0.0);
    }
}
