//! 1-D smoothing and line fitting for profile data
//!
//! Typical inputs are intensity profiles sampled along a scan line or
//! per-column edge positions.

use crate::error::{Error, Result};

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Slope
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
}

impl LineFit {
    /// Evaluate the line at `x`
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares line through `(xs[i], ys[i])`
///
/// Returns `None` for empty or mismatched input, and when the x values are
/// too close together to determine a slope.
pub fn least_squares<X, Y>(xs: &[X], ys: &[Y]) -> Option<LineFit>
where
    X: Copy + Into<f64>,
    Y: Copy + Into<f64>,
{
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }
    let n = xs.len() as f64;
    let (mut sxx, mut sx, mut sxy, mut sy) = (0.0, 0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        let (x, y): (f64, f64) = (x.into(), y.into());
        sxx += x * x;
        sx += x;
        sxy += x * y;
        sy += y;
    }

    let denom = sxx * n - sx * sx;
    if denom.abs() < 0.1 {
        return None;
    }
    Some(LineFit {
        slope: (sxy * n - sx * sy) / denom,
        intercept: (sxx * sy - sx * sxy) / denom,
    })
}

fn check_kernel(len: usize, ksize: usize) -> Result<()> {
    if ksize == 0 || ksize % 2 == 0 || ksize > len {
        return Err(Error::InvalidArgument(format!(
            "kernel size {} must be odd and at most {}",
            ksize, len
        )));
    }
    Ok(())
}

/// Sliding-window median; the `ksize / 2` samples at each end are copied
pub fn median_filter<T: Copy + PartialOrd>(src: &[T], ksize: usize) -> Result<Vec<T>> {
    check_kernel(src.len(), ksize)?;
    let half = ksize / 2;
    let mut dst = src.to_vec();
    let mut window = Vec::with_capacity(ksize);

    for i in half..src.len() - half {
        window.clear();
        window.extend_from_slice(&src[i - half..=i + half]);
        let (_, median, _) = window.select_nth_unstable_by(half, |a, b| {
            a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
        });
        dst[i] = *median;
    }
    Ok(dst)
}

/// Sliding-window mean; the `ksize / 2` samples at each end are copied
pub fn mean_filter<T: Copy + Into<f64>>(src: &[T], ksize: usize) -> Result<Vec<f64>> {
    check_kernel(src.len(), ksize)?;
    let half = ksize / 2;
    let values: Vec<f64> = src.iter().map(|&v| v.into()).collect();
    let mut dst = values.clone();

    let mut sum: f64 = values[..ksize].iter().sum();
    for i in half..values.len() - half {
        if i > half {
            sum += values[i + half] - values[i - half - 1];
        }
        dst[i] = sum / ksize as f64;
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_squares_exact_line() {
        let xs: Vec<i32> = (0..10).collect();
        let ys: Vec<f32> = xs.iter().map(|&x| 0.5 * x as f32 + 0.5).collect();
        let fit = least_squares(&xs, &ys).unwrap();
        assert!((fit.slope - 0.5).abs() < 1e-9);
        assert!((fit.intercept - 0.5).abs() < 1e-9);
        assert!((fit.at(20.0) - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_least_squares_degenerate() {
        assert!(least_squares::<f64, f64>(&[], &[]).is_none());
        assert!(least_squares(&[1.0f64, 2.0], &[1.0f64]).is_none());
        // vertical line: x never changes
        assert!(least_squares(&[3.0f64, 3.0, 3.0], &[1.0f64, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_median_filter_removes_spike() {
        let data = [1u8, 1, 9, 1, 1, 2, 2];
        let out = median_filter(&data, 3).unwrap();
        assert_eq!(out, vec![1, 1, 1, 1, 1, 2, 2]);
    }

    #[test]
    fn test_median_filter_keeps_edges() {
        let data = [7.0f32, 1.0, 2.0, 3.0, 0.0];
        let out = median_filter(&data, 5).unwrap();
        assert_eq!(out, vec![7.0, 1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_mean_filter() {
        let data = [0u8, 3, 6, 9, 12];
        let out = mean_filter(&data, 3).unwrap();
        assert_eq!(out, vec![0.0, 3.0, 6.0, 9.0, 12.0]);

        let step = [0i32, 0, 3, 3];
        let out = mean_filter(&step, 3).unwrap();
        assert_eq!(out, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_kernel_validation() {
        assert!(median_filter(&[1, 2, 3], 2).is_err());
        assert!(median_filter(&[1, 2, 3], 0).is_err());
        assert!(mean_filter(&[1u8, 2, 3], 5).is_err());
    }
}
