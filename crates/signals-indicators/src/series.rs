//! Element-wise series transforms.

/// First difference: `out[i] = series[i] - series[i - 1]`, NaN at index 0.
pub fn diff(series: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(series.len());
    if series.is_empty() {
        return out;
    }

    out.push(f64::NAN);
    out.extend(series.windows(2).map(|pair| pair[1] - pair[0]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff() {
        let result = diff(&[1.0, 3.0, 2.0, 2.0]);

        assert_eq!(result.len(), 4);
        assert!(result[0].is_nan());
        assert_eq!(&result[1..], &[2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_diff_short_inputs() {
        assert!(diff(&[]).is_empty());

        let single = diff(&[5.0]);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_nan());
    }

    #[test]
    fn test_diff_propagates_nan() {
        let result = diff(&[1.0, f64::NAN, 3.0]);
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
    }
}
