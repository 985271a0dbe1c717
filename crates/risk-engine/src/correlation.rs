//! Aggregate correlation statistics over a sparse correlation matrix.
//!
//! The input matrix may be sparse or asymmetric; both measures only read the
//! entries that are actually present.

use risk_core::types::CorrelationMatrix;

/// Mean absolute correlation over ordered pairs of distinct symbols.
///
/// Returns 0 for an empty matrix (or one holding only diagonal entries).
pub fn portfolio_correlation_risk(matrix: &CorrelationMatrix) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for (symbol, row) in matrix {
        for (other, corr) in row {
            if symbol != other {
                sum += corr.abs();
                count += 1;
            }
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Mean absolute correlation of one symbol against the others it has entries
/// for; 0 if it has none.
pub fn symbol_correlation_risk(matrix: &CorrelationMatrix, symbol: &str) -> f64 {
    let Some(row) = matrix.get(symbol) else {
        return 0.0;
    };
    let (sum, count) = row
        .iter()
        .filter(|(other, _)| other.as_str() != symbol)
        .fold((0.0, 0usize), |(sum, count), (_, corr)| {
            (sum + corr.abs(), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
