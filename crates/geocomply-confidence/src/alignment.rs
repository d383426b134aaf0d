use serde::{Deserialize, Serialize};

/// Agreement between the primary and secondary confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentCheck {
    pub aligned: bool,
    /// `1 - |primary - secondary|`, in [0, 1] for in-range inputs.
    pub alignment_score: f64,
    pub explanation: String,
}

/// Compare `primary` and `secondary`.
///
/// `aligned` is `alignment_score >= threshold`, so a lower threshold
/// accepts more divergence. Fusion only consumes `alignment_score`.
pub fn validate_alignment(primary: f64, secondary: f64, threshold: f64) -> AlignmentCheck {
    let alignment_score = (1.0 - (primary - secondary).abs()).clamp(0.0, 1.0);
    let aligned = alignment_score >= threshold;
    let explanation = if aligned {
        format!("Good alignment between primary ({primary:.3}) and secondary ({secondary:.3})")
    } else {
        format!(
            "Poor alignment: primary ({primary:.3}) vs secondary ({secondary:.3}) - requires review"
        )
    };
    AlignmentCheck {
        aligned,
        alignment_score,
        explanation,
    }
}
