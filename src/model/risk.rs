use serde::Serialize;

/// Position of the prediction of interest in the processing response.
///
/// Fixed by the model served behind the processing endpoint, not a setting.
pub const PREDICTION_INDEX: usize = 4;

/// Shortest prediction batch that still carries [`PREDICTION_INDEX`].
pub const MIN_PREDICTIONS: usize = PREDICTION_INDEX + 1;

/// Percentages at or above this value are labelled [`RiskLabel::HighRisk`].
pub const HIGH_RISK_THRESHOLD_PERCENT: f64 = 2.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLabel {
    #[serde(rename = "HIGH_RISK")]
    HighRisk,
    #[serde(rename = "LOW_RISK")]
    LowRisk,
}

impl RiskLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "HIGH_RISK",
            RiskLabel::LowRisk => "LOW_RISK",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// `raw × 100` with exactly two decimals.
    pub percentage: String,
    pub label: RiskLabel,
    pub raw: f64,
}

/// Classifies a single prediction value.
///
/// The label is decided on the rounded percentage, the same figure that is
/// shown to the user and printed on the report.
pub fn classify(prediction: f64) -> RiskAssessment {
    let percent = prediction * 100.0;
    let percentage = two_decimals(percent);
    let shown = percentage.parse::<f64>().unwrap_or(percent);
    let label = if shown >= HIGH_RISK_THRESHOLD_PERCENT {
        RiskLabel::HighRisk
    } else {
        RiskLabel::LowRisk
    };

    RiskAssessment {
        percentage,
        label,
        raw: prediction,
    }
}

/// Formats with two decimals, rounding exact halves away from zero.
///
/// `format!` breaks exact binary ties to even, which would print 0.125 as
/// "0.12" where the report server expects "0.13".
fn two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // Every finite f64 has at most 1074 fractional digits, so this is exact.
    let exact = format!("{magnitude:.1100}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let is_tie = fraction.get(2..3) == Some("5")
        && fraction.get(3..).unwrap_or("").bytes().all(|digit| digit == b'0');
    if !is_tie {
        return format!("{sign}{magnitude:.2}");
    }

    let mut digits: Vec<char> = whole.chars().chain(fraction.chars().take(2)).collect();
    let mut position = digits.len();
    loop {
        if position == 0 {
            digits.insert(0, '1');
            break;
        }
        position -= 1;
        if digits[position] == '9' {
            digits[position] = '0';
        } else {
            digits[position] = char::from(digits[position] as u8 + 1);
            break;
        }
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().collect();
    let cents: String = digits[split..].iter().collect();
    format!("{sign}{whole}.{cents}")
}

/// Classifies the prediction at [`PREDICTION_INDEX`], or `None` when the
/// batch is too short to carry it.
pub fn assess(predictions: &[f64]) -> Option<RiskAssessment> {
    predictions.get(PREDICTION_INDEX).copied().map(classify)
}
