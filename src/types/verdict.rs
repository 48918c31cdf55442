// src/types/verdict.rs
//! Fraud classification of backend results.
//!
//! The `/detect` contract carries the verdict only as a display label
//! ("Likely FAKE ❌", "Likely REAL ✅", ...). Until the backend exposes a
//! structured field, the label is classified by looking for `FRAUD_MARKER`.

use super::response::CompanySearchResponse;

/// Case-sensitive substring marking a fraudulent verdict label
pub const FRAUD_MARKER: &str = "FAKE";

/// Company fraud score above which a record is treated as fraudulent when the
/// backend omits `is_fraud`
const COMPANY_FRAUD_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Fraudulent,
    Legitimate,
}

impl Verdict {
    pub fn from_label(label: &str) -> Self {
        if label.contains(FRAUD_MARKER) {
            Verdict::Fraudulent
        } else {
            Verdict::Legitimate
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Fraudulent => "fraud",
            Verdict::Legitimate => "legitimate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyStanding {
    Fraudulent,
    Legitimate,
}

impl CompanyStanding {
    /// Prefers the backend's `is_fraud` flag, falling back to the score
    pub fn of(response: &CompanySearchResponse) -> Self {
        let fraudulent = response.is_fraud.unwrap_or_else(|| {
            response
                .company_data
                .as_ref()
                .and_then(|data| data.fraud_score.as_ref())
                .and_then(|score| score.as_f64())
                .is_some_and(|score| score > COMPANY_FRAUD_THRESHOLD)
        });

        if fraudulent {
            CompanyStanding::Fraudulent
        } else {
            CompanyStanding::Legitimate
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CompanyStanding::Fraudulent => "fraud",
            CompanyStanding::Legitimate => "legitimate",
        }
    }
}
