use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Proposal {
    pub client: String,
    pub project: String,
    pub prepared_by: String,
    pub date: NaiveDate,
    /// ISO 4217 code printed after every amount.
    pub currency: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub scope: Vec<ScopeItem>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub pricing: Vec<PriceLine>,
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopeItem {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub weeks: u32,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// One priced line, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriceLine {
    pub item: String,
    pub amount: u64,
}

impl Proposal {
    pub fn total(&self) -> u64 {
        self.pricing.iter().map(|line| line.amount).sum()
    }

    pub fn total_weeks(&self) -> u32 {
        self.milestones.iter().map(|m| m.weeks).sum()
    }

    /// `amount` formatted with this proposal's currency.
    pub fn money(&self, amount: u64) -> String {
        format_amount(amount, &self.currency)
    }
}

/// Format `amount` with comma thousands separators, e.g. `12,500 EUR`.
pub fn format_amount(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if currency.is_empty() {
        grouped
    } else {
        format!("{grouped} {currency}")
    }
}
