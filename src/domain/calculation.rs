use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved investment calculation for a contact.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: String,
    pub property_type: String,
    pub market_area: String,
    pub investment_amount: f64,
    /// Hold period in whole years.
    pub hold_period: i64,
    pub annual_return_rate: f64,
    pub roi: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub total_return: f64,
    pub property_management_fee: f64,
    pub vacancy_rate: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
