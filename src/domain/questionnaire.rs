use serde::{Deserialize, Serialize};

/// An investor questionnaire submission.
///
/// `markets_interested` and `property_types_interested` are required by
/// the backend contract; a record missing them fails to decode and the
/// section reports a fetch failure rather than rendering partially.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub is_accredited_investor: bool,
    pub has_invested_before: bool,
    pub looking_timeframe: String,
    pub primary_investment_goal: String,
    pub investment_timeline: String,
    pub investment_timeframe: String,
    pub capital_to_invest: String,
    pub use_financing: String,
    pub markets_interested: Vec<String>,
    pub property_types_interested: Vec<String>,
    pub notes: Option<String>,
}
