//! State income tax approximation: one flat top-marginal rate per state.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateRate {
    pub code: &'static str,
    pub name: &'static str,
    /// Top marginal rate in percent
    pub rate: f64,
}

const fn state(code: &'static str, name: &'static str, rate: f64) -> StateRate {
    StateRate { code, name, rate }
}

/// The 50 states and the District of Columbia, ordered by code.
pub static STATE_RATES: [StateRate; 51] = [
    state("AK", "Alaska", 0.0),
    state("AL", "Alabama", 5.0),
    state("AR", "Arkansas", 3.9),
    state("AZ", "Arizona", 2.5),
    state("CA", "California", 13.3),
    state("CO", "Colorado", 4.4),
    state("CT", "Connecticut", 6.99),
    state("DC", "Washington D.C.", 10.75),
    state("DE", "Delaware", 6.6),
    state("FL", "Florida", 0.0),
    state("GA", "Georgia", 5.39),
    state("HI", "Hawaii", 11.0),
    state("IA", "Iowa", 5.7),
    state("ID", "Idaho", 5.695),
    state("IL", "Illinois", 4.95),
    state("IN", "Indiana", 3.05),
    state("KS", "Kansas", 5.7),
    state("KY", "Kentucky", 4.0),
    state("LA", "Louisiana", 4.25),
    state("MA", "Massachusetts", 9.0),
    state("MD", "Maryland", 5.75),
    state("ME", "Maine", 7.15),
    state("MI", "Michigan", 4.25),
    state("MN", "Minnesota", 9.85),
    state("MO", "Missouri", 4.8),
    state("MS", "Mississippi", 4.7),
    state("MT", "Montana", 5.9),
    state("NC", "North Carolina", 4.5),
    state("ND", "North Dakota", 2.5),
    state("NE", "Nebraska", 5.84),
    state("NH", "New Hampshire", 0.0),
    state("NJ", "New Jersey", 10.75),
    state("NM", "New Mexico", 5.9),
    state("NV", "Nevada", 0.0),
    state("NY", "New York", 10.9),
    state("OH", "Ohio", 3.5),
    state("OK", "Oklahoma", 4.75),
    state("OR", "Oregon", 9.9),
    state("PA", "Pennsylvania", 3.07),
    state("RI", "Rhode Island", 5.99),
    state("SC", "South Carolina", 6.4),
    state("SD", "South Dakota", 0.0),
    state("TN", "Tennessee", 0.0),
    state("TX", "Texas", 0.0),
    state("UT", "Utah", 4.65),
    state("VA", "Virginia", 5.75),
    state("VT", "Vermont", 8.75),
    state("WA", "Washington", 0.0),
    state("WI", "Wisconsin", 7.65),
    state("WV", "West Virginia", 5.12),
    state("WY", "Wyoming", 0.0),
];

/// Look up a state by its two-letter code, ignoring case and surrounding whitespace.
///
/// # Example
/// ```rust
/// # use calckit::prelude::state_rate;
/// assert_eq!(state_rate("ca").unwrap().rate, 13.3);
/// assert!(state_rate("ZZ").is_none());
/// ```
pub fn state_rate(code: &str) -> Option<&'static StateRate> {
    let code = code.trim();
    STATE_RATES
        .iter()
        .find(|state| state.code.eq_ignore_ascii_case(code))
}
