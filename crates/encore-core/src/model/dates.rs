use serde::{Deserialize, Serialize};

use crate::model::ids::ActId;

/// Concert dates for one act, as served at the act's `concertDates` link.
///
/// Dates are kept verbatim (`"*23-08-2019"`, `"22-08-2019"`); upstream marks
/// the first date of a tour leg with a leading `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertDates {
    pub id: ActId,
    #[serde(default)]
    pub dates: Vec<String>,
}

impl ConcertDates {
    /// Dates with the tour-leg marker stripped.
    pub fn plain(&self) -> impl Iterator<Item = &str> {
        self.dates.iter().map(|date| date.trim_start_matches('*'))
    }
}
