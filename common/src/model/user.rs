use serde::{Deserialize, Serialize};

/// One record of an uploaded CSV file, exactly as the backend stores it.
///
/// The field names match the CSV header expected by the backend and are kept
/// verbatim on the wire. The UI treats the values as opaque text.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CsvRow {
    pub name: String,
    pub city: String,
    pub country: String,
    pub favorite_sport: String,
}

/// A `CsvRow` returned by the users endpoint together with its row id.
///
/// The row fields are flattened, so the JSON shape is
/// `{ "id": 1, "name": "...", "city": "...", "country": "...", "favorite_sport": "..." }`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    #[serde(flatten)]
    pub row: CsvRow,
}

impl User {
    /// Text shown on the card's home line: `"<city>, <country>"`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.row.city, self.row.country)
    }
}
