use serde::{Deserialize, Serialize};

// =========================================================
// Spreadsheet export types
// =========================================================

/// Flattened worksheet for the spreadsheet collaborator: one block of rows
/// per set (set header, set data, fish header, fish rows, blank spacer),
/// every cell already stringified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetData {
    /// Suggested download name, `{lake}_{yyyymmdd}.xlsx`
    pub file_name: String,
    pub sheet_name: String,
    pub rows: Vec<Vec<String>>,
}

/// Route function name constant for the spreadsheet export
pub const GET_SPREADSHEET: &str = "get_spreadsheet";
