// src/services/csv_import.rs

pub mod checks;
pub mod parser;
pub mod report;

pub use checks::{validate_row, ResolvedRow, RowCheck, RowRejection, ROW_CHECKS};
pub use parser::{parse_rows, REQUIRED_HEADERS};
pub use report::{error_report, template, ERROR_REPORT_FILE_NAME, TEMPLATE_FILE_NAME};
