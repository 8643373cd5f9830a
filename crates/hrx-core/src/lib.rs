//! Rule-based extraction of structured line items from OCR text of
//! DA Form 2062 hand receipts.
//!
//! Input is recognized text lines (with per-line recognition confidence)
//! from any external text recognizer; output is a structured
//! [`Da2062Form`] with scored items, ready for JSON serialization.
//!
//! ```
//! use hrx_core::{Da2062Parser, FormParser};
//!
//! let parser = Da2062Parser::new();
//! let form = parser.parse_text("1 1005-01-584-1079 RIFLE M4 CARBINE EA 2 S/N: M4123456");
//!
//! assert_eq!(form.items[0].stock_number.as_deref(), Some("1005-01-584-1079"));
//! assert_eq!(form.items[0].quantity, 2);
//! ```

pub mod error;
pub mod form;
pub mod models;

pub use error::{HrxError, Result};
pub use form::{Da2062Parser, FormParser};
pub use models::config::{ConfidenceWeights, ExtractionConfig};
pub use models::form::{Da2062Form, ExtractedItem, FormMetadata, RecognizedLine};
