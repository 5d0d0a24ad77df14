//! Locale-aware formatting for tagwright.
//!
//! Formatter configurations are immutable statics and may be shared freely
//! between concurrent render sessions:
//!
//! - [`money::DOT_COMMA`] / [`money::COMMA_SPACE`] implement [`MoneyFormatter`]
//! - [`datetime::EUROPE`] / [`datetime::USA`] implement [`DateTimeFormatter`]
//! - [`iso`] gives the fixed machine-readable forms used in attribute values
//!
//! ## Example
//!
//! ```
//! use tagwright_format::{MoneyFormatter, money::DOT_COMMA};
//!
//! assert_eq!(DOT_COMMA.format_money(1_000_000.into()).as_deref(), Some("1,000,000"));
//! assert_eq!(DOT_COMMA.format_money2(12.5.into()).as_deref(), Some("12.50"));
//! ```

pub mod dateformat;
pub mod datetime;
pub mod iso;
pub mod locale;
pub mod money;
pub mod number;

pub use datetime::{DateTimeFormat, DateTimeFormatter};
pub use locale::{DateTimeLocale, MoneyLocale};
pub use money::{MoneyFormat, MoneyFormatter};
pub use number::{Number, Rounded};
