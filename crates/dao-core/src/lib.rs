//! # dao-core
//!
//! Data-object model types and their untyped-dictionary and JSON forms.
//!
//! - [`dao::Dao`]: the shared contract (construction, dictionary conversion,
//!   update, difference check) and [`dao::BaseObject`]
//! - [`entities`]: every concrete data object
//! - [`types`]: embedded value records such as [`types::Priority`] and
//!   [`types::LocalizedString`]
//! - [`enums`]: enumerated field values
//! - [`dictionary`]: lenient per-field parsing of untyped dictionaries
//! - [`codec`]: strict JSON encode/decode
//! - [`kinds`]: runtime dispatch by entity kind name
//! - [`ids`]: injectable identifier generation

pub mod codec;
pub mod dao;
pub mod dictionary;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod kinds;
pub mod types;

pub use dao::{BaseObject, Dao};
pub use dictionary::DataDictionary;
pub use errors::CoreError;
pub use kinds::EntityKind;
