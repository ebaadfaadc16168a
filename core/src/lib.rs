//! Light theme derivation and output formats for a design token document.
//!
//! The flow is: parse a [`TokenDocument`], derive the light variant with a
//! [`ColorInverter`], resolve either document into a [`TokenDictionary`] and
//! hand that to any [`Formatter`].

pub mod dictionary;
pub mod document;
mod error;
pub mod extensions;
pub mod format;
pub mod inversion;
mod naming;
pub mod reference;

pub use dictionary::{TokenDictionary, TokenRecord};
pub use document::{Token, TokenDocument, TokenNode};
pub use error::{Error, Result};
pub use format::{FileContext, Format, FormatOptions, Formatter};
pub use inversion::{ColorInverter, InversionSummary, InversionTable};
pub use naming::{kebab_name, title_words};
pub use reference::TokenReference;
