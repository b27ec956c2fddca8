//! Client half of the pipeline: language pickers, prompt construction and
//! the conversion lifecycle that talks to `/api/convert`.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod i18n;
pub mod picker;
pub mod prompt;
pub mod transport;

pub use catalog::LanguageCatalog;
pub use config::ClientConfig;
pub use controller::{ConversionController, ConversionState, Failure, Submission};
pub use i18n::{Locale, Messages};
pub use picker::{LanguagePicker, PickerError, PickerEvent};
pub use prompt::{ConversionRequest, Prompt};
pub use transport::{ConversionTransport, HttpTransport};
