//! Recognition services.
//!
//! Turns raw engine matches into typed [`MatchModel`](crate::MatchModel)s:
//!
//! ```text
//! DateTimeService ── RecognizerCache ── DateTimeRecognizer<F>
//!                                          ├── RecognitionEngine::parse
//!                                          └── build_match_model
//!                                                └── ObjectFactory::create
//!                                                      └── build_interval
//! ```

mod cache;
mod facade;
mod factory;
mod match_builder;
pub mod range_builder;
mod recognizer;

pub use cache::RecognizerCache;
pub use facade::{DEFAULT_LOCALE, DateTimeService, RecognizeRequest, Recognized};
pub use factory::{
    BaselineFactory, FactoryKind, ObjectFactory, PreciseFactory, SECONDS_PATTERN, TIMEX_FIELD,
    VALUE_FIELD,
};
pub use match_builder::build_match_model;
pub use range_builder::build_interval;
pub use recognizer::DateTimeRecognizer;
