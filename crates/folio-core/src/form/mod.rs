//! Contact-form controller: a pure reducer plus the async submit driver.

pub mod controller;
pub mod driver;

pub use controller::{
    reduce, Effect, FocusTarget, FormEvent, FormState, Notice, Phase, RelayOutcome,
};
pub use driver::submit;
