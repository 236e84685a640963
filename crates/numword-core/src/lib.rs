#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arabic;
mod decompose;
mod english;
mod error;
mod normalize;
mod registry;
mod table;
mod types;

pub use decompose::{Chunks, DecomposedChunk, chunks};
pub use error::{ConvertError, ConvertResult};
pub use normalize::{
    MAX_DECIMAL_AS_NUMBER, MAX_DECIMAL_DIGITS, NormalizedNumber, normalize,
};
pub use registry::{Language, Registry};
pub use table::{
    CurrencyEntry, GenderedForms, HundredsRule, LinguisticTable, ScaleTier, SpecialValues,
};
pub use types::{Gender, Mode, Number, Request};
