#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

mod common_traits;
mod error;
mod factories;
mod iter;
mod node;
mod seq;
mod seq_cut;
mod seq_transform;
mod seq_visit;

pub use error::SeqError;
pub use factories::{concat, from_iter_lazy, iterate, of, repeat, series, zip_with};
pub use iter::{IntoIter, Iter};
pub use seq::Seq;
