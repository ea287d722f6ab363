mod combine;
mod finite;
mod infinite;

pub use combine::{concat, zip_with};
pub use finite::{from_iter_lazy, of};
pub use infinite::{iterate, repeat, series};
