//! Database access, gated behind the `server` feature so WASM builds never
//! pull in SQLx or Tokio.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
