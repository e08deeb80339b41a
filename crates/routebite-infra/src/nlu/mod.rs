//! NLU service client.

mod wit;

pub use wit::WitClient;
