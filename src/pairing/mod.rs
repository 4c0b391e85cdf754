pub mod swiss;
pub mod types;

pub use swiss::generate_pairings;
pub use types::Pairing;
