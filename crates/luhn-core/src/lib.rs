#![deny(missing_docs)]
#![doc = "Shared errors, alphabet, options and input validation for the Luhn checksum engines."]

pub mod alphabet;
pub mod dynamic;
pub mod errors;
pub mod modulus;
mod options;
pub mod rng;
pub mod validation;

pub use alphabet::ALPHABET;
pub use errors::{ErrorInfo, LuhnError};
pub use modulus::Modulus;
pub use options::GenerateOptions;
pub use rng::RngHandle;
