//! SHA-256 digest engine plus the byte sources that feed it.
//!
//! ```
//! let digest = sha256::sha256::digest(b"abc");
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod sha256;
pub mod source;
