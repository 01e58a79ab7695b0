//! Authentication for the Indodax trade API
//!
//! Private calls are `POST /tapi` with a form-urlencoded body signed by
//! HMAC-SHA512. This crate owns the three pieces that must agree byte for byte:
//! the parameter encoder, the signer, and the credentials holding the secret.
//!
//! # Example
//!
//! ```no_run
//! use indodax_auth::{Credentials, Params, RequestSigner};
//! use indodax_types::Method;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!
//!     let signed = RequestSigner::new(&creds, Method::OpenOrders)
//!         .params(Params::new().with("pair", "btc_idr"))
//!         .sign()?;
//!
//!     println!("body: {}", signed.body);
//!     println!("sign: {}", signed.signature);
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod params;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use params::Params;
pub use signer::{sign, sign_payload, timestamp_ms, RequestSigner, SignedRequest};
