//! # Utilities Library
//!
//! Pure helpers shared by the wallet crates: address padding, `0x` handling,
//! hex message encoding, quantum conversion and environment variables.
//!
//! Every function here is total except [`add_address_padding`], which rejects
//! hex bodies longer than 32 bytes.

pub mod address;
pub mod encoding;
pub mod envs;
pub mod quant;

// Re-export commonly used functions
pub use address::{add_address_padding, remove_0x_prefix, AddressError};
pub use encoding::{decode_hex, encode_message_hex};
pub use envs::{get_env, get_env_parse, get_env_parse_or};
pub use quant::{from_supra_quant, to_supra_quant, DEFAULT_DISPLAY_DECIMALS, SUPRA_DECIMALS};
