//! Parameterized CRC-8, CRC-16 and CRC-32.
//!
//! ```
//! use crc_engine::{catalog, Crc};
//!
//! let crc = Crc::from_algorithm(&catalog::CRC_16_CCITT_FALSE, true);
//! assert_eq!(crc.calculate("123456789"), 0x29B1);
//! ```

pub mod any;
pub mod catalog;
mod engine;
mod error;
pub mod reflect;
pub mod table;
mod width;

pub use any::{all_algorithms, find_algorithm, AnyAlgorithm, AnyCrc};
pub use catalog::Algorithm;
pub use engine::{Crc, Params};
pub use error::{Error, Result};
pub use reflect::{reflect, REFLECT_BYTE};
pub use table::build_table;
pub use width::Width;
