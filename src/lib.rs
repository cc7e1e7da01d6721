mod codec;
pub mod errors;
mod phone_number;
pub mod regions;
pub mod string_util;

pub use codec::{PHONE_NUMBER_CODEC, PhoneNumberCodec};
pub use phone_number::PhoneNumber;
