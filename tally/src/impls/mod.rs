mod clock;
mod codec;

pub use clock::*;
pub use codec::*;
