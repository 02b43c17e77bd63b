mod clock;
mod codec;
mod persistence;
mod record;

pub use clock::*;
pub use codec::*;
pub use persistence::*;
pub use record::*;
