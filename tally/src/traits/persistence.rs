use core::fmt::{Debug, Display};
use std::error::Error;

/// A trait defining the key-value persistence backend of a store.
///
/// Every key holds one complete, already-encoded collection. The store reads a
/// whole payload with [`Persistence::get`] and writes a whole payload back with
/// [`Persistence::set`]; backends never see partial updates.
pub trait Persistence {
    /// Error type returned by persistence operations.
    type Error: Debug + Display + Error;

    /// Should return the payload stored under `key`, or `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Should replace the payload stored under `key`.
    ///
    /// A failed write must leave the previous payload in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error>;
}

impl<P: Persistence + ?Sized> Persistence for &mut P {
    type Error = P::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }
}
