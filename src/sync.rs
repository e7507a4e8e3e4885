//! Lock used by [`SharedDeck`](crate::SharedDeck).
//!
//! With `std` this wraps `std::sync::Mutex` and ignores poisoning, since
//! every deck operation leaves the deck in a valid state. Without `std`
//! it is `spin::Mutex`, which has the same method names.

#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
