#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod cancel;
mod watch;

pub use self::{cancel::*, watch::*};
