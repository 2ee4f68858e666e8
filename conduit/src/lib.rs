//! Combinators for building pipelines out of tasks and unbuffered channels.
//!
//! Every combinator takes a [`Cancel`] token first, spawns its tasks on the
//! current tokio runtime and closes the channels it owns when its input is
//! exhausted or the token fires.

mod channel;
mod copy;
mod ext;
mod filter;
mod make;
mod merge;
mod pool;
mod split;
mod task;
mod work;

pub use conduit_cancel::{Cancel, Cancelled, Watch};
pub use conduit_error::{Error, ErrorKind};

pub use self::{
    channel::*,
    copy::{copy, tee},
    filter::*,
    make::*,
    merge::merge,
    pool::*,
    split::split,
    work::*,
};

pub mod prelude {
    pub use super::ext::PipeExt;
}
