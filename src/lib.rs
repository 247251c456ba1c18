//! # chanring - Multi-channel Ring Buffer
//!
//! A fixed-capacity circular buffer for streamed multi-channel samples, such
//! as sensor data arriving at a known rate across many channels.
//!
//! ## Design
//!
//! - `capacity` rows of `channels` values, stored row-major in one allocation
//! - Storage is never resized; memory use is fixed at construction
//! - `append` writes chunks of any length, truncating oversized chunks to the
//!   newest `capacity` rows and overwriting the oldest rows once full
//! - `get` returns an owned copy of every valid row, oldest first
//! - Both operations are bounded by one copy of the whole storage
//!
//! ## Example
//!
//! ```
//! use chanring::RingBuffer;
//!
//! // Four rows of one channel
//! let mut rb = RingBuffer::<f64>::new((4, 1)).unwrap();
//!
//! rb.append(&[[1.0], [2.0], [3.0]]).unwrap();
//! assert!(!rb.is_full());
//!
//! // Wraps and drops the oldest row
//! rb.append(&[[4.0], [5.0]]).unwrap();
//! assert!(rb.is_full());
//! assert_eq!(rb.get().into_vec(), vec![2.0, 3.0, 4.0, 5.0]);
//! ```
//!
//! The [`profile`] module drives any [`SampleBuffer`] through timed
//! append/get cycles; the `rbprofile` binary runs it from the command line.

#![warn(missing_docs)]

mod error;
mod frames;
pub mod profile;
mod ring_buffer;
mod sample_buffer;

pub use error::RingBufferError;
pub use frames::Frames;
pub use ring_buffer::RingBuffer;
pub use sample_buffer::SampleBuffer;
