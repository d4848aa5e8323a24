//! Timeline Engine Layer
//!
//! Pure windowing and pagination logic, deterministic, no I/O.
//! Takes a sequence length and request parameters → returns the index range to serve.
//!
//! # Example
//!
//! ```
//! use timeline_engine::{compute_window, paginate, Limit, Page, Window};
//!
//! let limit = Limit::parse("4");
//! let window = compute_window(10, Some(5), limit);
//! assert_eq!(window, Window::new(3, 7));
//!
//! let page = Page::parse("1");
//! let window = paginate(window, limit.unwrap(), page, 10);
//! assert_eq!(window, Window::new(7, 10));
//! ```

#![warn(clippy::all)]

pub mod paginate;
pub mod params;
pub mod window;

pub use paginate::paginate;
pub use params::{Limit, Page};
pub use window::{compute_window, Window};
