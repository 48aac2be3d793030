// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sweep-line algebra over numeric interval sequences.
//!
//! Intervals are half-open `[start, end)` ranges carrying an opaque caller payload. The typed core ([interval](interval/index.html) and [sweep](sweep/index.html)) combines sorted sequences in linear time: overlap tests, union, intersection, complement, subtraction, payload merging and splitting. The loose layer ([format](format/index.html) and [ops](ops/index.html)) accepts the three shapes used at the boundary, `{start, end}` and `{from, to}` objects and `[start, end]` pairs, and hands results back in the caller's shape with its extra fields preserved.
//!
//! # Examples
//!
//! ```rust
//! use span::sweep;
//! use span::Interval;
//!
//! let a = vec![Interval::new(1, 2), Interval::new(7, 9)];
//! let b = vec![Interval::new(4, 8)];
//! assert_eq!(sweep::unify(&a, &b), vec![Interval::new(1, 2), Interval::new(4, 9)]);
//! ```
//!
//! The same union through the loose layer, in from/to shape:
//!
//! ```rust
//! use serde_json::json;
//! use span::ops;
//!
//! let union = ops::unify(
//!   &json!([{ "from": 1.0, "to": 2.0 }, { "from": 7.0, "to": 9.0 }]),
//!   &json!({ "from": 4.0, "to": 8.0 }),
//! ).unwrap();
//! assert_eq!(union, json!([{ "from": 1.0, "to": 2.0 }, { "from": 4.0, "to": 9.0 }]));
//! ```
//!
//! # References
//! * J. F. Allen, *Maintaining Knowledge about Temporal Intervals*, CACM 26(11), 1983.
//! * [Boost Interval Container Library](https://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

pub mod format;
pub mod interval;
pub mod ops;
pub mod sweep;

pub use crate::format::{Attrs, Format, LooseInterval, UnrecognizedFormat};
pub use crate::interval::{Interval, ToInterval};
