// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval operations over loose values.
//!
//! Every operation here accepts each argument in any of the three external shapes, as a single interval or as a sequence, detects the shape per argument, sorts, runs the matching sweep and hands the result back in the caller's shape. Predicates return a plain boolean; combinators always return an array, in the shape of the argument that owns the result (the boundaries for [`complement`](fn.complement.html), the right-hand side for [`intersect`](fn.intersect.html), the first argument otherwise).
//!
//! An argument matching none of the shapes fails the whole call with [`UnrecognizedFormat`](../format/struct.UnrecognizedFormat.html); nothing is retried or silently repaired.

use crate::format::{denormalize_sequence, normalize_sequence, to_canonical};
use crate::format::{Attrs, Format, LooseInterval, UnrecognizedFormat};
use crate::sweep;
use serde_json::Value;

fn normalized(value: &Value) -> Result<Vec<LooseInterval>, UnrecognizedFormat> {
  normalize_sequence(Format::detect(value)?, value)
}

fn sorted(value: &Value) -> Result<Vec<LooseInterval>, UnrecognizedFormat> {
  let mut intervals = normalized(value)?;
  sweep::sort_by_start(&mut intervals);
  Ok(intervals)
}

fn leading(value: &Value) -> Result<Option<LooseInterval>, UnrecognizedFormat> {
  let mut intervals = sorted(value)?;
  if intervals.is_empty() {
    Ok(None)
  }
  else {
    Ok(Some(intervals.remove(0)))
  }
}

fn pairwise<F>(a: &Value, b: &Value, relation: F) -> Result<bool, UnrecognizedFormat> where
 F: Fn(&LooseInterval, &LooseInterval) -> bool
{
  match (leading(a)?, leading(b)?) {
    (Some(x), Some(y)) => Ok(relation(&x, &y)),
    _ => Ok(false)
  }
}

/// Does some interval of `a` overlap some interval of `b`?
pub fn is_overlapping(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  Ok(sweep::overlaps_any(&sorted(a)?, &sorted(b)?))
}

/// Do `a` and `b` touch at a boundary without overlapping?
pub fn is_meeting(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.meets(y))
}

/// Is `a` entirely before `b`, adjacency included?
pub fn is_before(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.is_before(y))
}

/// Is `a` entirely after `b`, adjacency included?
pub fn is_after(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.is_after(y))
}

/// Do `a` and `b` share their starting point?
pub fn is_starting(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.starts_with(y))
}

/// Do `a` and `b` share their ending point?
pub fn is_ending(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.ends_with(y))
}

/// Does `a` fall inside `b`, boundaries included?
pub fn is_during(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.is_during(y))
}

/// Do `a` and `b` have the same bounds?
pub fn is_equal(a: &Value, b: &Value) -> Result<bool, UnrecognizedFormat> {
  pairwise(a, b, |x, y| x.same_bounds(y))
}

/// Gaps of `intervals` inside `boundaries`, in the boundaries' shape and
/// with their extra fields. An empty sequence gives the boundaries back
/// unchanged.
pub fn complement(boundaries: &Value, intervals: &Value) -> Result<Value, UnrecognizedFormat> {
  if matches!(intervals, Value::Array(items) if items.is_empty()) {
    return Ok(Value::Array(vec![boundaries.clone()]));
  }
  let out_format = Format::detect(boundaries)?;
  let boundary = to_canonical(out_format, boundaries)?;
  let gaps = sweep::complement(&boundary, &sorted(intervals)?);
  Ok(denormalize_sequence(out_format, &gaps))
}

/// Coalesces touching or overlapping intervals of one sequence.
pub fn simplify(intervals: &Value) -> Result<Value, UnrecognizedFormat> {
  let format = Format::detect(intervals)?;
  let mut seq = normalize_sequence(format, intervals)?;
  sweep::sort_by_start(&mut seq);
  Ok(denormalize_sequence(format, &sweep::simplify(&seq)))
}

/// Union of `a` and `b`, in the shape of `a`.
pub fn unify(a: &Value, b: &Value) -> Result<Value, UnrecognizedFormat> {
  let out_format = Format::detect(a)?;
  let joined = sweep::unify(&normalized(a)?, &normalized(b)?);
  Ok(denormalize_sequence(out_format, &joined))
}

/// Pairwise intersection of `a` and `b`; the result takes `b`'s shape and
/// extra fields.
pub fn intersect(a: &Value, b: &Value) -> Result<Value, UnrecognizedFormat> {
  let out_format = Format::detect(b)?;
  let pieces = sweep::intersect(&sorted(a)?, &sorted(b)?);
  Ok(denormalize_sequence(out_format, &pieces))
}

/// `base` minus `mask`, in `base`'s shape and with its extra fields.
pub fn subtract(base: &Value, mask: &Value) -> Result<Value, UnrecognizedFormat> {
  let out_format = Format::detect(base)?;
  let left = sweep::subtract(&sorted(base)?, &sorted(mask)?);
  Ok(denormalize_sequence(out_format, &left))
}

/// Non-overlapping cover of `intervals` where `merge_fn` combines the extra
/// fields of every source interval containing a piece.
pub fn merge<F>(merge_fn: F, intervals: &Value) -> Result<Value, UnrecognizedFormat> where
 F: Fn(&[&Attrs]) -> Attrs
{
  let format = Format::detect(intervals)?;
  let mut seq = normalize_sequence(format, intervals)?;
  sweep::sort_by_start(&mut seq);
  Ok(denormalize_sequence(format, &sweep::merge(merge_fn, &seq)))
}

/// Cuts intervals at every point strictly inside them; every piece keeps
/// its source's extra fields.
pub fn split(points: &[f64], intervals: &Value) -> Result<Value, UnrecognizedFormat> {
  let format = Format::detect(intervals)?;
  let seq = normalize_sequence(format, intervals)?;
  Ok(denormalize_sequence(format, &sweep::split(points, &seq)))
}
