// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear sweeps over sorted interval sequences.
//!
//! Every function consumes sequences sorted ascending by `start` and walks them with forward-only cursors, so combining two sequences costs one pass. Sorting is the caller's duty; the polymorphic operations in [`ops`](../ops/index.html) sort before calling in. Empty input is always legal and produces empty (or identity) output.
//!
//! Payload routing is part of each contract: `intersect` keeps the right-hand payloads, `complement` the boundary's, `subtract` the base's, and `simplify` the payload of the run element reaching farthest.

use crate::interval::{pmax, pmin, Interval};
use std::cmp::Ordering;

/// Stable sort by `start`; incomparable bounds are left where they are.
pub fn sort_by_start<B, P>(intervals: &mut [Interval<B, P>]) where B: PartialOrd
{
  intervals.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));
}

/// True when some element of `a` overlaps some element of `b`.
///
/// Elements of `b` ending at or before the current element of `a` are
/// discarded once and never revisited, which keeps the scan at O(n+m).
pub fn overlaps_any<B, PA, PB>(a: &[Interval<B, PA>], b: &[Interval<B, PB>]) -> bool where
 B: PartialOrd
{
  let mut j = 0;
  for x in a {
    while j < b.len() && b[j].is_before(x) {
      j += 1;
    }
    if j == b.len() {
      return false;
    }
    if x.overlaps(&b[j]) {
      return true;
    }
  }
  false
}

/// Gaps left by `intervals` inside `boundary`, each gap carrying the
/// boundary's payload.
///
/// A gap opens between consecutive neighbours of the list, so the input is
/// expected simplified as well as sorted. An empty `intervals` yields the
/// boundary itself.
pub fn complement<B, P, Q>(boundary: &Interval<B, P>, intervals: &[Interval<B, Q>]) -> Vec<Interval<B, P>> where
 B: Copy + PartialOrd,
 P: Clone
{
  if intervals.is_empty() {
    return vec![boundary.clone()];
  }
  let mut res = Vec::new();
  let mut cursor = boundary.start;
  for x in intervals {
    if cursor < x.start {
      res.push(boundary.rebound(cursor, x.start));
    }
    cursor = x.end;
  }
  if cursor < boundary.end {
    res.push(boundary.rebound(cursor, boundary.end));
  }
  res
}

/// Coalesces runs of overlapping or touching intervals into their covering
/// interval.
///
/// A run keeps growing while the next interval starts at or before the run's
/// end, so an element nested deep inside the run cannot break it. Each output
/// keeps the payload of the run element with the greatest end, the last such
/// element when several tie.
pub fn simplify<B, P>(intervals: &[Interval<B, P>]) -> Vec<Interval<B, P>> where
 B: Copy + PartialOrd,
 P: Clone
{
  let mut res = Vec::new();
  let mut iter = intervals.iter();
  let first = match iter.next() {
    Some(first) => first,
    None => return res
  };
  let mut run_start = first.start;
  let mut widest = first;
  for x in iter {
    if x.start <= widest.end {
      if x.end >= widest.end {
        widest = x;
      }
    }
    else {
      res.push(widest.rebound(run_start, widest.end));
      run_start = x.start;
      widest = x;
    }
  }
  res.push(widest.rebound(run_start, widest.end));
  res
}

/// Union of two sequences: concatenate, re-sort, simplify.
pub fn unify<B, P>(a: &[Interval<B, P>], b: &[Interval<B, P>]) -> Vec<Interval<B, P>> where
 B: Copy + PartialOrd,
 P: Clone
{
  let mut all: Vec<Interval<B, P>> = a.iter().cloned().chain(b.iter().cloned()).collect();
  sort_by_start(&mut all);
  simplify(&all)
}

/// Pairwise intersection of two sequences.
///
/// Each piece keeps the payload of the `b` side. Zero-length pieces are
/// suppressed and touching pieces stay separate; in particular several
/// elements of `b` falling in one element of `a` each produce their own
/// piece. Advances whichever cursor ends first, both on a tie.
pub fn intersect<B, PA, PB>(a: &[Interval<B, PA>], b: &[Interval<B, PB>]) -> Vec<Interval<B, PB>> where
 B: Copy + PartialOrd,
 PB: Clone
{
  let mut res = Vec::new();
  let mut i = 0;
  let mut j = 0;
  while i < a.len() && j < b.len() {
    while i < a.len() && a[i].is_before(&b[j]) {
      i += 1;
    }
    if i == a.len() {
      break;
    }
    while j < b.len() && b[j].is_before(&a[i]) {
      j += 1;
    }
    if j == b.len() {
      break;
    }
    let x = &a[i];
    let y = &b[j];
    let start = pmax(x.start, y.start);
    let end = pmin(x.end, y.end);
    if start < end {
      res.push(y.rebound(start, end));
    }
    if x.end <= y.end {
      i += 1;
    }
    if y.end <= x.end {
      j += 1;
    }
  }
  res
}

/// `base` minus `mask`, each piece keeping its base element's payload.
///
/// One global intersection pass computes the covered pieces, which are then
/// partitioned per base element and complemented inside it. Pieces wholly
/// before a base element are dropped once, so the partition advances with
/// the bases.
pub fn subtract<B, PA, PB>(base: &[Interval<B, PA>], mask: &[Interval<B, PB>]) -> Vec<Interval<B, PA>> where
 B: Copy + PartialOrd,
 PA: Clone
{
  let covered = intersect(mask, base);
  let mut res = Vec::new();
  let mut from = 0;
  for x in base {
    while from < covered.len() && covered[from].is_before(x) {
      from += 1;
    }
    let holes: Vec<Interval<B, PA>> = covered[from..].iter()
      .take_while(|c| c.start < x.end)
      .filter(|c| x.overlaps(*c))
      .cloned()
      .collect();
    res.extend(complement(x, &holes));
  }
  res
}

/// Non-overlapping cover of `intervals` where each piece's payload is
/// `merge_fn` over the payloads of every source interval containing it.
///
/// Each step emits from the lowest remaining start to the nearest boundary
/// beyond it, then trims everything it consumed. The trim keeps the slice
/// sorted, and the cursor never moves backwards, so runs of identical
/// boundaries collapse into one zero-width piece instead of looping.
pub fn merge<B, P, F>(merge_fn: F, intervals: &[Interval<B, P>]) -> Vec<Interval<B, P>> where
 B: Copy + PartialOrd,
 P: Clone,
 F: Fn(&[&P]) -> P
{
  let mut remaining: Vec<Interval<B, P>> = intervals.to_vec();
  let mut res = Vec::new();
  while !remaining.is_empty() {
    let start = remaining[0].start;
    let mut next_bound = None;
    for r in &remaining {
      if r.end > start {
        let candidate = if r.start > start { r.start } else { r.end };
        next_bound = match next_bound {
          None => Some(candidate),
          Some(b) => Some(pmin(b, candidate))
        };
      }
    }
    let end = next_bound.unwrap_or(start);
    let piece = Interval::new(start, end);
    let payloads: Vec<&P> = remaining.iter()
      .filter(|r| piece.is_during(*r))
      .map(|r| &r.payload)
      .collect();
    res.push(Interval::with_payload(start, end, merge_fn(&payloads)));
    remaining = remaining.into_iter()
      .filter(|r| r.end > end)
      .map(|mut r| {
        if r.start <= end {
          r.start = end;
        }
        r
      })
      .collect();
  }
  res
}

/// Cuts every interval at each point falling strictly inside it; pieces keep
/// the source payload and points outside an interval leave it untouched.
/// Output stays grouped by source interval, pieces ascending.
pub fn split<B, P>(points: &[B], intervals: &[Interval<B, P>]) -> Vec<Interval<B, P>> where
 B: Copy + PartialOrd,
 P: Clone
{
  if points.is_empty() {
    return intervals.to_vec();
  }
  let mut cuts: Vec<B> = points.to_vec();
  cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
  let mut res = Vec::new();
  for x in intervals {
    let mut cursor = x.start;
    for &p in &cuts {
      if p > cursor && p < x.end {
        res.push(x.rebound(cursor, p));
        cursor = p;
      }
    }
    res.push(x.rebound(cursor, x.end));
  }
  res
}
