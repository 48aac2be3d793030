// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! External interval shapes and the loose-value adapter.
//!
//! Three equivalent shapes travel at the boundary: `{start, end}` objects, `{from, to}` objects and `[start, end]` pairs. A whole argument shares one shape, declared by its representative element. Object shapes may carry extra fields; those are split off into the canonical payload on the way in and merged back on the way out, so they survive a round trip untouched. The pair shape has nowhere to put extra fields and drops them.

use crate::interval::Interval;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Extra fields carried by an object-shaped interval.
pub type Attrs = Map<String, Value>;

/// Canonical form of a loose value: `f64` bounds plus the leftover fields.
pub type LooseInterval = Interval<f64, Attrs>;

/// The value, or the representative element of a sequence, matches none of
/// the supported shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized interval format")]
pub struct UnrecognizedFormat;

/// Shape tag of an external argument, detected once and applied to the
/// whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  StartEnd,
  FromTo,
  Pair
}

#[derive(Deserialize)]
struct StartEndShape {
  start: f64,
  end: f64,
  #[serde(flatten)]
  rest: Attrs
}

#[derive(Deserialize)]
struct FromToShape {
  from: f64,
  to: f64,
  #[serde(flatten)]
  rest: Attrs
}

impl Format
{
  /// Shape of the representative element: a number or an inner array is a
  /// pair, a null or an object with `start` is start/end, an object with
  /// `from` is from/to. The representative of a sequence is its first
  /// element, and of an empty sequence a null.
  pub fn detect(value: &Value) -> Result<Format, UnrecognizedFormat> {
    let representative = match value {
      Value::Array(items) => items.first().unwrap_or(&Value::Null),
      other => other
    };
    match representative {
      Value::Number(_) | Value::Array(_) => Ok(Format::Pair),
      Value::Null => Ok(Format::StartEnd),
      Value::Object(fields) if fields.contains_key("start") => Ok(Format::StartEnd),
      Value::Object(fields) if fields.contains_key("from") => Ok(Format::FromTo),
      _ => Err(UnrecognizedFormat)
    }
  }
}

/// Reads one external value as a canonical interval, keeping every field
/// other than the bounds.
pub fn to_canonical(format: Format, value: &Value) -> Result<LooseInterval, UnrecognizedFormat> {
  match format {
    Format::StartEnd => {
      let shape: StartEndShape =
        serde_json::from_value(value.clone()).map_err(|_| UnrecognizedFormat)?;
      Ok(Interval::with_payload(shape.start, shape.end, shape.rest))
    }
    Format::FromTo => {
      let shape: FromToShape =
        serde_json::from_value(value.clone()).map_err(|_| UnrecognizedFormat)?;
      Ok(Interval::with_payload(shape.from, shape.to, shape.rest))
    }
    Format::Pair => {
      let items = value.as_array().ok_or(UnrecognizedFormat)?;
      let start = items.get(0).and_then(Value::as_f64).ok_or(UnrecognizedFormat)?;
      let end = items.get(1).and_then(Value::as_f64).ok_or(UnrecognizedFormat)?;
      Ok(Interval::with_payload(start, end, Attrs::new()))
    }
  }
}

/// Writes a canonical interval back in the given shape.
pub fn from_canonical(format: Format, interval: &LooseInterval) -> Value {
  match format {
    Format::StartEnd => {
      let mut fields = interval.payload.clone();
      fields.insert("start".to_owned(), number(interval.start));
      fields.insert("end".to_owned(), number(interval.end));
      Value::Object(fields)
    }
    Format::FromTo => {
      let mut fields = interval.payload.clone();
      fields.insert("from".to_owned(), number(interval.start));
      fields.insert("to".to_owned(), number(interval.end));
      Value::Object(fields)
    }
    Format::Pair => Value::Array(vec![number(interval.start), number(interval.end)])
  }
}

fn number(x: f64) -> Value {
  Number::from_f64(x).map(Value::Number).unwrap_or(Value::Null)
}

/// Normalizes a loose argument into a canonical sequence. A scalar interval
/// becomes a singleton; an argument is a sequence when it is an array whose
/// first element is not a number.
pub fn normalize_sequence(format: Format, value: &Value) -> Result<Vec<LooseInterval>, UnrecognizedFormat> {
  if let Value::Array(items) = value {
    if !matches!(items.first(), Some(Value::Number(_))) {
      return items.iter().map(|item| to_canonical(format, item)).collect();
    }
  }
  to_canonical(format, value).map(|interval| vec![interval])
}

/// Converts a canonical sequence back into a loose array of the given shape.
pub fn denormalize_sequence(format: Format, intervals: &[LooseInterval]) -> Value {
  Value::Array(intervals.iter().map(|i| from_canonical(format, i)).collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn detect_test() {
    let cases = vec![
      (1, json!({ "start": 0.0, "end": 5.0 }), Ok(Format::StartEnd)),
      (2, json!({ "from": 0.0, "to": 5.0 }), Ok(Format::FromTo)),
      (3, json!([0.0, 5.0]), Ok(Format::Pair)),
      (4, json!([{ "start": 0.0, "end": 5.0 }]), Ok(Format::StartEnd)),
      (5, json!([{ "from": 0.0, "to": 5.0 }]), Ok(Format::FromTo)),
      (6, json!([[0.0, 5.0], [7.0, 9.0]]), Ok(Format::Pair)),
      (7, json!([]), Ok(Format::StartEnd)),
      (8, json!({ "test": 1 }), Err(UnrecognizedFormat)),
      (9, json!([{ "test": 1 }]), Err(UnrecognizedFormat)),
      (10, json!("0..5"), Err(UnrecognizedFormat)),
      (11, json!(3.0), Ok(Format::Pair)),
      (12, json!(null), Ok(Format::StartEnd)),
      // Both bound names present: start wins.
      (13, json!({ "start": 0.0, "end": 5.0, "from": 1.0, "to": 2.0 }), Ok(Format::StartEnd)),
    ];
    for (id, value, expected) in cases {
      assert_eq!(Format::detect(&value), expected, "test #{} of detect", id);
    }
  }

  #[test]
  fn canonical_round_trip_test() {
    let start_end = json!({ "start": 1.0, "end": 8.0, "test": "foo", "weight": 3 });
    let interval = to_canonical(Format::StartEnd, &start_end).unwrap();
    assert_eq!((interval.start, interval.end), (1.0, 8.0));
    assert_eq!(interval.payload.get("test"), Some(&json!("foo")));
    assert_eq!(from_canonical(Format::StartEnd, &interval), start_end);

    let from_to = json!({ "from": 1.0, "to": 8.0, "test": "foo" });
    let interval = to_canonical(Format::FromTo, &from_to).unwrap();
    assert_eq!((interval.start, interval.end), (1.0, 8.0));
    assert_eq!(from_canonical(Format::FromTo, &interval), from_to);

    let pair = json!([1.0, 8.0]);
    let interval = to_canonical(Format::Pair, &pair).unwrap();
    assert_eq!((interval.start, interval.end), (1.0, 8.0));
    assert!(interval.payload.is_empty());
    assert_eq!(from_canonical(Format::Pair, &interval), pair);
  }

  #[test]
  fn to_canonical_rejects_malformed_test() {
    let cases = vec![
      (1, Format::StartEnd, json!({ "start": 0.0 })),
      (2, Format::StartEnd, json!({ "start": "zero", "end": 5.0 })),
      (3, Format::StartEnd, json!(null)),
      (4, Format::FromTo, json!({ "from": 0.0 })),
      (5, Format::Pair, json!([0.0])),
      (6, Format::Pair, json!(3.0)),
      (7, Format::Pair, json!(["zero", "five"])),
    ];
    for (id, format, value) in cases {
      assert_eq!(to_canonical(format, &value), Err(UnrecognizedFormat), "test #{} of to_canonical", id);
    }
  }

  #[test]
  fn normalize_sequence_test() {
    let scalar = json!({ "start": 0.0, "end": 5.0 });
    assert_eq!(normalize_sequence(Format::StartEnd, &scalar).unwrap().len(), 1);

    let sequence = json!([{ "start": 0.0, "end": 5.0 }, { "start": 7.0, "end": 9.0 }]);
    assert_eq!(normalize_sequence(Format::StartEnd, &sequence).unwrap().len(), 2);

    // One pair is a scalar, a list of pairs is a sequence.
    assert_eq!(normalize_sequence(Format::Pair, &json!([0.0, 5.0])).unwrap().len(), 1);
    assert_eq!(normalize_sequence(Format::Pair, &json!([[0.0, 5.0], [7.0, 9.0]])).unwrap().len(), 2);

    assert_eq!(normalize_sequence(Format::StartEnd, &json!([])).unwrap().len(), 0);
  }

  #[test]
  fn denormalize_sequence_test() {
    let intervals = vec![
      Interval::with_payload(0.0, 5.0, Attrs::new()),
      Interval::with_payload(7.0, 9.0, Attrs::new()),
    ];
    assert_eq!(denormalize_sequence(Format::Pair, &intervals), json!([[0.0, 5.0], [7.0, 9.0]]));
    assert_eq!(
      denormalize_sequence(Format::FromTo, &intervals),
      json!([{ "from": 0.0, "to": 5.0 }, { "from": 7.0, "to": 9.0 }])
    );
  }
}
