//! Decoder registry
//!
//! This module owns the mapping from type oid to decode pipeline. Binding a
//! range type installs two pipelines: one for the scalar range oid and one
//! for the corresponding array-of-range oid. Decoded values are stored
//! type-erased and read back through downcasting accessors.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use range_literal::LiteralError;

use crate::cast::{cast_range, BoundCast};
use crate::catalog::{Oid, RangeTypeDescriptor};
use crate::errors::RangeHausError;
use crate::value::RangeFromBounds;

/// A decoded range (or array of ranges), type-erased
pub type DecodedRange = Box<dyn Any + Send + Sync>;

/// A decode pipeline: raw column text in, typed range out.
///
/// `None` input is a SQL NULL column and decodes to `None`.
pub type RangeDecoder =
    Arc<dyn Fn(Option<&str>) -> Result<Option<DecodedRange>, RangeHausError> + Send + Sync>;

struct BoundDecoder {
    type_name: String,
    decoder: RangeDecoder,
}

/// Oid-keyed table of decode pipelines for one scope (a connection, or the
/// process when shared)
pub struct DecoderRegistry {
    entries: HashMap<Oid, BoundDecoder>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Bind `R` as the decoded type for `descriptor`'s range and array oids.
    ///
    /// Re-binding an oid silently overwrites the previous pipeline.
    pub fn bind<R>(&mut self, descriptor: &RangeTypeDescriptor)
    where
        R: RangeFromBounds + Send + Sync + 'static,
        R::Bound: BoundCast,
    {
        let scalar: RangeDecoder = Arc::new(|text| {
            Ok(cast_range::<R>(text)?.map(|range| Box::new(range) as DecodedRange))
        });

        let array: RangeDecoder = Arc::new(|text| {
            let Some(text) = text else {
                return Ok(None);
            };

            let ranges = split_array_literal(text)?
                .into_iter()
                .map(|element| cast_range::<R>(element.as_deref()))
                .collect::<Result<Vec<Option<R>>, _>>()?;

            Ok(Some(Box::new(ranges) as DecodedRange))
        });

        crate::trace_log!(
            "binding range decoder for {} (oid {}, array oid {})",
            descriptor.type_name,
            descriptor.range_oid,
            descriptor.array_oid
        );

        self.entries.insert(
            descriptor.range_oid,
            BoundDecoder {
                type_name: descriptor.type_name.clone(),
                decoder: scalar,
            },
        );
        self.entries.insert(
            descriptor.array_oid,
            BoundDecoder {
                type_name: format!("{}[]", descriptor.type_name),
                decoder: array,
            },
        );
    }

    /// Check whether a pipeline is bound for `oid`
    pub fn contains(&self, oid: Oid) -> bool {
        self.entries.contains_key(&oid)
    }

    /// The range type name bound for `oid`, if any
    pub fn type_name(&self, oid: Oid) -> Option<&str> {
        self.entries.get(&oid).map(|entry| entry.type_name.as_str())
    }

    /// Run the pipeline bound for `oid` on a raw column value
    pub fn decode(
        &self,
        oid: Oid,
        text: Option<&str>,
    ) -> Result<Option<DecodedRange>, RangeHausError> {
        let entry = self
            .entries
            .get(&oid)
            .ok_or(RangeHausError::UnboundOid(oid))?;

        (entry.decoder)(text)
    }

    /// Decode a scalar range column as `R`
    pub fn decode_as<R: 'static>(
        &self,
        oid: Oid,
        text: Option<&str>,
    ) -> Result<Option<R>, RangeHausError> {
        match self.decode(oid, text)? {
            None => Ok(None),
            Some(decoded) => decoded
                .downcast::<R>()
                .map(|range| Some(*range))
                .map_err(|_| RangeHausError::DecodeType(oid)),
        }
    }

    /// Decode an array-of-range column as a vector of `R`
    pub fn decode_array_as<R: 'static>(
        &self,
        oid: Oid,
        text: Option<&str>,
    ) -> Result<Option<Vec<Option<R>>>, RangeHausError> {
        match self.decode(oid, text)? {
            None => Ok(None),
            Some(decoded) => decoded
                .downcast::<Vec<Option<R>>>()
                .map(|ranges| Some(*ranges))
                .map_err(|_| RangeHausError::DecodeType(oid)),
        }
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a PostgreSQL array literal into raw elements.
///
/// Elements are either double-quoted (with backslash escape pairs) or bare;
/// a bare `NULL` is a NULL element. Range values inside arrays are always
/// double-quoted by the server since they contain commas.
fn split_array_literal(text: &str) -> Result<Vec<Option<String>>, RangeHausError> {
    let inner = text
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| array_shape_error(text))?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let mut elements = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        match chars.peek() {
            Some('"') => {
                chars.next();
                let mut value = String::new();
                let mut closed = false;

                while let Some(c) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some(escaped) => value.push(escaped),
                            None => return Err(array_shape_error(text)),
                        },
                        other => value.push(other),
                    }
                }

                if !closed {
                    return Err(array_shape_error(text));
                }
                elements.push(Some(value));
            }
            Some(_) => {
                let mut value = String::new();
                while let Some(&c) = chars.peek() {
                    if c == ',' {
                        break;
                    }
                    value.push(c);
                    chars.next();
                }

                if value.eq_ignore_ascii_case("null") {
                    elements.push(None);
                } else {
                    elements.push(Some(value));
                }
            }
            // A separator with nothing after it
            None => return Err(array_shape_error(text)),
        }

        match chars.next() {
            Some(',') => continue,
            Some(_) => return Err(array_shape_error(text)),
            None => break,
        }
    }

    Ok(elements)
}

fn array_shape_error(text: &str) -> RangeHausError {
    RangeHausError::MalformedLiteral(LiteralError::UnexpectedShape(format!(
        "'{text}' is not a valid array literal"
    )))
}
