//! Built-in range types
//!
//! The standard PostgreSQL range types ship with fixed, documented oids, so
//! their descriptors never need catalog resolution. This module holds that
//! table plus the helpers that install the default decode pipelines and
//! encode adapters.

use crate::adapt::AdapterRegistry;
use crate::catalog::RangeTypeDescriptor;
use crate::registry::DecoderRegistry;
use crate::value::{DateRange, Int4Range, Int8Range, NumRange, TsRange};

pub fn int4range() -> RangeTypeDescriptor {
    RangeTypeDescriptor::new("int4range", 3904, 23, 3905)
}

pub fn int8range() -> RangeTypeDescriptor {
    RangeTypeDescriptor::new("int8range", 3926, 20, 3927)
}

pub fn numrange() -> RangeTypeDescriptor {
    RangeTypeDescriptor::new("numrange", 3906, 1700, 3907)
}

pub fn daterange() -> RangeTypeDescriptor {
    RangeTypeDescriptor::new("daterange", 3912, 1082, 3913)
}

pub fn tsrange() -> RangeTypeDescriptor {
    RangeTypeDescriptor::new("tsrange", 3908, 1114, 3909)
}

/// Bind the default decode pipelines into a registry
pub(crate) fn bind_defaults(decoders: &mut DecoderRegistry) {
    decoders.bind::<Int4Range>(&int4range());
    decoders.bind::<Int8Range>(&int8range());
    decoders.bind::<NumRange>(&numrange());
    decoders.bind::<DateRange>(&daterange());
    decoders.bind::<TsRange>(&tsrange());
}

/// Install the default encode adapters into a registry
pub(crate) fn register_default_adapters(adapters: &mut AdapterRegistry) {
    adapters.register::<Int4Range>("int4range");
    adapters.register::<Int8Range>("int8range");
    adapters.register::<NumRange>("numrange");
    adapters.register::<DateRange>("daterange");
    adapters.register::<TsRange>("tsrange");
}
