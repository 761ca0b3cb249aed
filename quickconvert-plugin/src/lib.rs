//! QuickConvert Plugin System
//!
//! Provides traits for extending QuickConvert with custom converters:
//! - Plain converters (value + two units)
//! - Parameterized converters (value + two units + declared parameters)
//!
//! Both kinds are held by a `ConverterRegistry`, which checks each
//! definition when it is registered and hands them out in registration
//! order.

mod traits;
mod params;
mod registry;

pub use traits::{
    Converter, ParameterizedConverter,
    ConverterMeta, ParamMeta, ParamDefault,
    validate_request,
};
pub use params::{Params, ResolvedParams};
pub use registry::{ConverterRegistry, RegisteredConverter, ConverterInfo};
