//! Typed option constructors.
//!
//! Each returns a descriptor that reads as the option's scalar type. Use them
//! inside [`define_command!`](crate::define_command), which turns every
//! declared option into an accessor returning that type.

use super::data::OptionData;
use super::descriptor::OptionDescriptor;
use crate::schema::OptionType;

/// Declares a string option. Reads as `""` while unbound.
pub fn string(name: impl Into<String>, description: impl Into<String>) -> OptionDescriptor<String> {
    OptionDescriptor::new(
        OptionData::new(OptionType::String, name, description),
        String::new(),
    )
}

/// Declares an integer option. Reads as `0` while unbound.
pub fn integer(name: impl Into<String>, description: impl Into<String>) -> OptionDescriptor<i64> {
    OptionDescriptor::new(OptionData::new(OptionType::Integer, name, description), 0)
}

/// Declares a boolean option. Reads as `false` while unbound.
pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> OptionDescriptor<bool> {
    OptionDescriptor::new(OptionData::new(OptionType::Boolean, name, description), false)
}

/// Declares a floating-point option. Reads as `0.0` while unbound.
pub fn number(name: impl Into<String>, description: impl Into<String>) -> OptionDescriptor<f64> {
    OptionDescriptor::new(OptionData::new(OptionType::Number, name, description), 0.0)
}
