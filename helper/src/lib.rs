#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
#[cfg(feature = "cast")]
pub mod cast;

#[cfg(feature = "digest")]
pub mod digest;

//---------------------------------------------------------------------------------------------------- Private Usage

//----------------------------------------------------------------------------------------------------
