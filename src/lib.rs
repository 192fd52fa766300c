pub mod config;
pub mod config_validator;
pub mod domain;

#[cfg(windows)]
pub mod helpers;

#[cfg(windows)]
pub mod platform;

pub mod util;

#[cfg(test)]
mod tests;
