//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_HOST, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_LOG_LEVEL, DEFAULT_MAX_TEXT_CHARS,
  DEFAULT_PORT, SERVICE_NAME,
};
pub use env::{
  Config, ENV_BIND_ADDR, ENV_BODY_LIMIT_BYTES, ENV_LOG_LEVEL, ENV_MAX_TEXT_CHARS, ENV_PORT,
};
