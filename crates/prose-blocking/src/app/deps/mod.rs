// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_config::{AppConfig, RetryPolicy};
pub use app_dependencies::*;

mod app_config;
mod app_dependencies;
