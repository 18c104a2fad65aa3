// prose-core-client/prose-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

extern crate self as prose_utils;

#[doc(hidden)]
pub use serde as __serde;

mod id_string_macro;
