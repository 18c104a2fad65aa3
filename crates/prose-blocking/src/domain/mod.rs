// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod block_list;
pub mod contacts;
pub mod general;
pub mod presentation;
pub mod shared;
pub mod threads;
