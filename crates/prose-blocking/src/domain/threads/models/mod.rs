// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use thread::{Thread, ThreadId, ThreadKind, ThreadState};

mod thread;
