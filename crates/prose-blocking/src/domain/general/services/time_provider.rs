// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Local, Utc};

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

pub trait TimeProvider: SendUnlessWasm + SyncUnlessWasm {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Default)]
pub struct SystemTimeProvider {}

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Local::now().into()
    }
}
