// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use display_name_formatter::{
    format_display_name_for_alert_message, format_display_name_for_alert_title,
};

mod display_name_formatter;
