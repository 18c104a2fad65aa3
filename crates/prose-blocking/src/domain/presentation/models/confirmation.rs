// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::block_list::models::BlockAction;

/// The content of a binary confirmation alert.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationPrompt {
    pub action: BlockAction,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationChoice {
    Confirm,
    Cancel,
}
