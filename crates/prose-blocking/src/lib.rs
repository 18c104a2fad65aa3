// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! The block list confirmation and conversation list state core of the Prose apps.
//!
//! `BlockActionCoordinator` confirms and applies block list changes, `ThreadRowPresenter`
//! renders conversation rows from the current block list and `ThreadSelectionController`
//! decides whether blocked recipients may be picked when starting a conversation.

pub use client::{BlockingClient, ClientDelegate};
pub use client_builder::{BlockingClientBuilder, UndefinedBlockStore, UndefinedNameResolver};
pub use client_event::ClientEvent;

pub use app::dtos;
pub use app::services;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;
pub mod domain;
pub mod infra;
