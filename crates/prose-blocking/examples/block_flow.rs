// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use prose_blocking::domain::contacts::models::{Contact, Identity};
use prose_blocking::domain::contacts::services::NameResolver;
use prose_blocking::domain::presentation::models::{ConfirmationChoice, ConfirmationPrompt};
use prose_blocking::domain::presentation::services::PresentationAnchor;
use prose_blocking::domain::shared::models::PhoneNumber;
use prose_blocking::domain::threads::models::Thread;
use prose_blocking::infra::block_list::InMemoryBlockStore;
use prose_blocking::{BlockingClient, ClientDelegate, ClientEvent};

struct AddressBook {
    contacts: Vec<Contact>,
}

impl NameResolver for AddressBook {
    fn display_name(&self, id: &PhoneNumber) -> String {
        self.resolve_contact(id)
            .and_then(|contact| contact.full_name)
            .unwrap_or_default()
    }

    fn resolve_contact(&self, id: &PhoneNumber) -> Option<Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.phone_numbers.contains(id))
            .cloned()
    }
}

/// Prints every prompt and confirms it.
struct ConsoleAnchor;

#[async_trait]
impl PresentationAnchor for ConsoleAnchor {
    fn is_live(&self) -> bool {
        true
    }

    async fn present_confirmation(&self, prompt: ConfirmationPrompt) -> ConfirmationChoice {
        println!(
            "{}\n{}\n[{}] / {}",
            prompt.title, prompt.message, prompt.confirm_label, prompt.cancel_label
        );
        ConfirmationChoice::Confirm
    }
}

struct Delegate;

impl ClientDelegate for Delegate {
    fn handle_event(&self, event: ClientEvent) {
        info!("Received event {event:?}");
    }
}

fn enable_logging() {
    let fmt_layer = tracing_subscriber::fmt::Layer::new()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    Registry::default().with(fmt_layer).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    enable_logging();

    let jane = Contact::new("jane")
        .with_full_name("Jane Doe")
        .with_phone_number("+15551234567")
        .with_phone_number("+49301234");

    let client = BlockingClient::builder()
        .set_block_store(InMemoryBlockStore::default())
        .set_name_resolver(AddressBook {
            contacts: vec![jane.clone()],
        })
        .set_delegate(Some(Box::new(Delegate)))
        .build();

    let anchor = Arc::new(ConsoleAnchor);
    let threads = vec![Thread::contact("t1", "+15551234567").with_snippet("Hi there")];

    client
        .block_actions()
        .request_block(
            Identity::from(jane.clone()),
            anchor.clone(),
            Some(Box::new(|is_blocked| {
                println!("Jane is blocked: {is_blocked}")
            })),
        )
        .await?;

    let block_set = client.block_set();
    let name_resolver = client.deps().name_resolver.clone();
    let mut presenter = client.thread_row_presenter();

    for thread in &threads {
        let row = presenter.configure_from_thread(thread, name_resolver.as_ref(), &block_set)?;
        println!("{} {:?} {:?}", row.name, row.snippet, row.blocked_badge);
    }

    client
        .block_actions()
        .request_unblock(Identity::from(jane), anchor, None)
        .await?;

    println!("Blocked numbers left: {}", client.block_set().len());

    Ok(())
}
