// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Server events and deferred redirects.
//!
//! Decode wire payloads the way a host binding would, relay them through
//! the hook, and advance a manual clock until the redirect becomes due.
//!
//! Run:
//! - `cargo run -p scrim_demos --example server_events`

use scrim_demos::DemoElement;
use scrim_event::{MODAL_EVENT_CHANNEL, ServerEvent};
use scrim_hook::HookRegistry;

fn main() {
    let mut element = DemoElement::new("m1", "true");
    let mut registry = HookRegistry::new();
    registry.mounted(1_u32, &element);
    println!("listening on channel {MODAL_EVENT_CHANNEL:?}");

    // Payloads as they arrive on the "modal_event" channel. The second one
    // has no opts at all; the third carries an unknown key that is ignored.
    let payloads = [
        r#"{"event": "focus-first", "opts": {}}"#,
        r#"{"event": "flash-saved"}"#,
        r#"{"event": "close-confirmed", "opts": {"redirect_to": "/dashboard", "animate": true}}"#,
    ];

    let mut now = 0_u64;
    for payload in payloads {
        let event: ServerEvent = serde_json::from_str(payload).expect("payload decodes");
        println!("t={now}ms relaying {:?}", event.name);
        registry.on_server_event(1, &mut element, &event, now);
        now += 10;
    }

    // Pump the clock; the redirect fires 100ms after it was scheduled.
    while registry.pending_redirects() > 0 {
        if let Some(redirect) = registry.poll_redirect(now) {
            println!("t={now}ms navigate to {}", redirect.target);
        }
        now += 10;
    }
}
