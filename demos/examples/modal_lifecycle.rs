// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle event basics.
//!
//! Drive one modal through open/close transitions and show that only real
//! changes emit lifecycle events.
//!
//! Run:
//! - `cargo run -p scrim_demos --example modal_lifecycle`

use scrim_demos::DemoElement;
use scrim_hook::HookRegistry;

fn main() {
    let mut element = DemoElement::new("m1", "false");
    let mut registry = HookRegistry::new();

    println!("mount (show=\"false\"): nothing is emitted");
    registry.mounted(1_u32, &element);

    println!("server opens the modal (show=\"true\"), refresh:");
    element.set_show("true");
    registry.updated(1, &mut element);

    println!("refresh with no change: nothing is emitted");
    registry.updated(1, &mut element);

    println!("server closes the modal (show=\"false\"), refresh:");
    element.set_show("false");
    registry.updated(1, &mut element);

    let names: Vec<_> = element.dispatched.iter().map(|e| e.name.as_str()).collect();
    println!("lifecycle events seen: {names:?}");
}
