// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use scrim_event::{CustomEvent, EventSink, ServerEvent};
use scrim_hook::{HookElement, HookRegistry};
use scrim_timing::OneShotQueue;
use scrim_visibility::{VisibilityState, is_open_attr};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

/// An element whose dispatches are counted but not stored.
struct CountingElement {
    id: &'static str,
    show: &'static str,
    dispatched: u64,
}

impl EventSink for CountingElement {
    fn dispatch(&mut self, event: CustomEvent) {
        black_box(&event);
        self.dispatched += 1;
    }
}

impl HookElement for CountingElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(self.id),
            "show" => Some(self.show),
            _ => None,
        }
    }
}

fn bench_visibility_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_update");

    group.bench_function("no_change_storm", |b| {
        let mut state = VisibilityState::new(false);
        b.iter(|| black_box(state.update(black_box(false))));
    });

    group.bench_function("random_flips", |b| {
        let mut rng = Lcg::new(42);
        let mut state = VisibilityState::new(false);
        b.iter(|| black_box(state.update(rng.next_bool())));
    });

    group.bench_function("attr_parse_and_update", |b| {
        let mut state = VisibilityState::new(false);
        let values = [Some("true"), Some("false"), None, Some("TRUE")];
        let mut i = 0_usize;
        b.iter(|| {
            let value = values[i % values.len()];
            i += 1;
            black_box(state.update(is_open_attr(black_box(value))))
        });
    });

    group.finish();
}

fn bench_registry_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_refresh");

    for n in [16_u32, 256] {
        group.bench_function(format!("fan_out_{n}_hooks"), |b| {
            b.iter_batched(
                || {
                    let mut registry = HookRegistry::new();
                    let mut elements = Vec::new();
                    for key in 0..n {
                        let element = CountingElement {
                            id: "m",
                            show: "false",
                            dispatched: 0,
                        };
                        registry.mounted(key, &element);
                        elements.push(element);
                    }
                    (registry, elements)
                },
                |(mut registry, mut elements)| {
                    // One element transitions; the rest are no-op refreshes.
                    elements[0].show = "true";
                    for (key, element) in elements.iter_mut().enumerate() {
                        registry.updated(key as u32, element);
                    }
                    black_box(elements[0].dispatched)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_redirect_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("redirect_queue");

    group.bench_function("schedule_and_drain_16", |b| {
        b.iter_batched(
            OneShotQueue::new,
            |mut queue| {
                for i in 0..16_u64 {
                    queue.schedule_after(i, 100, i);
                }
                let mut sum = 0_u64;
                while let Some((_, payload)) = queue.pop_due(u64::MAX) {
                    sum += payload;
                }
                black_box(sum)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("server_event_relay", |b| {
        let registry_setup = || {
            let mut registry = HookRegistry::new();
            let element = CountingElement {
                id: "m",
                show: "false",
                dispatched: 0,
            };
            registry.mounted(0_u32, &element);
            (registry, element, ServerEvent::with_redirect("saved", "/x"))
        };
        b.iter_batched(
            registry_setup,
            |(mut registry, mut element, event)| {
                registry.on_server_event(0, &mut element, &event, 0);
                black_box(registry.pending_redirects())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_visibility_update,
    bench_registry_refresh,
    bench_redirect_queue
);
criterion_main!(benches);
