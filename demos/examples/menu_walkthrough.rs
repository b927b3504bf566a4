// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough of the three interaction behaviors on one host.
//!
//! This example shows how to combine:
//! - `trellis_tree` for element structure and pointer queries,
//! - `trellis_behavior` for menu navigation, focus-leave, and delayed hover,
//! - a small host type implementing the capability traits.
//!
//! Run:
//! - `cargo run -p trellis_demos --example menu_walkthrough`

use kurbo::{Point, Rect};
use trellis_behavior::host::{ElementLookup, FocusControl, PointerView, TimerHost};
use trellis_behavior::hover::DelayedHover;
use trellis_behavior::leave::FocusLeave;
use trellis_behavior::menu::{MenuKey, MenuNavigation};
use trellis_focus::adapters::tree::menu_container;
use trellis_hover::TimerToken;
use trellis_tree::{ElementId, LocalElement, Tree};

/// Host for the walkthrough: a real element tree, focus state, a movable
/// pointer, and a manual timer queue driven by `fire_due`.
struct DemoHost {
    tree: Tree,
    focused: Option<ElementId>,
    pointer: Option<Point>,
    now: u64,
    timers: Vec<(TimerToken, u64)>,
}

impl DemoHost {
    fn new(tree: Tree) -> Self {
        Self {
            tree,
            focused: None,
            pointer: None,
            now: 0,
            timers: Vec::new(),
        }
    }

    /// Advance the clock and pop every timer due by then, earliest first.
    fn fire_due(&mut self, t: u64) -> Vec<TimerToken> {
        self.now = t;
        self.timers.sort_by_key(|(_, deadline)| *deadline);
        let mut due = Vec::new();
        self.timers.retain(|(token, deadline)| {
            if *deadline <= t {
                due.push(*token);
                false
            } else {
                true
            }
        });
        due
    }
}

impl ElementLookup for DemoHost {
    type Id = ElementId;

    fn is_live(&self, id: ElementId) -> bool {
        self.tree.is_alive(id)
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        self.tree.contains(ancestor, node)
    }

    fn common_container(&self, items: &[ElementId]) -> Option<ElementId> {
        menu_container(&self.tree, items)
    }
}

impl FocusControl for DemoHost {
    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn request_focus(&mut self, id: ElementId) {
        println!("  focus -> {id:?}");
        self.focused = Some(id);
    }

    fn release_focus(&mut self, id: ElementId) {
        println!("  blur  -> {id:?}");
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    fn activate(&mut self, id: ElementId) {
        println!("  click -> {id:?}");
    }
}

impl PointerView for DemoHost {
    fn pointer_over(&self, id: ElementId) -> bool {
        let Some(point) = self.pointer else {
            return false;
        };
        self.tree
            .element_at(point)
            .is_some_and(|hit| self.tree.contains(id, hit))
    }
}

impl TimerHost for DemoHost {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, token: TimerToken, deadline_ms: u64) {
        println!("  timer scheduled for t={deadline_ms}");
        self.timers.push((token, deadline_ms));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.timers.retain(|(t, _)| *t != token);
    }
}

fn main() {
    // A dropdown: three items stacked inside a menu panel, plus an unrelated
    // button elsewhere on the surface.
    let mut tree = Tree::new();
    let surface = tree.insert(
        None,
        LocalElement {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            ..LocalElement::default()
        },
    );
    let panel = tree.insert(
        Some(surface),
        LocalElement {
            bounds: Rect::new(20.0, 20.0, 180.0, 140.0),
            ..LocalElement::default()
        },
    );
    let items: Vec<ElementId> = (0..3)
        .map(|i| {
            let y = 30.0 + 35.0 * f64::from(i);
            tree.insert(
                Some(panel),
                LocalElement {
                    bounds: Rect::new(30.0, y, 170.0, y + 30.0),
                    ..LocalElement::default()
                },
            )
        })
        .collect();
    let button = tree.insert(
        Some(surface),
        LocalElement {
            bounds: Rect::new(250.0, 20.0, 380.0, 60.0),
            ..LocalElement::default()
        },
    );

    let mut host = DemoHost::new(tree);

    println!("== Keyboard navigation ==");
    let menu_items = items.clone();
    let mut nav = MenuNavigation::attach(&mut host, move || menu_items.clone());
    let container = nav.container(&host).expect("items share the panel");
    assert_eq!(container, panel);

    for key in [
        MenuKey::ArrowDown,
        MenuKey::ArrowDown,
        MenuKey::ArrowDown, // wraps back to the first item
        MenuKey::ArrowUp,   // and wraps to the last
        MenuKey::Enter,
        MenuKey::Escape,
    ] {
        println!("key {key:?}:");
        let target = host.focused.unwrap_or(container);
        nav.on_key_down(&mut host, target, key);
    }

    println!("\n== Focus leave ==");
    let mut leave = FocusLeave::attach(move || Some(panel), || println!("  focus left the menu"));
    host.focused = Some(items[0]);
    println!("focus moves within the menu:");
    leave
        .on_focus_out(&host, Some(items[1]))
        .expect("live target");
    println!("focus moves to the unrelated button:");
    leave.on_focus_out(&host, Some(button)).expect("live target");

    println!("\n== Delayed hover ==");
    let mut hover = DelayedHover::attach(&mut host, panel, 150);
    println!("pointer enters the panel at t=0:");
    host.pointer = Some(Point::new(100.0, 80.0));
    hover.on_pointer_enter(&mut host);
    println!("  delayed signal at t=0: {}", hover.get());

    for token in host.fire_due(150) {
        hover.on_timer(token);
    }
    println!("  delayed signal at t=150: {}", hover.get());

    println!("pointer leaves:");
    host.pointer = None;
    hover.on_pointer_leave(&mut host);
    println!("  delayed signal after leave: {}", hover.get());

    hover.detach(&mut host);
    leave.detach();
    nav.detach();
}
