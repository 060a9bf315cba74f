// SPDX-License-Identifier: MIT OR Apache-2.0
//! Simulated view with a frame-driven animation loop.
//!
//! Committed drivers become running animations that only advance when
//! [`SimView::tick`] is called, the way a compositor loop would drive them.
//! Values move linearly; the demo only needs something observable.

use group_animator::{AnimationDriver, AnimationTarget, Clock, DriverError, Property, TargetId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// One property inside a running animation
#[derive(Debug, Clone, Copy)]
struct Channel {
    property: Property,
    from: Option<f32>,
    to: f32,
}

#[derive(Debug)]
struct Running {
    id: u64,
    begin: Instant,
    duration: Duration,
    channels: Vec<Channel>,
}

#[derive(Debug, Default)]
struct ViewState {
    values: HashMap<Property, f32>,
    running: Vec<Running>,
    next_id: u64,
}

impl ViewState {
    fn value(&self, property: Property) -> f32 {
        self.values.get(&property).copied().unwrap_or_else(|| home_value(property))
    }
}

/// Resting value of a freshly laid-out view
fn home_value(property: Property) -> f32 {
    match property {
        Property::ScaleX | Property::ScaleY | Property::Alpha => 1.0,
        _ => 0.0,
    }
}

/// A view whose properties are animated by the frame loop
#[derive(Clone)]
pub struct SimView {
    id: TargetId,
    name: &'static str,
    state: Rc<RefCell<ViewState>>,
    clock: Rc<dyn Clock>,
}

impl SimView {
    /// Create a view at its home values
    pub fn new(name: &'static str, clock: Rc<dyn Clock>) -> Self {
        Self {
            id: TargetId::new(),
            name,
            state: Rc::default(),
            clock,
        }
    }

    /// View name for logging
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Advance every running animation to the clock's current instant
    ///
    /// Returns true while anything is still running.
    pub fn tick(&self) -> bool {
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        let ViewState { values, running, .. } = &mut *state;

        running.retain_mut(|anim| {
            if now < anim.begin {
                return true;
            }
            let t = if anim.duration.is_zero() {
                1.0
            } else {
                (now.duration_since(anim.begin).as_secs_f32() / anim.duration.as_secs_f32()).min(1.0)
            };
            for channel in &mut anim.channels {
                let property = channel.property;
                let current = values.get(&property).copied().unwrap_or_else(|| home_value(property));
                let from = *channel.from.get_or_insert(current);
                values.insert(property, from + (channel.to - from) * t);
            }
            t < 1.0
        });

        !running.is_empty()
    }

    /// Snapshot of the properties the demo cares about
    pub fn describe(&self) -> String {
        let state = self.state.borrow();
        format!(
            "rotation={:.1} translationX={:.1} alpha={:.2} scaleX={:.2} scaleY={:.2}",
            state.value(Property::Rotation),
            state.value(Property::TranslationX),
            state.value(Property::Alpha),
            state.value(Property::ScaleX),
            state.value(Property::ScaleY),
        )
    }
}

impl std::fmt::Debug for SimView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimView").field("name", &self.name).finish_non_exhaustive()
    }
}

impl AnimationTarget for SimView {
    type Driver = SimDriver;

    fn target_id(&self) -> TargetId {
        self.id
    }

    fn value(&self, property: Property) -> f32 {
        self.state.borrow().value(property)
    }

    fn begin_driver(&self) -> Result<SimDriver, DriverError> {
        Ok(SimDriver {
            view: self.clone(),
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            channels: Vec::new(),
            running_id: None,
        })
    }
}

/// Driver that hands its batch to the view's frame loop on commit
pub struct SimDriver {
    view: SimView,
    delay: Duration,
    duration: Duration,
    channels: Vec<Channel>,
    running_id: Option<u64>,
}

impl AnimationDriver for SimDriver {
    fn configure(&mut self, delay_ms: u32, duration_ms: u32) {
        self.delay = Duration::from_millis(u64::from(delay_ms));
        self.duration = Duration::from_millis(u64::from(duration_ms));
    }

    fn set_target(&mut self, property: Property, value: f32) {
        self.channels.push(Channel {
            property,
            from: None,
            to: value,
        });
    }

    fn commit(&mut self) -> Result<(), DriverError> {
        if self.running_id.is_some() {
            return Err(DriverError::CommitFailed("driver already committed".into()));
        }
        let begin = self.view.clock.now() + self.delay;
        let mut state = self.view.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;

        // A newer animation takes over any channel it shares with a running one.
        for running in &mut state.running {
            running
                .channels
                .retain(|c| !self.channels.iter().any(|n| n.property == c.property));
        }
        state.running.retain(|r| !r.channels.is_empty());

        state.running.push(Running {
            id,
            begin,
            duration: self.duration,
            channels: std::mem::take(&mut self.channels),
        });
        self.running_id = Some(id);
        tracing::trace!("{}: animation {} queued", self.view.name, id);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(id) = self.running_id.take() {
            self.view.state.borrow_mut().running.retain(|r| r.id != id);
            tracing::trace!("{}: animation {} cancelled", self.view.name, id);
        }
    }
}
