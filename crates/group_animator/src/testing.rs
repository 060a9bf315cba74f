// SPDX-License-Identifier: MIT OR Apache-2.0
//! Recording target used by the unit tests.

use crate::driver::{AnimationDriver, AnimationTarget, TargetId};
use crate::error::DriverError;
use crate::property::Property;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A call made on a recording driver
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    Configure(u32, u32),
    SetTarget(Property, f32),
    Commit,
    Cancel,
}

/// A committed batch as seen by the target
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub timing: (u32, u32),
    pub properties: Vec<(Property, f32)>,
}

#[derive(Debug, Default)]
struct State {
    values: HashMap<Property, f32>,
    calls: Vec<DriverCall>,
    batches: Vec<Batch>,
    drivers_begun: usize,
    begin_limit: Option<usize>,
    fail_commits: bool,
}

/// Target that records every driver interaction
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    id: TargetId,
    state: Rc<RefCell<State>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self {
            id: TargetId::new(),
            state: Rc::default(),
        }
    }

    pub fn set_value(&self, property: Property, value: f32) {
        self.state.borrow_mut().values.insert(property, value);
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.state.borrow().calls.clone()
    }

    pub fn batches(&self) -> Vec<Batch> {
        self.state.borrow().batches.clone()
    }

    pub fn drivers_begun(&self) -> usize {
        self.state.borrow().drivers_begun
    }

    /// Hand out `count` drivers, then report the driver as unavailable
    pub fn fail_begin_after(&self, count: usize) {
        self.state.borrow_mut().begin_limit = Some(count);
    }

    pub fn fail_commits(&self) {
        self.state.borrow_mut().fail_commits = true;
    }
}

impl AnimationTarget for RecordingTarget {
    type Driver = RecordingDriver;

    fn target_id(&self) -> TargetId {
        self.id
    }

    fn value(&self, property: Property) -> f32 {
        self.state.borrow().values.get(&property).copied().unwrap_or(0.0)
    }

    fn begin_driver(&self) -> Result<RecordingDriver, DriverError> {
        let mut state = self.state.borrow_mut();
        if state.begin_limit.is_some_and(|limit| state.drivers_begun >= limit) {
            return Err(DriverError::Unavailable("driver limit reached".into()));
        }
        state.drivers_begun += 1;
        Ok(RecordingDriver {
            state: Rc::clone(&self.state),
            pending: Batch {
                timing: (0, 0),
                properties: Vec::new(),
            },
        })
    }
}

/// Driver handed out by [`RecordingTarget`]
#[derive(Debug)]
pub struct RecordingDriver {
    state: Rc<RefCell<State>>,
    pending: Batch,
}

impl AnimationDriver for RecordingDriver {
    fn configure(&mut self, delay_ms: u32, duration_ms: u32) {
        self.pending.timing = (delay_ms, duration_ms);
        self.state.borrow_mut().calls.push(DriverCall::Configure(delay_ms, duration_ms));
    }

    fn set_target(&mut self, property: Property, value: f32) {
        self.pending.properties.push((property, value));
        self.state.borrow_mut().calls.push(DriverCall::SetTarget(property, value));
    }

    fn commit(&mut self) -> Result<(), DriverError> {
        let mut state = self.state.borrow_mut();
        if state.fail_commits {
            return Err(DriverError::CommitFailed("commit refused".into()));
        }
        state.calls.push(DriverCall::Commit);
        state.batches.push(self.pending.clone());
        Ok(())
    }

    fn cancel(&mut self) {
        self.state.borrow_mut().calls.push(DriverCall::Cancel);
    }
}
