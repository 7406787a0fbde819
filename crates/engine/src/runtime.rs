// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for the hush arbiter
//!
//! The runtime owns every handler, the coordinator and the host adapter.
//! Each call processes one host signal to completion: the handler transition
//! runs, its effects are executed in order, and any grant produced by the
//! queue is fed back into the granted handler before the call returns.
//!
//! A handler is forgotten once its teardown has run, so the runtime only
//! tracks live handlers. Signals for a forgotten handler are unknown-handler
//! errors.
//!
//! All methods take `&mut self`. A host that delivers signals from several
//! threads wraps the runtime in a single mutex, which keeps queue mutation and
//! reselection in one critical section.

use crate::coordinator::{Coordinator, DriverFactory};
use crate::error::RuntimeError;
use hush_adapters::{EffectDriver, HostAdapter};
use hush_core::{
    CommandResponse, Effect, Event, Handler, HandlerId, HandlerInput, HandlerState,
    HandoffQueue, HostSignal, HushConfig, IdGen, TracedEffect,
};
use std::collections::HashMap;

/// Runtime adapter dependencies
pub struct RuntimeDeps<D, H> {
    pub driver: DriverFactory<D>,
    pub host: H,
}

/// Runtime that arbitrates the shared effect
pub struct Runtime<D, H, I: IdGen> {
    coordinator: Coordinator<D>,
    host: H,
    id_gen: I,
    display_name: String,
    handlers: HashMap<HandlerId, Handler>,
    /// Creation order of live handlers, for deterministic shutdown
    order: Vec<HandlerId>,
}

impl<D, H, I> Runtime<D, H, I>
where
    D: EffectDriver,
    H: HostAdapter,
    I: IdGen,
{
    /// Create a new runtime
    pub fn new(deps: RuntimeDeps<D, H>, id_gen: I, config: &HushConfig) -> Self {
        Self {
            coordinator: Coordinator::new(deps.driver),
            host: deps.host,
            id_gen,
            display_name: config.display_name.clone(),
            handlers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a handler with a generated ID
    pub fn spawn(&mut self) -> Result<(HandlerId, Vec<Event>), RuntimeError> {
        let id = HandlerId::new(self.id_gen.next());
        let events = self.create(id.clone())?;
        Ok((id, events))
    }

    /// Create a handler with a caller-chosen ID
    pub fn create(&mut self, id: HandlerId) -> Result<Vec<Event>, RuntimeError> {
        if self.handlers.contains_key(&id) {
            return Err(RuntimeError::DuplicateHandler(id));
        }
        tracing::debug!(module = %self.display_name, handler = %id, "handler created");
        self.handlers.insert(id.clone(), Handler::new(id.clone()));
        self.order.push(id.clone());
        Ok(vec![Event::HandlerCreated { handler: id }])
    }

    /// Deliver a host signal to a handler
    ///
    /// Returns the events produced, including any grant to another handler.
    pub fn signal(
        &mut self,
        handler: &HandlerId,
        signal: HostSignal,
    ) -> Result<Vec<Event>, RuntimeError> {
        if !self.handlers.contains_key(handler) {
            return Err(RuntimeError::UnknownHandler(handler.clone()));
        }

        let span = tracing::debug_span!("signal", handler = %handler, signal = %signal);
        let _guard = span.enter();

        let mut events = Vec::new();
        self.apply(handler, signal.into(), &mut events);
        Ok(events)
    }

    /// Answer a remote command; never changes state
    pub fn command(
        &mut self,
        handler: &HandlerId,
        text: &str,
    ) -> Result<(CommandResponse, Vec<Event>), RuntimeError> {
        if !self.handlers.contains_key(handler) {
            return Err(RuntimeError::UnknownHandler(handler.clone()));
        }
        tracing::info!(
            module = %self.display_name,
            handler = %handler,
            command = text,
            "command rejected"
        );
        let response = CommandResponse::respond(text);
        let events = vec![Event::CommandRejected {
            handler: handler.clone(),
            command: text.to_string(),
        }];
        Ok((response, events))
    }

    /// Remote forced-solve request
    pub fn force_solve(&mut self, handler: &HandlerId) -> Result<Vec<Event>, RuntimeError> {
        self.signal(handler, HostSignal::ForcedTerminate)
    }

    /// Tear down every live handler in creation order
    pub fn shutdown(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        for id in self.order.clone() {
            self.apply(&id, HandlerInput::Teardown, &mut events);
        }
        events
    }

    /// Number of live handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// State of a live handler; `None` once it has been torn down
    pub fn state(&self, handler: &HandlerId) -> Option<HandlerState> {
        self.handlers.get(handler).map(|h| h.state)
    }

    pub fn holder(&self) -> Option<&HandlerId> {
        self.coordinator.holder()
    }

    pub fn queue(&self) -> &HandoffQueue {
        self.coordinator.queue()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn apply(&mut self, id: &HandlerId, input: HandlerInput, events: &mut Vec<Event>) {
        let Some(handler) = self.handlers.get(id) else {
            tracing::warn!(handler = %id, ?input, "input for unknown handler ignored");
            return;
        };

        let (next, effects) = handler.transition(input);
        if handler.state.is_holding() && !next.state.is_holding() {
            tracing::debug!(module = %self.display_name, handler = %id, "gave up the effect");
        }
        if next.state != handler.state {
            tracing::debug!(handler = %id, from = %handler.state, to = %next.state, "transition");
        } else if effects.is_empty() {
            tracing::debug!(handler = %id, state = %handler.state, ?input, "input ignored");
        }

        // Store before executing: a grant may re-enter this handler.
        let destroyed = next.state == HandlerState::Destroyed;
        self.handlers.insert(id.clone(), next);
        for effect in effects {
            self.execute(effect, events);
        }

        if destroyed {
            self.evict(id);
        }
    }

    fn evict(&mut self, id: &HandlerId) {
        self.handlers.remove(id);
        self.order.retain(|other| other != id);
        tracing::trace!(handler = %id, live = self.handlers.len(), "handler evicted");
    }

    fn execute(&mut self, effect: Effect, events: &mut Vec<Event>) {
        tracing::trace!(effect = effect.name(), fields = ?effect.fields(), "executing");

        match effect {
            Effect::Emit(event) => {
                self.log_event(&event);
                events.push(event);
            }

            Effect::JoinQueue { handler } => {
                let (granted, effects) = self.coordinator.register(handler.clone());
                for effect in effects {
                    self.execute(effect, events);
                }
                if !granted {
                    self.execute(Effect::Emit(Event::HandlerWaiting { handler }), events);
                }
            }

            Effect::LeaveQueue { handler } => {
                let effects = self.coordinator.remove(&handler);
                for effect in effects {
                    self.execute(effect, events);
                }
            }

            Effect::Begin { handler } => {
                self.apply(&handler, HandlerInput::BeginGranted, events);
            }

            Effect::Enable { handler } => match self.coordinator.driver_for(&handler) {
                Some(driver) => driver.enable(),
                None => tracing::warn!(handler = %handler, "enable without holding the effect"),
            },

            Effect::Disable { handler } => match self.coordinator.driver_for(&handler) {
                Some(driver) => driver.disable(),
                None => tracing::warn!(handler = %handler, "disable without holding the effect"),
            },

            Effect::Acknowledge { handler } => {
                self.host.handle_pass(&handler);
            }
        }
    }

    fn log_event(&self, event: &Event) {
        let module = self.display_name.as_str();
        let handler = event.handler();
        match event {
            Event::HandlerWaiting { .. } => {
                tracing::info!(module, handler = %handler, "waiting to begin")
            }
            Event::HolderGranted { .. } => {
                tracing::info!(module, handler = %handler, "now working")
            }
            Event::EffectEnabled { .. } => {
                tracing::info!(module, handler = %handler, "senses dulled")
            }
            Event::EffectDisabled { .. } => {
                tracing::info!(module, handler = %handler, "senses restored")
            }
            Event::CyclePassed { .. } => {
                tracing::info!(module, handler = %handler, "nothing happened")
            }
            other => tracing::debug!(module, handler = %handler, event = other.name()),
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
