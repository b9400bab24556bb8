use std::collections::HashMap;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::cv::midi_to_normalised_cv;
use crate::graph::control::ControlValue;

/*
MIDI Control Source
===================

The transport (which device crate, which callback thread) stays outside the
library; the contract is just "someone delivers MidiEvents from their own
thread". This module maps those events onto ControlValue targets:

    note events   ->  gate (velocity scaled) + pitch CV
    controllers   ->  one registered ControlValue per controller number

All writes are atomic target stores, so the dispatcher can run on any thread
while the render thread keeps pulling the graph. The glide defaults encode
the intent per signal: the gate gets 1 ms (fast but click-free), pitch CV
gets 0 (a new note is a discrete step, not a slide), knobs get 10 ms.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    PitchBend { channel: u8, value: i16 },
    ProgramChange { channel: u8, program: u8 },
}

/// Maps incoming MIDI onto control-value targets.
///
/// The stored `ControlValue`s are masters; [`MidiControls::cv`] and friends
/// hand out clones that share the target atomic but smooth independently,
/// so the same source can be wired into several places in a graph.
pub struct MidiControls {
    gate: ControlValue,
    cv: ControlValue,
    controls: HashMap<u8, ControlValue>,
    last_note: Option<u8>,
}

impl MidiControls {
    pub fn new() -> Self {
        Self {
            gate: ControlValue::new(0.0).with_glide_ms(1.0),
            cv: ControlValue::new(0.0).with_glide_ms(0.0),
            controls: HashMap::new(),
            last_note: None,
        }
    }

    /// The note gate: velocity / 127 while held, 0 when released.
    pub fn gate(&self) -> ControlValue {
        self.gate.clone()
    }

    /// The pitch CV of the most recent note.
    pub fn cv(&self) -> ControlValue {
        self.cv.clone()
    }

    /// Register a continuous controller and get its control value.
    pub fn control(&mut self, controller: u8) -> ControlValue {
        self.controls
            .entry(controller)
            .or_insert_with(|| ControlValue::new(0.0).with_glide_ms(10.0))
            .clone()
    }

    /// Dispatch one event. Called from the control thread.
    pub fn apply(&mut self, event: MidiEvent) {
        match event {
            MidiEvent::NoteOn { key, velocity, .. } => {
                // A velocity-0 note-on is a release; ignore it if it is for
                // a note that is no longer the sounding one.
                if velocity == 0 && self.last_note != Some(key) {
                    return;
                }
                if velocity != 0 {
                    self.gate.set_target(velocity as f32 / 127.0);
                } else {
                    self.gate.set_target(0.0);
                }
                self.cv.set_target(midi_to_normalised_cv(key));
                self.last_note = Some(key);
            }
            MidiEvent::NoteOff { key, .. } => {
                if self.last_note == Some(key) {
                    self.gate.set_target(0.0);
                }
            }
            MidiEvent::ControlChange {
                controller, value, ..
            } => {
                if let Some(control) = self.controls.get(&controller) {
                    control.set_target(midi_to_normalised_cv(value));
                }
            }
            MidiEvent::PitchBend { .. } | MidiEvent::ProgramChange { .. } => {}
        }
    }
}

impl Default for MidiControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can hand over queued control events.
pub trait EventReceiver {
    fn pop(&mut self) -> Option<MidiEvent>;
}

#[cfg(feature = "rtrb")]
impl EventReceiver for Consumer<MidiEvent> {
    fn pop(&mut self) -> Option<MidiEvent> {
        Consumer::pop(self).ok()
    }
}

/// Drain every queued event into the dispatcher.
pub fn pump_events(rx: &mut impl EventReceiver, controls: &mut MidiControls) {
    while let Some(event) = rx.pop() {
        controls.apply(event);
    }
}
