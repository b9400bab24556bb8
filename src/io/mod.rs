// External interfaces: control-event transports and their mapping onto
// ControlValue targets.

pub mod midi;
