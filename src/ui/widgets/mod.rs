// SPDX-License-Identifier: MPL-2.0
pub mod wheel_gate;

pub use wheel_gate::{wheel_gate, WheelGate};
