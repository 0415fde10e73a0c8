// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use bevy::prelude::{ButtonInput, KeyCode};

/// Keyboard stand-ins for what a depth camera would report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Grip,
    Release,
    Click,
    ToggleUser,
    ToggleSensor,
    SwapPrimaryHand,
}

impl KeyCommand {
    pub const ALL: [KeyCommand; 6] = [
        KeyCommand::Grip,
        KeyCommand::Release,
        KeyCommand::Click,
        KeyCommand::ToggleUser,
        KeyCommand::ToggleSensor,
        KeyCommand::SwapPrimaryHand,
    ];

    pub fn key(&self) -> KeyCode {
        match self {
            KeyCommand::Grip => KeyCode::KeyG,
            KeyCommand::Release => KeyCode::KeyR,
            KeyCommand::Click => KeyCode::KeyC,
            KeyCommand::ToggleUser => KeyCode::KeyU,
            KeyCommand::ToggleSensor => KeyCode::KeyK,
            KeyCommand::SwapPrimaryHand => KeyCode::KeyH,
        }
    }

    pub fn just_pressed(&self, keyboard_input: &ButtonInput<KeyCode>) -> bool {
        keyboard_input.just_pressed(self.key())
    }
}

/// Commands triggered this frame, in [`KeyCommand::ALL`] order.
pub fn just_pressed_commands(keyboard_input: &ButtonInput<KeyCode>) -> Vec<KeyCommand> {
    KeyCommand::ALL
        .into_iter()
        .filter(|command| command.just_pressed(keyboard_input))
        .collect()
}


// End of File
