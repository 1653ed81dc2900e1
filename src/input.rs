//! Input handling: window events in, frame controls out.
//!
//! The window layer translates raw winit events into [`InputEvent`]s and
//! queues them in an [`Input`]. Once per displayed frame the frame loop
//! drains the queue and folds it into [`Controls`]:
//!
//! - window close or Escape ends the run
//! - Enter toggles the frame-rate display
//! - everything else is ignored

use std::collections::VecDeque;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the simulation distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    Escape,
    Other,
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,
            _ => KeyCode::Other,
        }
    }
}

/// A discrete event delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CloseRequested,
    KeyDown(KeyCode),
}

/// What a frame's worth of input asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub quit: bool,
    /// Number of rate-display toggles; only its parity matters.
    pub toggles: u32,
}

impl Controls {
    /// Fold events into controls.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut controls = Self::default();
        for event in events {
            match event {
                InputEvent::CloseRequested | InputEvent::KeyDown(KeyCode::Escape) => {
                    controls.quit = true;
                }
                InputEvent::KeyDown(KeyCode::Enter) => controls.toggles += 1,
                InputEvent::KeyDown(_) => {}
            }
        }
        controls
    }

    /// Apply the toggles to a display flag.
    #[inline]
    pub fn apply_toggle(&self, flag: bool) -> bool {
        flag ^ (self.toggles % 2 == 1)
    }
}

/// Anything that can be polled for the events that arrived since last time.
pub trait EventSource {
    /// Every pending event, oldest first. Empty when nothing happened.
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Queue of pending input events.
#[derive(Debug, Default)]
pub struct Input {
    pending: VecDeque<InputEvent>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event.
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Translate a winit window event and queue the result, if any.
    ///
    /// Key auto-repeat is dropped so a held key acts once.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.push(InputEvent::CloseRequested),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.push(InputEvent::KeyDown(KeyCode::from(code)));
                }
            }
            _ => {}
        }
    }
}

impl EventSource for Input {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCode::from(WinitKeyCode::Enter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Other);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Other);
    }

    #[test]
    fn test_controls_quit() {
        assert!(Controls::from_events([InputEvent::CloseRequested]).quit);
        assert!(Controls::from_events([InputEvent::KeyDown(KeyCode::Escape)]).quit);
        assert!(!Controls::from_events([InputEvent::KeyDown(KeyCode::Other)]).quit);
        assert_eq!(Controls::from_events(Vec::new()), Controls::default());
    }

    #[test]
    fn test_controls_toggle_parity() {
        let once = Controls::from_events([InputEvent::KeyDown(KeyCode::Enter)]);
        assert!(once.apply_toggle(false));
        assert!(!once.apply_toggle(true));

        let twice = Controls::from_events([
            InputEvent::KeyDown(KeyCode::Enter),
            InputEvent::KeyDown(KeyCode::Other),
            InputEvent::KeyDown(KeyCode::Enter),
        ]);
        assert_eq!(twice.toggles, 2);
        assert!(!twice.apply_toggle(false));
    }

    #[test]
    fn test_input_drains_in_order() {
        let mut input = Input::new();
        input.push(InputEvent::KeyDown(KeyCode::Enter));
        input.push(InputEvent::CloseRequested);

        let drained: Vec<_> = input.drain().collect();
        assert_eq!(
            drained,
            vec![InputEvent::KeyDown(KeyCode::Enter), InputEvent::CloseRequested]
        );
        assert!(input.is_empty());
    }
}
