//! Maps terminal events onto lifecycle transitions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::controller::{LifecycleController, Mode};
use crate::patterns;
use crate::render::Renderer;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Restart from a named built-in seed; an empty name does nothing
    SelectPattern(String),
    /// Record the grid cell under the pointer
    ClickCell(usize, usize),
    Clear,
    Record,
    EndRecord,
    /// Pause when running, resume when paused
    TogglePause,
    Step,
    Quit,
}

/// Where the canvas sits on screen and how many columns/rows each grid cell spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub left: u16,
    pub top: u16,
    pub pitch: usize,
}

impl CanvasGeometry {
    /// Grid cell under the screen position `(column, row)`, or `None`
    /// left of or above the canvas.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let dx = column.checked_sub(self.left)? as usize;
        let dy = row.checked_sub(self.top)? as usize;
        let pitch = self.pitch.max(1);
        Some((dx / pitch, dy / pitch))
    }
}

/// Translates a terminal event into a command, if it is bound to one.
pub fn translate(event: &Event, canvas: CanvasGeometry) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => canvas
            .cell_at(*column, *row)
            .map(|(x, y)| Command::ClickCell(x, y)),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('g') => Command::SelectPattern("glider".into()),
        KeyCode::Char('o') => Command::SelectPattern("oscillator".into()),
        KeyCode::Char('c') => Command::Clear,
        KeyCode::Char('r') => Command::Record,
        KeyCode::Char('e') => Command::EndRecord,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Enter => Command::Step,
        _ => return None,
    };
    Some(command)
}

/// Whether the event loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies `command` to the controller.
pub fn dispatch<R: Renderer>(controller: &mut LifecycleController<R>, command: Command) -> Flow {
    debug!(?command, "dispatch");
    match command {
        Command::SelectPattern(name) => {
            if !name.is_empty() {
                controller.stop();
                controller.start(patterns::lookup(&name));
            }
        }
        Command::ClickCell(x, y) => controller.record_click(x, y),
        Command::Clear => controller.clear(),
        Command::Record => controller.start_recording(),
        Command::EndRecord => controller.end_recording(),
        Command::TogglePause => match controller.mode() {
            Mode::Running => controller.stop(),
            Mode::Idle => controller.resume(),
            Mode::Recording => {}
        },
        Command::Step => controller.step(),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::tests::controller;
    use crossterm::event::KeyEventState;

    const CANVAS: CanvasGeometry = CanvasGeometry {
        left: 1,
        top: 1,
        pitch: 2,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(translate(&key(KeyCode::Char('q')), CANVAS), Some(Command::Quit));
        assert_eq!(
            translate(&key(KeyCode::Char('g')), CANVAS),
            Some(Command::SelectPattern("glider".into()))
        );
        assert_eq!(translate(&key(KeyCode::Char('r')), CANVAS), Some(Command::Record));
        assert_eq!(translate(&key(KeyCode::Enter), CANVAS), Some(Command::Step));
        assert_eq!(translate(&key(KeyCode::Char('z')), CANVAS), None);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c, CANVAS), Some(Command::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release, CANVAS), None);
    }

    #[test]
    fn test_click_maps_through_pitch() {
        assert_eq!(translate(&click(1, 1), CANVAS), Some(Command::ClickCell(0, 0)));
        assert_eq!(translate(&click(6, 4), CANVAS), Some(Command::ClickCell(2, 1)));
        assert_eq!(translate(&click(0, 5), CANVAS), None);
        assert_eq!(translate(&click(5, 0), CANVAS), None);
    }

    #[test]
    fn test_empty_pattern_name_is_noop() {
        let mut c = controller();
        assert_eq!(dispatch(&mut c, Command::SelectPattern(String::new())), Flow::Continue);
        assert_eq!(c.mode(), Mode::Idle);
        assert!(c.grid().is_none());
    }

    #[test]
    fn test_unknown_pattern_starts_empty() {
        let mut c = controller();
        dispatch(&mut c, Command::SelectPattern("nope".into()));
        assert_eq!(c.mode(), Mode::Running);
        assert_eq!(c.grid().map(|g| g.population()), Some(0));
    }

    #[test]
    fn test_toggle_pause() {
        let mut c = controller();
        dispatch(&mut c, Command::SelectPattern("glider".into()));
        dispatch(&mut c, Command::TogglePause);
        assert_eq!(c.mode(), Mode::Idle);
        dispatch(&mut c, Command::TogglePause);
        assert_eq!(c.mode(), Mode::Running);
    }

    #[test]
    fn test_recording_via_commands() {
        let mut c = controller();
        dispatch(&mut c, Command::Record);
        dispatch(&mut c, Command::ClickCell(2, 3));
        dispatch(&mut c, Command::ClickCell(4, 5));
        dispatch(&mut c, Command::EndRecord);

        let mut live: Vec<_> = c
            .grid()
            .unwrap()
            .live_cells()
            .map(|cell| (cell.x, cell.y))
            .collect();
        live.sort();
        assert_eq!(live, vec![(2, 3), (4, 5)]);
        assert_eq!(dispatch(&mut c, Command::Quit), Flow::Quit);
    }
}
