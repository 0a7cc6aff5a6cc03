//! Terminal drawing: the canvas panel and the statistics panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use sysinfo::{System, SystemExt};

use crate::controller::{LifecycleController, Mode};
use crate::render::Surface;

/// Splits the screen into the canvas panel and the statistics panel.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
        .split(area);
    (chunks[0], chunks[1])
}

/// The drawable interior of the canvas panel for a screen of size `area`.
pub fn canvas_area(area: Rect) -> Rect {
    let (canvas, _) = split(area);
    Block::default().borders(Borders::ALL).inner(canvas)
}

fn canvas_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Recording => "Recording [Click: Add cell | e: Play pattern | c: Clear | q: Quit]",
        _ => "Game of Life [g/o: Pattern | Space: Play/Pause | Enter: Step | r: Record | c: Clear | q: Quit]",
    }
}

/// Draws the surface held by the controller's renderer.
fn draw_canvas(f: &mut Frame, controller: &LifecycleController<Surface>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(canvas_title(controller.mode()));

    let paragraph = Paragraph::new(controller.renderer().to_text())
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => "Paused",
        Mode::Running => "Running",
        Mode::Recording => "Recording",
    }
}

/// Draws the statistics panel.
fn draw_stats(f: &mut Frame, controller: &LifecycleController<Surface>, sys: &System, area: Rect) {
    let stats = controller.stats();
    let (width, height) = controller.dimensions();
    let memory_used = sys.used_memory() / 1024; // KB
    let memory_total = sys.total_memory() / 1024;

    let mut stats_text = format!(
        "Statistics:\n\
        Grid: {}x{}\n\
        Generation: {}\n\
        Current Population: {}\n\
        Cells Born: {}\n\
        Cells Died: {}\n\
        Birth Rate: {:.2}/gen\n\
        Death Rate: {:.2}/gen\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n",
        width,
        height,
        stats.generation,
        stats.population,
        stats.cells_born,
        stats.cells_died,
        stats.birth_rate(),
        stats.death_rate(),
        memory_used,
        memory_total as f64 / 1024.0,
        mode_label(controller.mode()),
    );
    if controller.mode() == Mode::Recording {
        stats_text.push_str(&format!("Recorded Cells: {}\n", controller.recorded().len()));
    }

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(stats_widget, area);
}

/// Draws one full frame.
pub fn draw(f: &mut Frame, controller: &LifecycleController<Surface>, sys: &System) {
    let (canvas, stats) = split(f.size());
    draw_canvas(f, controller, canvas);
    draw_stats(f, controller, sys, stats);
}
