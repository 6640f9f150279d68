//! Glue between the navigator and a scoreboard implementation.

use crate::core::navigator::Navigator;
use crate::domain::model::{Heat, LANES_PER_HEAT};
use crate::domain::ports::Scoreboard;

/// Pushes the navigator's current heat onto a scoreboard: clear, event
/// header, heat number, then every occupied lane. Empty lanes are skipped so
/// the board shows whatever `clear` left behind. Called after every
/// navigation step.
pub fn present<B: Scoreboard>(nav: &Navigator<'_>, board: &mut B) {
    board.clear();
    let event = nav.current_event();
    board.set_event(&event.event, &event.event_desc);
    if let Some(heat) = nav.current_heat() {
        board.set_heat(heat.heat);
        for (i, lane) in heat.lanes.iter().enumerate() {
            if !lane.is_empty() {
                board.set_lane(i + 1, &lane.name, &lane.team);
            }
        }
    }
}

/// One-line, pipe-delimited rendering of a heat: the event header cell, then
/// one cell per lane. Occupied lanes render as `NAME (TEAM)`, empty lanes as
/// a single space.
pub fn heat_summary(heat: &Heat) -> String {
    let mut text = format!(
        "|Event: {} Heat: {} {}|",
        heat.event, heat.heat, heat.event_desc
    );
    for lane in &heat.lanes {
        if lane.is_empty() {
            text.push_str(" |");
        } else {
            text.push_str(&format!("{} ({})|", lane.name, lane.team));
        }
    }
    text
}

/// Plain-text scoreboard for terminal output.
#[derive(Debug)]
pub struct ConsoleBoard {
    event: String,
    event_desc: String,
    heat: u32,
    lanes: Vec<(String, String)>,
}

impl Default for ConsoleBoard {
    fn default() -> Self {
        Self {
            event: String::new(),
            event_desc: String::new(),
            heat: 0,
            lanes: vec![Default::default(); LANES_PER_HEAT],
        }
    }
}

impl ConsoleBoard {
    pub fn render(&self) -> String {
        let mut out = format!(
            "E: {} / H: {}  {}\n",
            self.event, self.heat, self.event_desc
        );
        out.push_str("Lane  Name                  Team\n");
        for (i, (name, team)) in self.lanes.iter().enumerate() {
            out.push_str(&format!("{:>4}  {:<20}  {}\n", i + 1, name, team));
        }
        out
    }
}

impl Scoreboard for ConsoleBoard {
    fn clear(&mut self) {
        self.event.clear();
        self.event_desc.clear();
        self.heat = 0;
        for (name, team) in &mut self.lanes {
            name.clear();
            team.clear();
        }
    }

    fn set_event(&mut self, event: &str, description: &str) {
        self.event = event.to_string();
        self.event_desc = description.to_string();
    }

    fn set_heat(&mut self, heat: u32) {
        self.heat = heat;
    }

    fn set_lane(&mut self, lane: usize, name: &str, team: &str) {
        if let Some((slot_name, slot_team)) = self.lanes.get_mut(lane.wrapping_sub(1)) {
            *slot_name = name.to_string();
            *slot_team = team.to_string();
        }
    }
}
