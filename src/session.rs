//! Session state management.
//!
//! Holds the selection controller and the random source between commands
//! and writes the response for each command.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::dataset::Dataset;
use crate::division::Division;
use crate::selection::{suggest, SelectionController, SelectionError};
use crate::view::{map_marker, DivisionView};

/// Holds the mutable state of a session between commands.
pub struct Session<'a> {
    controller: SelectionController<'a>,
    rng: SmallRng,
}

impl<'a> Session<'a> {
    /// Creates a session over `dataset`. A seed of 0 draws from entropy;
    /// any other value makes `random` reproducible.
    pub fn new(dataset: &'a Dataset, seed: u64) -> Self {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        Session {
            controller: SelectionController::new(dataset),
            rng,
        }
    }

    pub fn controller(&self) -> &SelectionController<'a> {
        &self.controller
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Writes one `division <json>` line per entry of the current order.
    pub fn handle_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for division in self.controller.current_order() {
            let view = DivisionView::from_division(division);
            let json = serde_json::to_string(&view).map_err(io::Error::other)?;
            writeln!(out, "division {}", json)?;
        }
        writeln!(out, "listok")?;
        out.flush()
    }

    /// Handles `select <text>`. A miss is reported, not raised.
    pub fn handle_select<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        match self.controller.select_by_input(text) {
            Ok(division) => write_selected(division, out)?,
            Err(SelectionError::NotFound(t)) => writeln!(out, "notfound {}", t)?,
            Err(SelectionError::Ambiguous(t)) => writeln!(out, "ambiguous {}", t)?,
        }
        out.flush()
    }

    /// Handles the `clear` command.
    pub fn handle_clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.controller.clear();
        writeln!(out, "cleared")?;
        out.flush()
    }

    /// Handles the `random` command.
    pub fn handle_random<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let division = self.controller.pick_random(&mut self.rng);
        write_selected(division, out)?;
        out.flush()
    }

    /// Handles `suggest <text>`: one `suggestion <name>` line per candidate.
    pub fn handle_suggest<W: Write>(&self, text: &str, out: &mut W) -> io::Result<()> {
        for division in suggest(self.controller.dataset(), text) {
            writeln!(out, "suggestion {}", division.name)?;
        }
        writeln!(out, "suggestok")?;
        out.flush()
    }

    /// Handles the `map` command.
    pub fn handle_map<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match map_marker(&self.controller) {
            Some(c) => writeln!(out, "marker {} {}", c.lat, c.lon)?,
            None => writeln!(out, "marker none")?,
        }
        out.flush()
    }

    /// Handles the `status` command.
    pub fn handle_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.controller.applied_division() {
            Some(d) => writeln!(out, "applied {}", d.name)?,
            None => writeln!(out, "applied none")?,
        }
        out.flush()
    }

    /// Handles the `summary` command.
    pub fn handle_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_summary(self.controller.dataset(), out)?;
        out.flush()
    }
}

/// Writes `count <n>` followed by one `type <label> <n>` line per kind.
pub fn write_summary<W: Write>(dataset: &Dataset, out: &mut W) -> io::Result<()> {
    writeln!(out, "count {}", dataset.len())?;
    for (kind, n) in dataset.summary() {
        writeln!(out, "type {} {}", kind.label(), n)?;
    }
    Ok(())
}

fn write_selected<W: Write>(division: &Division, out: &mut W) -> io::Result<()> {
    writeln!(out, "selected {}", division.name)
}
