//! Side-by-side statistics for several search strategies on one map.

use serde::Serialize;
use skyroute_core::{TerrainMap, TerrainView};
use skyroute_paths::{SearchReport, Strategy};
use std::io::{self, Write};

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub strategy: Strategy,
    pub report: SearchReport,
    /// Total flight cost of the path, if one was found.
    pub cost: Option<f64>,
}

impl Outcome {
    pub fn run(strategy: Strategy, terrain: &TerrainMap) -> Self {
        let report = strategy.run(terrain);
        let cost = report.path_cost(terrain);
        Self {
            strategy,
            report,
            cost,
        }
    }

    /// Write the result block for this strategy, including the map overlay.
    pub fn write_result(
        &self,
        w: &mut impl Write,
        terrain: &TerrainMap,
        show_visited: bool,
    ) -> io::Result<()> {
        let name = self.strategy.name();
        let Some(path) = self.report.path.as_deref() else {
            writeln!(w, "{name} found no path.")?;
            writeln!(w, "Nodes visited: {}", self.report.visited)?;
            return Ok(());
        };
        writeln!(w, "{name} found a path of {} cells.", path.len())?;
        writeln!(w, "Nodes visited: {}", self.report.visited)?;
        writeln!(w, "Execution time: {:.2} ms", self.report.elapsed_ms())?;
        writeln!(w)?;
        writeln!(w, "Map with {name} path:")?;
        let mut view = TerrainView::new(terrain).with_path(path);
        if show_visited {
            view = view.with_visited(&self.report.closed);
        }
        write!(w, "{view}")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub outcomes: Vec<Outcome>,
}

impl Comparison {
    /// Run every strategy in `strategies` on `terrain`, in order.
    pub fn run(terrain: &TerrainMap, strategies: &[Strategy]) -> Self {
        let outcomes = strategies
            .iter()
            .map(|&s| {
                log::info!("Searching with {s}");
                Outcome::run(s, terrain)
            })
            .collect();
        Self { outcomes }
    }

    /// Whether there is something to compare: two or more strategies, all of
    /// which found a path.
    pub fn comparable(&self) -> bool {
        self.outcomes.len() >= 2 && self.outcomes.iter().all(|o| o.report.found())
    }

    /// Write the comparison table. Writes nothing unless
    /// [`comparable`](Self::comparable) holds.
    pub fn write_summary(&self, w: &mut impl Write) -> io::Result<()> {
        if !self.comparable() {
            return Ok(());
        }
        let names: Vec<&str> = self.outcomes.iter().map(|o| o.strategy.name()).collect();
        writeln!(w, "Comparison {}:", names.join(" vs "))?;
        for o in &self.outcomes {
            writeln!(
                w,
                "{:<20} length {:>4} cells, cost {:>8.1}, visited {:>5}, time {:>8.2} ms",
                o.strategy.name(),
                o.report.path_len(),
                o.cost.unwrap_or(f64::NAN),
                o.report.visited,
                o.report.elapsed_ms(),
            )?;
        }
        Ok(())
    }
}
