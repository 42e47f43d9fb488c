//! Text rendering of simulation reports.

use std::fmt;

use super::dispatcher::SimulationReport;

const HEADERS: [&str; 6] = ["ID", "Burst", "Arrival", "Completion", "Turnaround", "Waiting"];

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantum {
            Some(q) => writeln!(f, "--- {} (quantum {q}) ---", self.policy)?,
            None => writeln!(f, "--- {} ---", self.policy)?,
        }

        let rows: Vec<[String; 6]> = self
            .processes
            .iter()
            .map(|p| {
                [
                    p.id.to_string(),
                    p.burst.to_string(),
                    p.arrival.to_string(),
                    p.completion.to_string(),
                    p.turnaround.to_string(),
                    p.waiting.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        write_row(f, &HEADERS, &widths)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }

        writeln!(
            f,
            "Average turnaround: {:.2}, average waiting: {:.2}",
            self.kpi.avg_turnaround, self.kpi.avg_waiting
        )
    }
}

fn write_row<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize],
) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:>w$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{line}")
}
