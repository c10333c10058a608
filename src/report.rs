//! Text rendering of a simulation result.

use std::fmt::Write;

use crate::{core::Ticks, sim::SimulationResult};

pub fn render_order(result: &SimulationResult) -> String {
    result.execution_order.join(" -> ")
}

fn tick_or_dash(tick: Option<Ticks>) -> String {
    tick.map_or_else(|| "-".to_string(), |t| t.to_string())
}

pub fn render_summary(result: &SimulationResult, quantum: Ticks) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Round Robin simulation (quantum={quantum})\n");
    let _ = writeln!(out, "Execution order:");
    let _ = writeln!(out, "{}", render_order(result));

    let _ = writeln!(out, "\nPer-process times:");
    for p in &result.processes {
        let response = result
            .response_time(&p.name)
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        let _ = writeln!(
            out,
            "{}: arrival={}, start={}, finish={}, response={}",
            p.name,
            p.arrival,
            tick_or_dash(p.start),
            tick_or_dash(p.finish),
            response
        );
    }

    let _ = writeln!(
        out,
        "\nAverage response time: {:.2}",
        result.average_response_time
    );
    let _ = writeln!(
        out,
        "Average turnaround time: {:.2}",
        result.average_turnaround_time
    );
    out
}

/// Two rows: tick indices over the process that ran at each tick.
pub fn render_gantt(timeline: &[String]) -> String {
    if timeline.is_empty() {
        return "Gantt: (empty)\n".to_string();
    }

    let mut ticks = Vec::with_capacity(timeline.len());
    let mut procs = Vec::with_capacity(timeline.len());
    for (i, name) in timeline.iter().enumerate() {
        let index = i.to_string();
        let width = index.len().max(name.len());
        ticks.push(format!("{index:<width$}"));
        procs.push(format!("{name:<width$}"));
    }

    format!(
        "Gantt chart (one column per tick):\n{}\n{}\n",
        ticks.join(" ").trim_end(),
        procs.join(" ").trim_end()
    )
}
