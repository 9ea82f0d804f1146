use crate::domain::models::{JsonOut, RiskEntry};
use serde::Serialize;
use std::io::Write;

pub fn write_out<T: Serialize, W: Write>(
    out: &mut W,
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        for d in data {
            writeln!(out, "{}", row(d))?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn write_assessment<W: Write>(
    out: &mut W,
    json: bool,
    entries: &[RiskEntry],
) -> anyhow::Result<()> {
    write_out(out, json, entries, |e| {
        format!("Vehicle: {}\nRisk Level: {}", e.vehicle, e.risk_level)
    })
}
