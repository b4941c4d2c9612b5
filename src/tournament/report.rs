//! Line-oriented stats report consumed by the plotting collaborator.
//!
//! Three header lines (match-up count, games per match-up, games per
//! strategy), a blank separator, then one `<name> <wins> <games>` row per
//! strategy, most wins first.

use super::Standings;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the report to any writer.
pub fn write_report<W: Write>(standings: &Standings, w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", standings.matchups)?;
    writeln!(w, "{}", standings.games_per_matchup)?;
    writeln!(w, "{}", standings.games_per_player())?;
    writeln!(w)?;
    for (name, wins, games) in standings.sorted() {
        writeln!(w, "{name} {wins} {games}")?;
    }
    Ok(())
}

/// Write the report to a file.
pub fn write_report_to_path(standings: &Standings, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(standings, &mut writer)
        .with_context(|| format!("writing report {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
