//! Build script to generate the embedded player roster
//!
//! Reads the roster CSV with the same reader settings as `roster::loader` and
//! generates Rust source code with a const array of raw rows.
//! Validation happens at load time in `roster::Roster`, not here.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const ROSTER_CSV: &str = "data/players.csv";
const COLUMNS: usize = 9;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_roster(ROSTER_CSV, &Path::new(&out_dir).join("players.rs"));

    // Rebuild if the roster changes
    println!("cargo:rerun-if-changed={ROSTER_CSV}");
}

fn generate_roster(input_path: &str, output_path: &Path) {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(input_path)
        .unwrap_or_else(|e| panic!("Failed to open {input_path}: {e}"));

    let header_len = reader
        .headers()
        .unwrap_or_else(|e| panic!("Failed to read {input_path} header: {e}"))
        .len();
    assert!(
        header_len == COLUMNS,
        "{input_path}: expected {COLUMNS} columns, got {header_len}"
    );

    // Blank lines are skipped by the reader; column counts are checked against the header
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            record.unwrap_or_else(|e| panic!("{input_path} row {}: {e}", i + 2))
        })
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated player roster").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// Source: {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Raw roster rows compiled from `{input_path}`").unwrap();
    writeln!(output, "pub const PLAYERS: &[RawPlayer] = &[").unwrap();

    for fields in &rows {
        writeln!(output, "    RawPlayer {{").unwrap();
        writeln!(output, "        name: {:?},", &fields[0]).unwrap();
        writeln!(output, "        nation: {:?},", &fields[1]).unwrap();
        writeln!(output, "        role: {:?},", &fields[2]).unwrap();
        writeln!(output, "        batting_hand: {:?},", &fields[3]).unwrap();
        writeln!(output, "        current_team: {:?},", &fields[4]).unwrap();
        writeln!(output, "        retired: {:?},", &fields[5]).unwrap();
        writeln!(output, "        born: {:?},", &fields[6]).unwrap();
        writeln!(output, "        total_matches: {:?},", &fields[7]).unwrap();
        writeln!(output, "        image: {:?},", &fields[8]).unwrap();
        writeln!(output, "    }},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in PLAYERS").unwrap();
    writeln!(output, "pub const PLAYERS_COUNT: usize = {};", rows.len()).unwrap();
}
