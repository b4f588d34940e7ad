use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use drumpattern_core::{PatternFormat, check_pattern, render_pattern};

/// Rewrites `tests/golden/<format>/expected_*` for every known format revision.
/// Run from the repository root.
fn main() -> ExitCode {
    let root = PathBuf::from("tests").join("golden");
    for format in PatternFormat::ALL {
        let dir = root.join(format.name);
        let input = dir.join("input.b64");
        if !input.exists() {
            eprintln!("skip {}: no {}", format.name, input.display());
            continue;
        }
        match regenerate_format(&format, &input, &dir) {
            Ok(instruments) => eprintln!(
                "{}: {} instruments, {} bytes -> {}",
                format.name,
                instruments,
                format.total_bytes(),
                dir.display()
            ),
            Err(err) => {
                eprintln!("error: {}: {}", format.name, err);
                return ExitCode::from(1);
            }
        }
    }
    ExitCode::SUCCESS
}

fn regenerate_format(format: &PatternFormat, input: &Path, dir: &Path) -> Result<usize, String> {
    let text = fs::read_to_string(input)
        .map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let pattern = check_pattern(text.trim(), format).map_err(|err| err.to_string())?;

    write_expected(&dir.join("expected_grid.txt"), render_pattern(&pattern, format))?;
    let json = serde_json::to_string(&pattern)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    write_expected(&dir.join("expected_pattern.json"), json)?;

    Ok(pattern.instruments.len())
}

fn write_expected(path: &Path, contents: String) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
