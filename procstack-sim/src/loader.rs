//! プロセスファイルの読み込み

use crate::{Process, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// ファイルから全てのプロセスを読み込む
pub fn load_processes<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("Failed to read process file '{}': {}", path.display(), e)
    })?;

    let processes = parse_processes(&contents, delimiter)?;
    info!("Loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// テキストからプロセスを読み込む
///
/// 1行に1レコード。空行は読み飛ばします。
/// 不正な行が1つでもあれば読み込み全体を中止します。
pub fn parse_processes(contents: &str, delimiter: char) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let process = Process::parse_record(line, delimiter)
            .map_err(|e| anyhow::anyhow!("Line {}: {}", i + 1, e))?;
        debug!("Parsed process '{}' (id={}, call={})", process.name, process.id, process.call);
        processes.push(process);
    }

    if processes.is_empty() {
        return Err(anyhow::anyhow!("No processes to be loaded"));
    }

    Ok(processes)
}
