use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::SignalResult;
use crate::phy::Level;

/// Pretty-printed JSON of any serializable report
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> SignalResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// One level per line
pub fn write_levels_to_txt(levels: &[Level], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = BufWriter::new(File::create(path)?);
    for level in levels {
        writeln!(file, "{}", level)?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::{BitSequence, ScrambleKind, Scheme, SignalEncoder};

    #[test]
    fn test_write_levels_and_json() {
        let dir = std::env::temp_dir().join(format!("signalgen-dump-{}", std::process::id()));
        let bits: BitSequence = "1001".parse().unwrap();
        let result = SignalEncoder::new(Scheme::Ami, ScrambleKind::None)
            .unwrap()
            .encode(&bits);

        let txt = dir.join("levels.txt");
        write_levels_to_txt(&result.levels, &txt).unwrap();
        assert_eq!(std::fs::read_to_string(&txt).unwrap(), "1\n0\n0\n-1\n");

        let json = dir.join("result.json");
        write_json(&result, &json).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(value["title"], "AMI Encoding");
        assert_eq!(value["levels"], serde_json::json!([1, 0, 0, -1]));
        assert_eq!(value["double_length"], false);

        std::fs::remove_dir_all(&dir).ok();
    }
}
