//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

/// Write family names as a prettified JSON array.
pub fn write_json_pretty(names: &[String], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(names)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write family names as newline-delimited JSON (NDJSON).
pub fn write_ndjson(names: &[String], mut w: impl Write) -> Result<()> {
    for name in names {
        let line = serde_json::to_string(name)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
