//! Streaming encoder for singly nested `{"next":...}` documents.
//!
//! A document of depth `d` is `{` followed by `d - 1` copies of `"next":{`,
//! the terminal `"next":null`, and `d` closing braces. Repeated fragments are
//! emitted in fixed-size chunks so memory use does not grow with depth.

use std::io::{self, Write};

const OPEN: &[u8] = b"{";
const LINK: &[u8] = br#""next":{"#;
const TERMINAL: &[u8] = br#""next":null"#;
const CLOSE: &[u8] = b"}";

/// Fragments per `write_all` call when emitting repeated runs.
const CHUNK_REPEATS: usize = 8 * 1024;

/// Exact size in bytes of the document for `depth`.
pub fn encoded_len(depth: u64) -> u64 {
    if depth == 0 {
        return 0;
    }
    let open = OPEN.len() as u64;
    let link = LINK.len() as u64;
    let terminal = TERMINAL.len() as u64;
    let close = CLOSE.len() as u64;
    open + link * (depth - 1) + terminal + close * depth
}

/// Write the nested document for `depth` to `out`. Depth must be at least 1.
pub fn write_document<W: Write>(out: &mut W, depth: u64) -> io::Result<()> {
    if depth == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "nesting depth must be at least 1",
        ));
    }

    out.write_all(OPEN)?;
    write_repeated(out, LINK, depth - 1)?;
    out.write_all(TERMINAL)?;
    write_repeated(out, CLOSE, depth)
}

/// Write `fragment` `count` times.
pub(crate) fn write_repeated<W: Write>(out: &mut W, fragment: &[u8], count: u64) -> io::Result<()> {
    if count == 0 {
        return Ok(());
    }

    let per_chunk = count.min(CHUNK_REPEATS as u64) as usize;
    let chunk = fragment.repeat(per_chunk);
    let mut remaining = count;
    while remaining > 0 {
        let take = remaining.min(per_chunk as u64) as usize;
        out.write_all(&chunk[..take * fragment.len()])?;
        remaining -= take as u64;
    }
    Ok(())
}
