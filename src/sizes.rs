//! Flat array fixtures measured in megabytes, for throughput rather than depth.

use std::io::{self, Write};

use crate::document::write_repeated;

/// Megabyte tiers generated by `sizes`, in output order.
pub const SIZE_TABLE: [u64; 3] = [1, 5, 10];

const RECORD: &str = "\t{
        \"key1\": \"value\",
        \"array\": [],
        \"obj\": {},
        \"atomArray\": [11201,1e112,true,false,null,\"str\"]
    }";
const SEPARATOR: &str = ",\n";
const HEAD: &str = "[\n";
const TAIL: &str = "\n]";

pub fn file_name(megabytes: u64) -> String {
    format!("{megabytes}MB.json")
}

/// Number of records that fit in `megabytes` (decimal megabytes, rounded down).
pub fn record_count(megabytes: u64) -> u64 {
    megabytes * 1_000_000 / RECORD.len() as u64
}

/// Exact size in bytes of a document holding `records` records.
pub fn encoded_len(records: u64) -> u64 {
    let record = RECORD.len() as u64;
    let separators = records.saturating_sub(1) * SEPARATOR.len() as u64;
    (HEAD.len() + TAIL.len()) as u64 + record * records + separators
}

/// Write `[` + `records` copies of the record joined by `,\n` + `]`.
pub fn write_document<W: Write>(out: &mut W, records: u64) -> io::Result<()> {
    out.write_all(HEAD.as_bytes())?;
    if records > 0 {
        let joined = format!("{RECORD}{SEPARATOR}");
        write_repeated(out, joined.as_bytes(), records - 1)?;
        out.write_all(RECORD.as_bytes())?;
    }
    out.write_all(TAIL.as_bytes())
}
