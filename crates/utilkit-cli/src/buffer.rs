//! # Buffer Subcommand
//!
//! Encodes a `(sequence, number, text)` record into a [`DataBuffer`], dumps
//! the encoded bytes, then decodes the record from those bytes.

use std::fmt;

use clap::Args;
use serde::Serialize;
use utilkit::DataBuffer;

/// Arguments for the buffer subcommand.
#[derive(Args, Debug, Clone)]
pub struct BufferArgs {
    /// Text field of the record.
    #[arg(long)]
    pub text: String,

    /// Numeric field of the record.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub number: f64,

    /// Sequence number written ahead of the payload.
    #[arg(long, default_value_t = 1)]
    pub sequence: u32,

    /// Drop this many bytes from the end before decoding.
    #[arg(long, default_value_t = 0)]
    pub truncate: usize,
}

/// A decoded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub sequence: u32,
    pub number: f64,
    pub text: String,
}

/// Outcome of a buffer run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BufferReport {
    /// Number of encoded bytes fed to the decoder.
    pub encoded_len: usize,
    /// Encoded bytes as lowercase hex.
    pub hex: String,
    /// The record read back, when decoding succeeded.
    pub decoded: Option<Record>,
    /// Decoder failure, when decoding failed.
    pub error: Option<String>,
}

/// Run the buffer demonstration.
///
/// A decoding failure is part of the report rather than an error, so a
/// truncated run still shows what was encoded.
pub fn run(args: &BufferArgs) -> anyhow::Result<BufferReport> {
    let mut buf = DataBuffer::new();
    buf.write(args.sequence)
        .write(args.number)
        .write_text(&args.text);

    let mut bytes = buf.to_vec();
    bytes.truncate(bytes.len().saturating_sub(args.truncate));
    let hex = to_hex(&bytes);
    let encoded_len = bytes.len();

    let mut input = DataBuffer::from(bytes);
    let (decoded, error) = match decode(&mut input) {
        Ok(record) => (Some(record), None),
        Err(err) => {
            tracing::warn!(error = %err, "record decoding failed");
            (None, Some(err.to_string()))
        }
    };

    Ok(BufferReport {
        encoded_len,
        hex,
        decoded,
        error,
    })
}

fn decode(buf: &mut DataBuffer) -> Result<Record, utilkit::BufferError> {
    let sequence = buf.read()?;
    let number = buf.read()?;
    let text = buf.read_text()?;
    Ok(Record {
        sequence,
        number,
        text,
    })
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for BufferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "encoded ({} bytes): {}", self.encoded_len, self.hex)?;
        match (&self.decoded, &self.error) {
            (Some(record), _) => write!(
                f,
                "decoded: sequence={} number={} text={:?}",
                record.sequence, record.number, record.text
            ),
            (None, Some(err)) => write!(f, "decode failed: {err}"),
            (None, None) => write!(f, "decode produced nothing"),
        }
    }
}
