//! Record serializers.
//!
//! # Output
//! ```text
//! json: {"time":"2024-03-09 07:05:01.000","level":"INFO","source":{...},"msg":"hello","n":1}
//! text: time="2024-03-09 07:05:01.000" level=INFO source=net/tunnel.rs:42 msg=hello topic=tunnel
//! ```
//!
//! # Design Decisions
//! - Objects are written field by field so duplicate keys survive
//! - Text quoting reuses JSON string escaping
//! - Encoders only fill a buffer; the handler owns the trailing newline and the write

use std::io;

use serde_json::Value;

use crate::logging::record::{Record, Shaping};

/// Serializes one record into a byte buffer, without a trailing newline.
pub trait Encoder: Send + Sync + std::fmt::Debug {
    fn encode(&self, record: &Record<'_>, shaping: &Shaping, buf: &mut Vec<u8>) -> io::Result<()>;
}

/// One JSON object per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, record: &Record<'_>, shaping: &Shaping, buf: &mut Vec<u8>) -> io::Result<()> {
        buf.push(b'{');
        write_json_field(buf, "time", &shaping.time(&record.time))?;
        buf.push(b',');
        write_json_field(buf, "level", record.level.as_str())?;

        if let Some(source) = shaping.source(record.source.as_ref()) {
            buf.extend_from_slice(br#","source":{"#);
            if !source.function.is_empty() {
                write_json_field(buf, "function", source.function)?;
                buf.push(b',');
            }
            write_json_field(buf, "file", &source.file)?;
            buf.push(b',');
            write_json_field(buf, "line", &source.line)?;
            buf.push(b'}');
        }

        buf.push(b',');
        write_json_field(buf, "msg", record.message)?;

        for attr in record.attrs() {
            buf.push(b',');
            write_json_field(buf, &attr.key, &attr.value)?;
        }
        buf.push(b'}');
        Ok(())
    }
}

fn write_json_field<T: serde::Serialize + ?Sized>(
    buf: &mut Vec<u8>,
    key: &str,
    value: &T,
) -> io::Result<()> {
    serde_json::to_writer(&mut *buf, key)?;
    buf.push(b':');
    serde_json::to_writer(&mut *buf, value)?;
    Ok(())
}

/// Space-separated `key=value` tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    fn encode(&self, record: &Record<'_>, shaping: &Shaping, buf: &mut Vec<u8>) -> io::Result<()> {
        write_text_field(buf, "time", &shaping.time(&record.time))?;
        buf.push(b' ');
        write_text_field(buf, "level", record.level.as_str())?;

        if let Some(source) = shaping.source(record.source.as_ref()) {
            buf.push(b' ');
            let location = format!("{}:{}", source.file, source.line);
            write_text_field(buf, "source", &location)?;
        }

        buf.push(b' ');
        write_text_field(buf, "msg", record.message)?;

        for attr in record.attrs() {
            buf.push(b' ');
            match &attr.value {
                Value::String(s) => write_text_field(buf, &attr.key, s)?,
                other => write_text_field(buf, &attr.key, &other.to_string())?,
            }
        }
        Ok(())
    }
}

fn write_text_field(buf: &mut Vec<u8>, key: &str, value: &str) -> io::Result<()> {
    write_text_token(buf, key)?;
    buf.push(b'=');
    write_text_token(buf, value)
}

fn write_text_token(buf: &mut Vec<u8>, token: &str) -> io::Result<()> {
    if needs_quoting(token) {
        serde_json::to_writer(&mut *buf, token)?;
    } else {
        buf.extend_from_slice(token.as_bytes());
    }
    Ok(())
}

fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '=')
}
