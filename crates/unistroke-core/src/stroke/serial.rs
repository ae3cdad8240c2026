//! Gesture file serialization
//!
//! One stroke per file, in the XML layout of the public $1 gesture logs:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8" standalone="yes"?>
//! <Gesture Name="circle01" Subject="player" Speed="medium" Number="1" NumPts="2"
//!          Milliseconds="0" AppName="unistroke" AppVer="0.1.0"
//!          Date="Sunday, October 18, 2026" TimeOfDay="4:10:14 PM">
//!   <Point X="12.5" Y="40" T="0" />
//!   <Point X="13" Y="41.25" T="0" />
//! </Gesture>
//! ```
//!
//! `Name` carries the zero-padded `Number` as a suffix (it equals the file
//! stem); [`GestureRecord::name`] holds the bare gesture name. `T` is kept
//! for compatibility only and is written as `0`.
//!
//! The reader accepts any attribute order, ignores unknown attributes,
//! comments and the XML declaration, and is not a general XML parser.

use crate::error::{Error, Result};
use crate::point::Point;
use crate::stroke::Stroke;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// File extension used for gesture files.
pub const GESTURE_FILE_EXTENSION: &str = "xml";

/// Maximum number of points in one gesture file.
const MAX_GESTURE_POINTS: usize = 1_000_000;

/// Maximum input size in bytes to prevent unbounded memory growth.
const MAX_INPUT_SIZE: usize = 64_000_000;

const APP_NAME: &str = "unistroke";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_SPEED: &str = "medium";

/// One stroke together with its gesture-file metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecord {
    /// Gesture name without the sequence suffix
    pub name: String,
    /// Person (or program) that recorded the gesture
    pub subject: String,
    /// Per-name sequence index, 1-based
    pub number: u32,
    /// Recording duration; not used by recognition
    pub milliseconds: u64,
    /// Recording date, e.g. `Sunday, October 18, 2026`
    pub date: String,
    /// Recording time, e.g. `4:10:14 PM`
    pub time_of_day: String,
    /// Sampled points in drawing order
    pub stroke: Stroke,
    /// Per-point `T` values, one per point; opaque. Values that are not
    /// unsigned integers are read as 0.
    pub timestamps: Vec<u64>,
}

impl GestureRecord {
    /// Create a record stamped with the current local date and time.
    ///
    /// All per-point timestamps are zero.
    pub fn new(name: impl Into<String>, subject: impl Into<String>, number: u32, stroke: Stroke) -> Self {
        let now = chrono::Local::now();
        Self {
            name: name.into(),
            subject: subject.into(),
            number,
            milliseconds: 0,
            date: now.format("%A, %B %d, %Y").to_string(),
            time_of_day: now.format("%-I:%M:%S %p").to_string(),
            timestamps: vec![0; stroke.len()],
            stroke,
        }
    }

    /// `{name}{number:02}`, used both as `Name` attribute and file stem.
    pub fn file_stem(&self) -> String {
        format!("{}{:02}", self.name, self.number)
    }

    /// File name including the extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), GESTURE_FILE_EXTENSION)
    }

    /// Read a record from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let mut data = Vec::new();
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut data)?;
        if data.len() > MAX_INPUT_SIZE {
            return Err(Error::parse(format!(
                "input exceeds {MAX_INPUT_SIZE} bytes"
            )));
        }
        Self::read_from_bytes(&data)
    }

    /// Read a record from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        Self::read_from_reader(&mut reader)
    }

    /// Read a record from a byte slice.
    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::parse(format!("input is not UTF-8: {e}")))?;
        parse_gesture(text)
    }

    /// Write the record to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(
            writer,
            r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#
        )?;
        writeln!(
            writer,
            r#"<Gesture Name="{}" Subject="{}" Speed="{}" Number="{}" NumPts="{}" Milliseconds="{}" AppName="{}" AppVer="{}" Date="{}" TimeOfDay="{}">"#,
            escape(&self.file_stem()),
            escape(&self.subject),
            DEFAULT_SPEED,
            self.number,
            self.stroke.len(),
            self.milliseconds,
            APP_NAME,
            APP_VERSION,
            escape(&self.date),
            escape(&self.time_of_day),
        )?;
        for (i, p) in self.stroke.iter().enumerate() {
            let t = self.timestamps.get(i).copied().unwrap_or(0);
            writeln!(writer, r#"  <Point X="{}" Y="{}" T="{}" />"#, p.x, p.y, t)?;
        }
        writeln!(writer, "</Gesture>")?;
        Ok(())
    }

    /// Write the record to a file, replacing any existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the record to a byte vector.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// A start (or empty-element) tag with its attributes.
struct Tag<'a> {
    name: &'a str,
    attrs: Vec<(&'a str, String)>,
    line: usize,
}

impl Tag<'_> {
    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn required(&self, key: &str) -> Result<&str> {
        self.attr(key).ok_or_else(|| {
            Error::parse_at(
                self.line,
                format!("<{}> is missing attribute {key}", self.name),
            )
        })
    }

    fn number<T: std::str::FromStr>(&self, key: &str, value: &str) -> Result<T> {
        value.trim().parse().map_err(|_| {
            Error::parse_at(
                self.line,
                format!("<{}> attribute {key}=\"{value}\" is not a number", self.name),
            )
        })
    }
}

fn parse_gesture(text: &str) -> Result<GestureRecord> {
    let tags = scan_tags(text)?;

    let gesture = tags
        .iter()
        .find(|t| t.name == "Gesture")
        .ok_or_else(|| Error::parse("no <Gesture> element"))?;

    let raw_name = gesture.required("Name")?;
    let number = match gesture.attr("Number") {
        Some(v) => gesture.number::<u32>("Number", v)?,
        None => 1,
    };
    let milliseconds = match gesture.attr("Milliseconds") {
        Some(v) => gesture.number::<u64>("Milliseconds", v).unwrap_or(0),
        None => 0,
    };

    let mut stroke = Stroke::new();
    let mut timestamps = Vec::new();
    for tag in tags.iter().filter(|t| t.name == "Point") {
        if stroke.len() >= MAX_GESTURE_POINTS {
            return Err(Error::parse(format!(
                "more than {MAX_GESTURE_POINTS} points"
            )));
        }
        let x: f64 = tag.number("X", tag.required("X")?)?;
        let y: f64 = tag.number("Y", tag.required("Y")?)?;
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::parse_at(tag.line, "point coordinate is not finite"));
        }
        // Other writers use fractional or signed times; keep the point
        let t = match tag.attr("T") {
            Some(v) => tag.number::<u64>("T", v).unwrap_or(0),
            None => 0,
        };
        stroke.push(Point::new(x, y));
        timestamps.push(t);
    }

    if let Some(v) = gesture.attr("NumPts") {
        let declared: usize = gesture.number("NumPts", v)?;
        if declared != stroke.len() {
            return Err(Error::parse_at(
                gesture.line,
                format!("NumPts={declared} but {} <Point> elements found", stroke.len()),
            ));
        }
    }

    Ok(GestureRecord {
        name: strip_number_suffix(raw_name, number).to_string(),
        subject: gesture.attr("Subject").unwrap_or_default().to_string(),
        number,
        milliseconds,
        date: gesture.attr("Date").unwrap_or_default().to_string(),
        time_of_day: gesture.attr("TimeOfDay").unwrap_or_default().to_string(),
        stroke,
        timestamps,
    })
}

/// `circle01` with number 1 -> `circle`; names without the suffix are kept.
fn strip_number_suffix(raw: &str, number: u32) -> &str {
    let suffix = format!("{number:02}");
    match raw.strip_suffix(suffix.as_str()) {
        Some(stem) if !stem.is_empty() => stem,
        _ => raw,
    }
}

/// Collect every start / empty-element tag in document order.
fn scan_tags(text: &str) -> Result<Vec<Tag<'_>>> {
    let mut tags = Vec::new();
    let mut pos = 0;
    // Line of `counted`; advanced only over bytes not yet seen
    let mut line = 1;
    let mut counted = 0;

    while let Some(offset) = text[pos..].find('<') {
        let start = pos + offset;
        let rest = &text[start..];
        line += count_newlines(&text[counted..start]);
        counted = start;

        let skip_to = |terminator: &str| -> Result<usize> {
            rest.find(terminator)
                .map(|end| start + end + terminator.len())
                .ok_or_else(|| Error::parse_at(line, format!("unterminated markup, expected {terminator}")))
        };

        if rest.starts_with("<?") {
            pos = skip_to("?>")?;
        } else if rest.starts_with("<!--") {
            pos = skip_to("-->")?;
        } else if rest.starts_with("<!") || rest.starts_with("</") {
            pos = skip_to(">")?;
        } else {
            let (tag, end) = parse_start_tag(text, start, line)?;
            tags.push(tag);
            pos = end;
        }
    }

    Ok(tags)
}

/// Parse `<Name a="1" b='2' ...>` or `<Name ... />` beginning at `start`.
///
/// Returns the tag and the byte offset just past its closing `>`.
fn parse_start_tag(text: &str, start: usize, line: usize) -> Result<(Tag<'_>, usize)> {
    let bytes = text.as_bytes();
    let mut i = start + 1;

    let name_start = i;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }
    let name = &text[name_start..i];
    if name.is_empty() {
        return Err(Error::parse_at(line, "empty element name"));
    }

    let mut attrs = Vec::new();
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return Err(Error::parse_at(line, format!("unterminated <{name}>"))),
            Some(b'>') => return Ok((Tag { name, attrs, line }, i + 1)),
            Some(b'/') if bytes.get(i + 1) == Some(&b'>') => {
                return Ok((Tag { name, attrs, line }, i + 2));
            }
            Some(_) => {}
        }

        let key_start = i;
        while i < bytes.len() && bytes[i] != b'=' && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
            i += 1;
        }
        let key = &text[key_start..i];
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'=') {
            return Err(Error::parse_at(line, format!("attribute {key} has no value")));
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let quote = match bytes.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => q,
            _ => return Err(Error::parse_at(line, format!("attribute {key} is not quoted"))),
        };
        i += 1;
        let value_start = i;
        while i < bytes.len() && bytes[i] != quote {
            i += 1;
        }
        if i >= bytes.len() {
            return Err(Error::parse_at(line, format!("unterminated value for {key}")));
        }
        attrs.push((key, unescape(&text[value_start..i])));
        i += 1;
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=semi]),
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    out
}
