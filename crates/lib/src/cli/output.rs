use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

pub(crate) struct Output<O, E> {
    out: O,
    err: E,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O, E> Output<O, E>
where
    O: Write,
    E: Write,
{
    pub(crate) fn new(out: O, err: E, kind: OutputKind) -> Self {
        Self { out, err, kind }
    }

    /// Write the answers to both parts.
    pub(crate) fn answer<A, B>(&mut self, part1: &A, part2: &B) -> io::Result<()>
    where
        A: fmt::Display + Serialize,
        B: fmt::Display + Serialize,
    {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: Answer { part1, part2 },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "Part 1: {part1}")?;
                writeln!(self.out, "Part 2: {part2}")?;
            }
        }

        Ok(())
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message {
                        output: m,
                        kind: MessageKind::Error,
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.err, "{}: {m}", MessageKind::Error)?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
}

#[derive(Serialize)]
struct Answer<'a, A, B> {
    part1: &'a A,
    part2: &'a B,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
        }
    }
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
