//! Wordlist writers for the supported output formats

use std::io::Write;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub trait OutputWriter {
    fn write_words(&mut self, words: &[String]) -> anyhow::Result<()>;
}

/// One word per line
pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for PlainWriter<W> {
    fn write_words(&mut self, words: &[String]) -> anyhow::Result<()> {
        for word in words {
            writeln!(self.writer, "{word}")?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct WordlistReport<'a> {
    count: usize,
    words: &'a [String],
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_words(&mut self, words: &[String]) -> anyhow::Result<()> {
        let report = WordlistReport {
            count: words.len(),
            words,
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    destination: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Plain => Box::new(PlainWriter::new(destination)),
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_plain_writer_emits_one_word_per_line() {
        let mut buffer = Vec::new();
        PlainWriter::new(&mut buffer)
            .write_words(&words(&["admin", "root"]))
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "admin\nroot\n");
    }

    #[test]
    fn test_plain_writer_emits_nothing_for_empty_list() {
        let mut buffer = Vec::new();
        PlainWriter::new(&mut buffer).write_words(&[]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_json_writer_emits_count_and_words() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_words(&words(&["admin"]))
            .unwrap();
        let expected = "{\n  \"count\": 1,\n  \"words\": [\n    \"admin\"\n  ]\n}\n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }
}
