use std::io::{self, Read};
use std::str::FromStr;

use anyhow::Context;
use gumdrop::Options;

use fonemas::{ExceptionLevel, Transcription, TranscriptionConfig, Values};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Phonology,
    Phonetics,
    Sampa,
}

impl Default for Format {
    fn default() -> Format {
        Format::Phonology
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Format, String> {
        match s {
            "phonology" => Ok(Format::Phonology),
            "phonetics" => Ok(Format::Phonetics),
            "sampa" => Ok(Format::Sampa),
            other => Err(format!(
                "unknown format {:?}, expected phonology, phonetics or sampa",
                other
            )),
        }
    }
}

trait OutputWriter {
    fn write_transcription(&mut self, transcription: &Transcription);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter {
    format: Format,
}

impl OutputWriter for StdoutWriter {
    fn write_transcription(&mut self, transcription: &Transcription) {
        let values: &Values = match self.format {
            Format::Phonology => &transcription.phonology,
            Format::Phonetics => &transcription.phonetics,
            Format::Sampa => &transcription.sampa,
        };

        let words: Vec<&str> = values.words().iter().map(|w| w.as_str()).collect();
        println!("{}", words.join(" "));
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

struct JsonWriter {
    result: Option<Transcription>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { result: None }
    }
}

impl OutputWriter for JsonWriter {
    fn write_transcription(&mut self, transcription: &Transcription) {
        self.result = Some(transcription.clone());
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        if let Some(result) = &self.result {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        Ok(())
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "print sentence, phonology, phonetics and SAMPA as JSON")]
    structured: bool,

    #[options(
        meta = "FORMAT",
        help = "representation to print: phonology, phonetics or sampa"
    )]
    format: Option<Format>,

    #[options(help = "mark stress on monosyllables")]
    mono: bool,

    #[options(help = "add an e before word-initial s + consonant")]
    epenthesis: bool,

    #[options(help = "keep word-initial h as aspiration")]
    aspiration: bool,

    #[options(help = "move syllable-final consonants onto following vowels")]
    rehash: bool,

    #[options(no_short, meta = "MARKER", help = "SAMPA primary stress marker")]
    stress: Option<String>,

    #[options(short = "x", meta = "LEVEL", help = "syllabifier exception level (0, 1 or 2)")]
    exceptions: Option<ExceptionLevel>,

    #[options(free, help = "text to be transcribed")]
    inputs: Vec<String>,
}

impl Args {
    fn config(&self) -> TranscriptionConfig {
        let mut config = TranscriptionConfig {
            mono: self.mono,
            epenthesis: self.epenthesis,
            aspiration: self.aspiration,
            rehash: self.rehash,
            ..TranscriptionConfig::default()
        };

        if let Some(level) = self.exceptions {
            config.exceptions = level;
        }

        if let Some(stress) = &self.stress {
            config.stress = stress.into();
        }

        config
    }
}

fn read_text(inputs: &[String]) -> anyhow::Result<String> {
    let text = if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
            .lines()
            .map(|x| x.trim())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        inputs.join(" ")
    };

    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("no text to transcribe");
    }

    Ok(text.to_string())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();
    let config = args.config();
    let text = read_text(&args.inputs)?;

    let mut writer: Box<dyn OutputWriter> = if args.structured {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter {
            format: args.format.unwrap_or_default(),
        })
    };

    let transcription = Transcription::with_config(&text, &config)
        .with_context(|| format!("transcribing {:?}", text))?;

    writer.write_transcription(&transcription);
    writer.finish()
}
