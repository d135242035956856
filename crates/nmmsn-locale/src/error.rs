use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("failed to read message catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse message catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse message catalog: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

/// The transliterator could not produce a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterationError {
    #[error("no pinyin reading for '{ch}' in \"{text}\"")]
    NoReading { ch: char, text: String },
}
