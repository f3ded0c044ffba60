use std::env;

/// Engine configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Newline-delimited UTF-8 word list, one Korean noun per line.
    pub words_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            words_file: env::var("WORDS_FILE").unwrap_or_else(|_| "words.txt".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
