use clap::ValueEnum;

/// Target line terminator as accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix line feeds
    #[default]
    #[value(alias = "linux")]
    Lf,
    /// Windows carriage return + line feed
    #[value(alias = "windows")]
    Crlf,
}

/// How much is printed while files are processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// The action selected by the mutually exclusive action flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    Unixize,
    Recode,
    Decode,
}
