use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options;
pub use unixize_engine::config::{Config, ConfigBuilder, TEXT_EXTENSIONS};
use unixize_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let action: engine_options::Action = args.action().into();
        let line_ending: engine_options::LineEnding = args.line_ending.into();

        let mut text_extensions: Vec<String> =
            TEXT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect();
        for ext in args.text_ext {
            if !text_extensions.contains(&ext) {
                text_extensions.push(ext);
            }
        }

        let config = ConfigBuilder::default()
            .paths(args.paths)
            .action(action)
            .line_ending(line_ending)
            .recursive(args.recursive)
            .text_extensions(text_extensions)
            .chunk_size(args.chunk_size.0)
            .keep_going(args.keep_going)
            .build()?;
        Ok(config)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::Action,
    engine_options::Action,
    Unixize,
    Recode,
    Decode
);
map_enum!(options::LineEnding, engine_options::LineEnding, Lf, Crlf);
