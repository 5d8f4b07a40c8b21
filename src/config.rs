// src/config.rs
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use derive_builder::Builder;

use corpus_profile_domain::ProfileOptions;
use corpus_profile_infra::{JsonlSource, LineSource, TsvSource, persistence::FileReader};
use corpus_profile_ports::{CorpusSource, SourceObserver};
use corpus_profile_shared_kernel::{DomainError, ErrorContext, PresentationError, Result};

use crate::{
    args::Args,
    options::{DEFAULT_TOP_N, InputFormat, RowsFormat},
};

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub input: PathBuf,
    #[builder(default = "InputFormat::Lines")]
    pub input_format: InputFormat,
    #[builder(default)]
    pub field: Option<String>,
    #[builder(default)]
    pub options: ProfileOptions,
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,
    #[builder(default)]
    pub rows: Option<RowsFormat>,
    #[builder(default)]
    pub head: Option<usize>,
    #[builder(default = "true")]
    pub charts: bool,
    #[builder(default)]
    pub json: bool,
}

impl Config {
    /// Builds the corpus source described by this configuration.
    pub fn source(&self, observer: Arc<dyn SourceObserver>) -> Box<dyn CorpusSource> {
        match self.input_format {
            InputFormat::Lines => Box::new(LineSource::new(&self.input).with_observer(observer)),
            InputFormat::Jsonl => {
                let source = JsonlSource::new(&self.input).with_observer(observer);
                match &self.field {
                    Some(field) => Box::new(source.with_field(field.clone())),
                    None => Box::new(source),
                }
            }
            // `TryFrom<Args>` guarantees a field for TSV input.
            InputFormat::Tsv => Box::new(
                TsvSource::new(&self.input, self.field.clone().unwrap_or_default()).with_observer(observer),
            ),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = corpus_profile_shared_kernel::CorpusProfileError;

    fn try_from(args: Args) -> Result<Self> {
        let input_format =
            args.input_format.map(InputFormat::from).unwrap_or_else(|| InputFormat::from_path(&args.input));

        if input_format == InputFormat::Tsv && args.field.is_none() {
            return Err(PresentationError::ArgumentParsing {
                argument: "--field".to_string(),
                reason: "tsv input needs the column to profile".to_string(),
            }
            .into());
        }
        if input_format == InputFormat::Lines && args.field.is_some() {
            return Err(PresentationError::ArgumentParsing {
                argument: "--field".to_string(),
                reason: "line input has no fields".to_string(),
            }
            .into());
        }

        let mut options = match &args.config {
            Some(path) => load_options(path)?,
            None => ProfileOptions::default(),
        };
        if args.keep_case {
            options.to_lower = false;
        }
        if args.no_html_tags {
            options.check_html_tags = false;
        }
        if args.no_special_chars {
            options.check_special_chars = false;
        }
        if args.no_whitespace {
            options.check_whitespace = false;
        }

        if args.top == 0 {
            return Err(PresentationError::InvalidValue {
                flag: "--top".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        ConfigBuilder::default()
            .input(args.input)
            .input_format(input_format)
            .field(args.field)
            .options(options)
            .top_n(args.top)
            .rows(args.rows.map(RowsFormat::from))
            .head(args.head)
            .charts(!args.no_charts)
            .json(args.json)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}

/// Reads [`ProfileOptions`] from a YAML (`.yaml`/`.yml`) or JSON file.
pub fn load_options(path: &Path) -> Result<ProfileOptions> {
    let text = FileReader::read_to_string(path)?;
    let is_yaml = matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml"));
    let parsed: std::result::Result<ProfileOptions, String> = if is_yaml {
        serde_yaml::from_str(&text).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&text).map_err(|e| e.to_string())
    };
    let options = parsed
        .map_err(|reason| DomainError::InvalidConfiguration { reason })
        .with_context(|| format!("parsing options file '{}'", path.display()))?;
    log::debug!("loaded profile options {options:?} from '{}'", path.display());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use corpus_profile_shared_kernel::CorpusProfileError;

    use super::*;

    fn parse(argv: &[&str]) -> Result<Config> {
        let mut full = vec!["corpus_profile"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).expect("args parse"))
    }

    #[test]
    fn defaults_profile_everything() {
        let config = parse(&["corpus.txt"]).expect("config builds");
        assert_eq!(config.input_format, InputFormat::Lines);
        assert_eq!(config.options, ProfileOptions::default());
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert!(config.charts);
    }

    #[test]
    fn flags_disable_details() {
        let config =
            parse(&["corpus.txt", "--keep-case", "--no-html-tags", "--no-special-chars", "--no-whitespace"])
                .expect("config builds");
        assert_eq!(config.options, ProfileOptions::base_only().with_to_lower(false));
    }

    #[test]
    fn tsv_requires_field() {
        let err = parse(&["rows.tsv"]).expect_err("field required");
        assert!(err.to_string().contains("--field"));
        let config = parse(&["rows.tsv", "--field", "text"]).expect("config builds");
        assert_eq!(config.input_format, InputFormat::Tsv);
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let config = parse(&["rows.txt", "--input-format", "jsonl"]).expect("config builds");
        assert_eq!(config.input_format, InputFormat::Jsonl);
        assert!(config.field.is_none());
    }

    #[test]
    fn options_file_is_merged_with_flags() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().expect("temp file");
        writeln!(file, "to_lower: false\ncheck_whitespace: false").expect("write");
        let path = file.path().to_str().expect("utf-8 path").to_string();

        let config = parse(&["corpus.txt", "--config", &path, "--no-html-tags"]).expect("config builds");
        assert_eq!(
            config.options,
            ProfileOptions::default().with_to_lower(false).with_whitespace(false).with_html_tags(false)
        );
    }

    #[test]
    fn invalid_options_file_is_reported_with_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().expect("temp file");
        write!(file, "{{ \"to_lower\": \"yes\" }}").expect("write");
        let err = load_options(file.path()).expect_err("invalid options");
        assert!(err.to_string().contains("parsing options file"));
        match &err {
            CorpusProfileError::Context { source, .. } => assert!(matches!(
                **source,
                CorpusProfileError::Domain(DomainError::InvalidConfiguration { .. })
            )),
            other => panic!("expected context, got {other:?}"),
        }
    }

    #[test]
    fn unknown_option_key_is_invalid_configuration() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().expect("temp file");
        writeln!(file, "lowercase: true").expect("write");
        let err = load_options(file.path()).expect_err("unknown key");
        let source = std::error::Error::source(&err).expect("source kept");
        assert!(source.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn zero_top_is_rejected() {
        assert!(parse(&["corpus.txt", "--top", "0"]).is_err());
    }
}
