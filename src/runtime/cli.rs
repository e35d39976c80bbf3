use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::content::Language;
use crate::route::Route;

pub const USAGE: &str = "\
usage: folio [ROUTE] [OPTIONS]

ROUTE is a page address such as `/`, `/blog`, `/blog?post=<slug>&lang=es`
or `/brief`.

options:
  --post SLUG            open a blog post directly
  --lang en|es           blog language for this session
  --no-audio             do not start the background player
  --export-brief FILE    write the project brief as Markdown and exit
  -h, --help             show this help
";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),
    #[error("unexpected arguments: {0:?}")]
    Unexpected(Vec<OsString>),
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub help: bool,
    pub route: Option<String>,
    pub post: Option<String>,
    pub lang: Option<Language>,
    pub no_audio: bool,
    pub export_brief: Option<PathBuf>,
}

fn parse_lang(value: &str) -> Result<Language, String> {
    Language::from_code(value).ok_or_else(|| format!("unsupported language `{value}`"))
}

fn parse_path(value: &OsStr) -> Result<PathBuf, String> {
    Ok(PathBuf::from(value))
}

impl Args {
    pub fn from_env() -> Result<Self, CliError> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self, CliError> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self, CliError> {
        let help = args.contains(["-h", "--help"]);
        let no_audio = args.contains("--no-audio");
        let post = args.opt_value_from_str("--post")?;
        let lang = args.opt_value_from_fn("--lang", parse_lang)?;
        let export_brief = args.opt_value_from_os_str("--export-brief", parse_path)?;

        let mut rest = args.finish().into_iter();
        let route = rest.next().and_then(|s| s.into_string().ok());
        let extra: Vec<OsString> = rest.collect();
        if !extra.is_empty() {
            return Err(CliError::Unexpected(extra));
        }

        Ok(Self {
            help,
            route,
            post,
            lang,
            no_audio,
            export_brief,
        })
    }

    /// The starting route. `--post` replaces the route's post and `--lang`
    /// replaces its language.
    pub fn route(&self) -> Route {
        let route = self.route.as_deref().map(Route::parse).unwrap_or_default();
        let lang = self.lang.or(route.lang());
        match (&self.post, route) {
            (Some(slug), _) => Route::Blog {
                post: Some(slug.clone()),
                lang,
            },
            (None, Route::Blog { post, .. }) => Route::Blog { post, lang },
            (None, route) => route,
        }
    }

    /// `--lang` wins over a language given in the route.
    pub fn explicit_lang(&self) -> Option<Language> {
        self.route().lang().or(self.lang)
    }
}
