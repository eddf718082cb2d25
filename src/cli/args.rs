//! Command-line argument parsing.
//!
//! Flags are written in the single-dash long style (`-url`, `-mode`). clap
//! only understands `--url`, so multi-letter single-dash flags are rewritten
//! before parsing. `--url` and `-url=value` are accepted as well.

use crate::error::{Error, Result};
use crate::options::{Mode, RequestOptions};
use crate::share::ShareLink;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Flags that consume the following token as their value.
const VALUE_FLAGS: &[&str] = &["mode", "url", "o", "timeout"];

/// gdfetch - download files shared on Google Drive
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "gdfetch",
    version,
    about = "Download a publicly shared Google Drive file",
    override_usage = "gdfetch -url <URL> [-mode show|download] [-y] [-o FILE] [-timeout SECONDS]",
    args_override_self = true
)]
pub struct Args {
    /// [Optional] operation to perform: "download" (download the file) or "show"
    /// (show information about the file)
    #[arg(long, value_name = "MODE", default_value = "download", allow_hyphen_values = true)]
    pub mode: String,

    /// [Optional] skip confirmation before starting the download
    #[arg(short = 'y')]
    pub yes: bool,

    /// <Required> the URL you get on Google Drive with "Share" => "Copy link"
    #[arg(long, value_name = "URL", allow_hyphen_values = true)]
    pub url: Option<String>,

    /// [Optional] filename to save the file as
    #[arg(short = 'o', value_name = "FILE", allow_hyphen_values = true)]
    pub output: Option<String>,

    /// [Optional] give up on the request after this many seconds (0 waits forever)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Fetch with these options.
    Run(RequestOptions),
    /// Print this text (help or version) and exit successfully.
    Info(String),
}

impl Args {
    /// Validate the parsed flags into [`RequestOptions`].
    ///
    /// The URL is checked before the mode.
    pub fn into_options(self) -> Result<RequestOptions> {
        let link = ShareLink::parse(self.url.as_deref().unwrap_or_default())?;
        let mode: Mode = self.mode.parse()?;
        Ok(RequestOptions {
            mode,
            skip_confirmation: self.yes,
            link,
            output: self.output.filter(|o| !o.is_empty()).map(PathBuf::from),
            timeout: self.timeout.filter(|s| *s > 0).map(Duration::from_secs),
        })
    }
}

/// Reject tokens that are not part of a `-key value` pair.
///
/// Every token after the program name must either start with `-` or directly
/// follow one that does. This catches shell-quoting mistakes such as an
/// unquoted `&` splitting the URL.
pub fn check_positional<S: AsRef<str>>(args: &[S]) -> Result<()> {
    let mut after_flag = false;
    for arg in args.iter().skip(1) {
        let arg = arg.as_ref();
        if arg.starts_with('-') {
            after_flag = true;
            continue;
        }
        if !after_flag {
            return Err(Error::MalformedArguments(format!(
                "All arguments should be in \"-key value\" style (unexpected \"{}\").",
                arg
            )));
        }
        after_flag = false;
    }
    Ok(())
}

/// Rewrite single-dash long flags (`-url`) into the `--url` form clap
/// expects.
///
/// Single-letter flags, values of value-taking flags, and everything after
/// `--` are left untouched.
pub fn normalize_flags<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut expects_value = false;
    let mut terminated = false;

    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        if i == 0 || terminated || expects_value {
            out.push(arg.to_string());
            expects_value = false;
            continue;
        }
        if arg == "--" {
            terminated = true;
            out.push(arg.to_string());
            continue;
        }

        let Some(flag) = arg.strip_prefix('-') else {
            out.push(arg.to_string());
            continue;
        };
        let flag = flag.strip_prefix('-').unwrap_or(flag);
        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };
        expects_value = !inline_value && VALUE_FLAGS.contains(&name);

        if name.chars().count() > 1 {
            out.push(format!("--{}", flag));
        } else {
            out.push(format!("-{}", flag));
        }
    }
    out
}

/// Parse a full command line, program name included.
pub fn parse_from<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|a| Into::<OsString>::into(a).to_string_lossy().into_owned())
        .collect();

    check_positional(&args)?;

    match Args::try_parse_from(normalize_flags(&args)) {
        Ok(parsed) => parsed.into_options().map(Invocation::Run),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(e.to_string()))
        }
        Err(e) => Err(Error::MalformedArguments(
            e.render().to_string().lines().next().unwrap_or_default().to_string(),
        )),
    }
}

/// Help text describing every flag.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
