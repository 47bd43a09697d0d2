use crate::core::{ReporterResult, Verbosity};
use clap::{Args, Parser, ValueEnum};

/// 他のCLIに `#[command(flatten)]` で組み込める quiet/verbose フラグ
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerbosityArgs {
    /// Do not output comprehensive progress report
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Be verbose (specify multiple times for more output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl VerbosityArgs {
    /// 検証済みの出力設定に変換
    pub fn to_verbosity(self) -> ReporterResult<Verbosity> {
        Verbosity::new(self.quiet, self.verbose)
    }
}

impl TryFrom<VerbosityArgs> for Verbosity {
    type Error = crate::core::ReporterError;

    fn try_from(args: VerbosityArgs) -> ReporterResult<Self> {
        args.to_verbosity()
    }
}

#[derive(Parser, Debug)]
#[command(name = "status_reporter")]
#[command(about = "Emit a message at every status level to inspect routing")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: VerbosityArgs,

    /// Reporter implementation to use
    #[arg(short, long, value_enum, default_value_t = ReporterKind::Terminal)]
    pub reporter: ReporterKind,

    /// Message to emit
    #[arg(default_value = "hello world")]
    pub message: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReporterKind {
    Terminal,
    Tracing,
    Noop,
}

impl ReporterKind {
    /// ファクトリーに渡す実装名
    pub const fn implementation(&self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Tracing => "tracing",
            Self::Noop => "noop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReporterError;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["status_reporter"]).unwrap();

        assert_eq!(cli.verbosity, VerbosityArgs::default());
        assert_eq!(cli.reporter, ReporterKind::Terminal);
        assert_eq!(cli.message, "hello world");
    }

    #[test]
    fn test_parse_verbose_count() {
        let cli = Cli::try_parse_from(["status_reporter", "-vv", "-r", "tracing", "msg"]).unwrap();

        assert_eq!(cli.verbosity.verbose, 2);
        assert_eq!(cli.reporter, ReporterKind::Tracing);
        assert_eq!(cli.verbosity.to_verbosity().unwrap(), Verbosity::verbose(2));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let cli = Cli::try_parse_from(["status_reporter", "-q", "-v"]).unwrap();

        let result = Verbosity::try_from(cli.verbosity);
        assert!(matches!(result, Err(ReporterError::Configuration { .. })));
    }

    #[test]
    fn test_reporter_kind_implementation() {
        assert_eq!(ReporterKind::Terminal.implementation(), "terminal");
        assert_eq!(ReporterKind::Tracing.implementation(), "tracing");
        assert_eq!(ReporterKind::Noop.implementation(), "noop");
    }
}
