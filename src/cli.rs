use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static HELP: &str = concat!(
    "Usage: wrapsnake [<options>]\n",
    "\n",
    "Play snake on a wrapping grid.  Eat the red food, grab the gold bonus\n",
    "food before it vanishes, and avoid the blue obstacles and yourself.\n",
    "\n",
    "Options:\n",
    "  --config <path>     Read configuration from the given file\n",
    "  --log-file <path>   Write log messages to the given file\n",
    "  --seed <int>        Seed the random layout of obstacles and food\n",
    "  -h, --help          Display this help message and exit\n",
    "  -V, --version       Show the program version and exit\n",
);

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) seed: Option<u64>,
}

impl CliCommand {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                Arg::Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}
