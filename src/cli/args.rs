// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// userhist - Merge user-activity CSV exports, keeping each user's most recent record
pub struct Args {
    /// sort output rows by name, then user ID
    #[argh(switch)]
    pub sort: bool,

    /// log progress to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// exported CSV files to merge (arguments without the .csv suffix are ignored)
    #[argh(positional)]
    pub files: Vec<String>,
}
