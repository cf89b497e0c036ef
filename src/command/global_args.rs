use clap::Args;

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// More output, repeat for even more.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Hand assets over as stored instead of formatting them.
    #[clap(long, global = true)]
    pub disable_formatting: bool,
}
