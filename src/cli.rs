//! Command-line surface

use clap::Parser;

use crate::input::Overrides;

#[derive(Parser, Debug, Default)]
#[command(name = "tgsend")]
#[command(about = "Send a Telegram message through a bot, using aliases from tgsend.yml")]
#[command(
    long_about = "Send a Telegram message through a bot, using aliases from tgsend.yml.\n\n\
The message comes from --msg or from standard input, never both. Standard input is \
always read to the end, even when --msg is given, so run with </dev/null (or a pipe) \
when not piping a message in; otherwise tgsend waits for input."
)]
#[command(version)]
pub struct Cli {
    /// Bot alias (defaults.bot when omitted)
    #[arg(long, value_name = "ALIAS")]
    pub bot: Option<String>,

    /// Chat alias (defaults.chat when omitted)
    #[arg(long, value_name = "ALIAS")]
    pub chat: Option<String>,

    /// Send without notification sound
    #[arg(long, default_value_t = false)]
    pub silent: bool,

    /// Message text
    #[arg(long, value_name = "TEXT")]
    pub msg: Option<String>,

    /// Format the message as Markdown
    #[arg(long, default_value_t = false)]
    pub md: bool,

    /// Format the message as HTML
    #[arg(long, default_value_t = false)]
    pub html: bool,
}

impl Cli {
    pub fn into_overrides(self) -> Overrides {
        Overrides {
            bot: self.bot,
            chat: self.chat,
            silent: self.silent,
            message: self.msg.unwrap_or_default(),
            markdown: self.md,
            html: self.html,
        }
    }
}
