//! CLI command definitions

use crate::application::{Operation, Request};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pudding")]
#[command(
    about = "Patch some lines to an existing text file, with the ability to undo the patch",
    long_about = None
)]
#[command(version)]
#[command(after_help = "The name of a patch file ends with .patch, defaults to patch.patch")]
pub struct Cli {
    /// Do unpatch instead of patch
    #[arg(short = 'u')]
    pub unpatch: bool,

    /// Remove ALL lines patched by this tool; the patch file can be omitted
    #[arg(short = 'U', conflicts_with = "unpatch")]
    pub unpatch_all: bool,

    /// Safe mode, back up the target file as <target>.bak
    #[arg(short = 's')]
    pub safe: bool,

    /// Comment symbol used by the target file [default: #]
    #[arg(short = 'c', value_name = "COMMENT_SYMBOL", allow_hyphen_values = true)]
    pub comment: Option<String>,

    /// Patch file (*.patch) and target file, in any order
    #[arg(value_name = "FILES")]
    pub args: Vec<String>,
}

impl Cli {
    pub fn operation(&self) -> Operation {
        if self.unpatch_all {
            Operation::UnpatchAll
        } else if self.unpatch {
            Operation::Unpatch
        } else {
            Operation::Patch
        }
    }

    pub fn into_request(self) -> Request {
        Request {
            operation: self.operation(),
            safe: self.safe,
            comment: self.comment,
            args: self.args,
        }
    }
}

/// True when the raw arguments ask for usage only: none at all, or a sole `/?`.
pub fn wants_usage(raw: &[String]) -> bool {
    match raw {
        [] => true,
        [only] => only == "/?",
        _ => false,
    }
}
