//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_tree;
use crate::error::SpendscopeResult;
use crate::models::CategoryRegistry;

use super::transaction::parse_kind;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List the available categories
    List {
        /// Only categories of this type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
}

/// Handle a category command
pub fn handle_category_command(cmd: CategoryCommands) -> SpendscopeResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            print!(
                "{}",
                format_category_tree(CategoryRegistry::builtin(), kind)
            );
        }
    }

    Ok(())
}
