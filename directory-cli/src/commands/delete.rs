use anyhow::Result;
use directory_client::DirectoryClient;

use super::{settle, Context};
use crate::prompt::{AssumeYes, TerminalConfirm};
use crate::terminal::TerminalView;

pub async fn execute(ctx: &Context, id: i64, yes: bool) -> Result<()> {
    let transport = ctx.transport()?;
    let display = ctx.config.display.clone();

    let result = if yes {
        DirectoryClient::new(transport, TerminalView::stdout(), AssumeYes, display)
            .delete_employee(id)
            .await
    } else {
        DirectoryClient::new(transport, TerminalView::stdout(), TerminalConfirm, display)
            .delete_employee(id)
            .await
    };

    settle(result)
}
