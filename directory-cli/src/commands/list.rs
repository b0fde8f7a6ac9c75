use anyhow::Result;
use directory_client::{DirectoryClient, DirectoryView, HtmlPage, Transport};

use super::{settle, Context};
use crate::prompt::AssumeYes;
use crate::terminal::TerminalView;

pub async fn execute(ctx: &Context, html: bool) -> Result<()> {
    let transport = ctx.transport()?;
    let display = ctx.config.display.clone();

    if html {
        let mut client = DirectoryClient::new(transport, HtmlPage::new()?, AssumeYes, display);
        let result = load(&mut client).await;
        println!("{}", client.view().page_html()?);
        return result;
    }

    let mut client = DirectoryClient::new(transport, TerminalView::stdout(), AssumeYes, display);
    load(&mut client).await
}

/// Fetch and render the list
///
/// Unlike `initialize`, a failed fetch fails the command so the exit
/// status reflects it; the failure itself is already in the list region.
async fn load<T, V>(client: &mut DirectoryClient<T, V, AssumeYes>) -> Result<()>
where
    T: Transport,
    V: DirectoryView,
{
    settle(client.refresh_list().await.map(|_| ()))
}
