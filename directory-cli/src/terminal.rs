use colored::Colorize;
use directory_client::view::EMPTY_LIST_TEXT;
use directory_client::{Banner, BannerKind, DirectoryView, EmployeeCard, ListContent};
use std::fmt::Display;
use std::io::{self, Write};

/// Directory regions printed to a terminal
///
/// Write failures (a closed pipe, say) are logged at debug level and
/// otherwise dropped.
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn line(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::debug!(error = %e, "Failed to write to terminal");
        }
    }

    fn card(&mut self, card: &EmployeeCard) {
        self.line(format_args!(
            "\n{}  {}",
            card.full_name.bold(),
            format!("[delete: staffdir delete {}]", card.id).dimmed()
        ));
        for (label, value) in [
            ("Email:", &card.email),
            ("Phone:", &card.phone),
            ("Department:", &card.department),
            ("Job Title:", &card.job_title),
            ("Hire Date:", &card.hire_date),
            ("Salary:", &card.salary),
        ] {
            self.line(format_args!("  {:<12} {}", label.cyan(), value));
        }
    }
}

impl<W: Write> DirectoryView for TerminalView<W> {
    fn set_count(&mut self, count: usize) {
        self.line(format_args!("{} {}", "Employees:".bold().underline(), count));
    }

    fn render_list(&mut self, content: ListContent) {
        match content {
            ListContent::Pending => {}
            ListContent::Empty => {
                self.line(EMPTY_LIST_TEXT.dimmed());
            }
            ListContent::Cards(cards) => {
                for card in &cards {
                    self.card(card);
                }
            }
            ListContent::Failed(message) => {
                self.line(format_args!("{} {}", "✗".red().bold(), message.red()));
            }
        }
    }

    fn show_banner(&mut self, banner: Banner) {
        match banner.kind {
            BannerKind::Success => {
                self.line(format_args!("{} {}", "✓".green().bold(), banner.text))
            }
            BannerKind::Error => {
                self.line(format_args!("{} {}", "✗".red().bold(), banner.text.red()))
            }
        }
    }

    fn reset_form(&mut self) {
        tracing::debug!("Form cleared");
    }
}
