use anyhow::Result;
use clap::Args;
use directory_client::{DirectoryClient, EmployeeForm};

use super::{settle, Context};
use crate::prompt::{self, AssumeYes};
use crate::terminal::TerminalView;

#[derive(Args)]
pub struct AddArgs {
    /// First name
    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// Email address
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Department
    #[arg(long, value_name = "NAME")]
    pub department: Option<String>,

    /// Job title
    #[arg(long, value_name = "TITLE")]
    pub job_title: Option<String>,

    /// Hire date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub hire_date: Option<String>,

    /// Annual salary
    #[arg(long, value_name = "AMOUNT")]
    pub salary: Option<String>,

    /// Never prompt; missing fields are sent empty
    #[arg(long)]
    pub no_prompt: bool,
}

impl AddArgs {
    /// Field values given on the command line, keyed by form name
    fn provided(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("firstName", self.first_name.as_deref()),
            ("lastName", self.last_name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("department", self.department.as_deref()),
            ("jobTitle", self.job_title.as_deref()),
            ("hireDate", self.hire_date.as_deref()),
            ("salary", self.salary.as_deref()),
        ]
    }
}

pub async fn execute(ctx: &Context, args: AddArgs) -> Result<()> {
    let form = collect_form(&args)?;

    let mut client = DirectoryClient::new(
        ctx.transport()?,
        TerminalView::stdout(),
        AssumeYes,
        ctx.config.display.clone(),
    );
    let result = client.submit_create(&form).await;
    settle(result)
}

fn collect_form(args: &AddArgs) -> Result<EmployeeForm> {
    let mut fields = Vec::new();
    for (name, value) in args.provided() {
        let value = match value {
            Some(value) => value.to_string(),
            None if args.no_prompt => String::new(),
            None => prompt::field(name)?,
        };
        fields.push((name, value));
    }
    Ok(EmployeeForm::from_fields(fields))
}
