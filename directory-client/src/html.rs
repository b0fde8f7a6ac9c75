//! HTML rendering of the directory page regions
//!
//! `HtmlPage` keeps the current state of each region and renders it with
//! embedded minijinja templates. Template names end in `.html`, so values
//! are auto-escaped.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::Result;
use crate::models::{EmployeeForm, FORM_FIELDS};
use crate::view::{Banner, DirectoryView, EmployeeCard, ListContent, EMPTY_LIST_TEXT};

const TEMPLATES: [(&str, &str); 4] = [
    ("banner.html", include_str!("../templates/banner.html")),
    ("count.html", include_str!("../templates/count.html")),
    ("list.html", include_str!("../templates/list.html")),
    ("page.html", include_str!("../templates/page.html")),
];

#[derive(Serialize)]
struct ListContext<'a> {
    state: &'static str,
    message: Option<&'a str>,
    cards: &'a [EmployeeCard],
}

impl<'a> From<&'a ListContent> for ListContext<'a> {
    fn from(content: &'a ListContent) -> Self {
        match content {
            ListContent::Pending => Self {
                state: "pending",
                message: None,
                cards: &[],
            },
            ListContent::Empty => Self {
                state: "empty",
                message: Some(EMPTY_LIST_TEXT),
                cards: &[],
            },
            ListContent::Cards(cards) => Self {
                state: "cards",
                message: None,
                cards,
            },
            ListContent::Failed(message) => Self {
                state: "failed",
                message: Some(message.as_str()),
                cards: &[],
            },
        }
    }
}

/// In-memory directory page rendered to HTML
pub struct HtmlPage {
    env: Environment<'static>,
    form: EmployeeForm,
    count: usize,
    list: ListContent,
    banner: Option<Banner>,
}

impl HtmlPage {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self {
            env,
            form: EmployeeForm::default(),
            count: 0,
            list: ListContent::Pending,
            banner: None,
        })
    }

    /// Populate the form region, as a user typing into it would
    pub fn fill_form(&mut self, form: EmployeeForm) {
        self.form = form;
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn list(&self) -> &ListContent {
        &self.list
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Render the message region
    pub fn banner_html(&self) -> Result<String> {
        self.render("banner.html", context! { banner => &self.banner })
    }

    /// Render the counter region
    pub fn count_html(&self) -> Result<String> {
        self.render("count.html", context! { count => self.count })
    }

    /// Render the list region
    pub fn list_html(&self) -> Result<String> {
        self.render(
            "list.html",
            context! { list => ListContext::from(&self.list) },
        )
    }

    /// Render the whole page fragment: form, message, counter and list
    pub fn page_html(&self) -> Result<String> {
        self.render(
            "page.html",
            context! {
                fields => FORM_FIELDS,
                form => &self.form,
                banner => &self.banner,
                count => self.count,
                list => ListContext::from(&self.list),
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

impl DirectoryView for HtmlPage {
    fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    fn render_list(&mut self, content: ListContent) {
        self.list = content;
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }
}
