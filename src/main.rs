//! portfolio-ui - portfolio page client
//!
//! Usage: portfolio-ui [options] [base-url]
//!
//! With no backend URL configured, runs in demo mode against canned data.

use std::future::Future;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use portfolio_ui::api::Comment;
use portfolio_ui::config::UiConfig;
use portfolio_ui::dom::Dom;
use portfolio_ui::{App, HttpApi, Message, Model, PortfolioApi};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let mut config = UiConfig::load()?.unwrap_or_default();
    if let Some(url) = &args.base_url {
        config.base_url = Some(url.clone());
        config.save()?;
    }
    let base_url = args
        .base_url
        .or_else(|| std::env::var("PORTFOLIO_BASE_URL").ok())
        .or(config.base_url);

    let model = Model::new(build_portfolio_page());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match base_url {
            Some(url) => run(App::new(model, HttpApi::new(url))).await,
            None => run(App::new(model, DemoApi)).await,
        }
    })
}

async fn run<A: PortfolioApi>(mut app: App<A>) -> Result<()> {
    // Land on the comments tab, as a visitor clicking its nav button would.
    if let Some(trigger) = app.model.dom.element_by_id("comments-tab") {
        app.dispatch(Message::OpenPage {
            trigger,
            page: "comments".to_string(),
        })
        .await;
    }

    app.load_comments().await;
    print_page(&app.model);
    Ok(())
}

struct CliArgs {
    base_url: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut base_url: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("Usage: portfolio-ui [options] [base-url]");
                println!();
                println!("Options:");
                println!("  --base-url <url>   Backend origin (persisted as the default)");
                println!();
                println!("Environment:");
                println!("  PORTFOLIO_BASE_URL  Backend origin");
                println!();
                println!("With no base URL configured, runs in demo mode with sample data.");
                std::process::exit(0);
            }
            "--base-url" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--base-url requires a URL");
                }
                base_url = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                anyhow::bail!("Unknown option: {arg}");
            }
            arg => {
                if base_url.is_none() {
                    base_url = Some(arg.to_string());
                } else {
                    anyhow::bail!("Unexpected argument: {arg}");
                }
            }
        }
        i += 1;
    }

    Ok(CliArgs { base_url })
}

/// The markup contract the script expects the surrounding page to provide:
/// nav buttons with inner labels, one `page-content` section per tab, the
/// comment list and form, and login/logout slots for desktop and mobile nav.
fn build_portfolio_page() -> Dom {
    let mut dom = Dom::new();
    let root = dom.root();

    let nav = dom.create_element("nav");
    dom.append_child(root, nav);
    for (id, label) in [
        ("about", "About Me"),
        ("projects", "Projects"),
        ("comments", "Comments"),
    ] {
        let button = dom.create_element("button");
        dom.set_classes(button, &["nav-button"]);
        let span = dom.create_element("span");
        dom.set_id(span, &format!("{id}-tab"));
        let text = dom.create_text(label);
        dom.append_child(span, text);
        dom.append_child(button, span);
        dom.append_child(nav, button);
    }

    let desktop_login = dom.create_element("div");
    dom.add_class(desktop_login, "login-logout-container");
    dom.append_child(nav, desktop_login);

    let mobile_nav = dom.create_element("nav");
    dom.append_child(root, mobile_nav);
    let mobile_login = dom.create_element("div");
    dom.add_class(mobile_login, "login-logout-container");
    dom.append_child(mobile_nav, mobile_login);

    for id in ["about", "projects", "comments"] {
        let section = dom.create_element("section");
        dom.set_id(section, id);
        dom.add_class(section, "page-content");
        dom.append_child(root, section);
    }

    let comments = dom
        .element_by_id("comments")
        .expect("comments section was just created");
    let list = dom.create_element("div");
    dom.set_id(list, "comments-list");
    dom.append_child(comments, list);

    let form = dom.create_element("form");
    dom.set_id(form, "comment-form");
    let message = dom.create_element("textarea");
    dom.set_name(message, "message");
    let email = dom.create_element("input");
    dom.set_name(email, "email");
    dom.append_child(form, message);
    dom.append_child(form, email);
    dom.append_child(comments, form);

    dom
}

/// Print the observable page state: section visibility, the rendered
/// comment list, and the login/logout controls.
fn print_page(model: &Model) {
    for section in model
        .dom
        .elements_with_class(&model.selectors.page_content_class)
    {
        let id = model.dom.id(section).unwrap_or("?");
        println!("[{id}] display: {}", model.dom.display(section).css());
    }

    if let Some(container) = model.dom.element_by_id(&model.selectors.comment_list_id) {
        println!("comments:");
        if let Some(list) = model.dom.first_child(container) {
            for &item in model.dom.children(list) {
                println!("  - {}", model.dom.text_content(item));
            }
        }
    }

    if let Some(form) = model.dom.element_by_id(&model.selectors.comment_form_id) {
        println!("comment form: {}", model.dom.display(form).css());
    }

    for slot in model
        .dom
        .elements_with_class(&model.selectors.login_logout_class)
    {
        if let Some(markup) = model.dom.inner_markup(slot) {
            println!("login control: {markup}");
        }
    }
}

/// Canned backend used when no base URL is configured, so the client can be
/// exercised without a server.
struct DemoApi;

impl PortfolioApi for DemoApi {
    fn fetch_comments(&self) -> impl Future<Output = Result<Vec<Comment>>> {
        async move {
            Ok(vec![
                Comment {
                    message: "Love the projects page".to_string(),
                    email: "alice@example.com".to_string(),
                },
                Comment {
                    message: "The tab navigation is slick".to_string(),
                    email: "bob@example.com".to_string(),
                },
            ])
        }
    }

    fn fetch_greetings(&self) -> impl Future<Output = Result<Vec<String>>> {
        async move { Ok(vec!["Hello!".to_string(), "Hola!".to_string()]) }
    }

    fn login_status(&self) -> impl Future<Output = Result<u16>> {
        async move { Ok(200) }
    }

    fn login_control(&self) -> impl Future<Output = Result<String>> {
        async move {
            Ok("<p><a id=\"logout-button\" href=\"/logout?continue=/index.html\">Logout</a></p>"
                .to_string())
        }
    }

    fn post_comment(&self, _fields: &[(String, String)]) -> impl Future<Output = Result<()>> {
        async move { Ok(()) }
    }
}
